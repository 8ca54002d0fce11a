#[cfg(test)]
mod resolver_tests {
    use rox::ast::*;
    use rox::interpreter::Interpreter;
    use rox::parser::Parser;
    use rox::resolver::Resolver;
    use rox::scanner::Scanner;
    use rox::LoxError;

    /// Scan, parse and resolve `source`, returning the tree, the interpreter
    /// holding the binding table, and every reported error.
    fn resolve(source: &str) -> (Vec<Stmt>, Interpreter, Vec<LoxError>) {
        let mut errors: Vec<LoxError> = Vec::new();
        let tokens = Scanner::new(source).scan_tokens(&mut errors);
        let statements = Parser::new(tokens, &mut errors).parse();
        assert!(errors.is_empty(), "unexpected syntax errors: {:?}", errors);

        let mut interpreter = Interpreter::with_output(Box::new(std::io::sink()));
        let mut resolver = Resolver::new(&mut interpreter, &mut errors);
        resolver.resolve(&statements);
        let had_error = resolver.had_error();
        assert_eq!(had_error, !errors.is_empty());

        (statements, interpreter, errors)
    }

    fn messages(errors: &[LoxError]) -> Vec<String> {
        errors.iter().map(LoxError::message).collect()
    }

    /// The expression printed by the first `print` found in `statements`,
    /// searching blocks and function bodies depth first.
    fn first_print(statements: &[Stmt]) -> Option<&Expr> {
        statements.iter().find_map(|stmt| match stmt {
            Stmt::Print(expr) => Some(expr),
            Stmt::Block(inner) => first_print(inner),
            Stmt::Function(decl) => first_print(&decl.body),
            _ => None,
        })
    }

    #[test]
    fn test_resolver_01_read_in_own_initializer_at_top_level() {
        let (_, _, errors) = resolve("var a = a;\nprint a;");

        assert_eq!(
            messages(&errors),
            vec!["Can't read local variable in its own initializer."]
        );
        assert_eq!(
            errors[0].to_string(),
            "[line 1] Error at 'a': Can't read local variable in its own initializer."
        );
    }

    #[test]
    fn test_resolver_02_read_in_own_initializer_in_block() {
        let (_, _, errors) = resolve("var a = 1; { var a = a; }");

        assert_eq!(
            messages(&errors),
            vec!["Can't read local variable in its own initializer."]
        );
    }

    #[test]
    fn test_resolver_03_redeclaration() {
        let (_, _, errors) = resolve("{ var a = 1; var a = 2; }");

        assert_eq!(
            messages(&errors),
            vec!["Already a variable with this name in this scope."]
        );
    }

    #[test]
    fn test_resolver_04_globals_may_be_redeclared() {
        let (_, _, errors) = resolve("var a = 1; var a = 2; fun f() {} fun f() {}");

        assert!(errors.is_empty(), "{:?}", errors);
    }

    #[test]
    fn test_resolver_05_top_level_return() {
        let (_, _, errors) = resolve("return 1;");

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "[line 1] Error at 'return': Can't return from top-level code."
        );
    }

    #[test]
    fn test_resolver_06_keeps_going_after_an_error() {
        let (_, _, errors) = resolve("return;\n{ var b = 1; var b = 2; }\nfun f() { return; }");

        assert_eq!(
            messages(&errors),
            vec![
                "Can't return from top-level code.",
                "Already a variable with this name in this scope.",
            ]
        );
    }

    #[test]
    fn test_resolver_07_local_distances() {
        let (statements, interpreter, errors) = resolve("{ var a = 1; { print a; } }");
        assert!(errors.is_empty());

        let expr = first_print(&statements).expect("print statement");
        assert_eq!(interpreter.resolved_depth(expr.id), Some(1));
    }

    #[test]
    fn test_resolver_08_globals_are_left_unrecorded() {
        let (statements, interpreter, errors) = resolve("var g = 1; { print g; }");
        assert!(errors.is_empty());

        let expr = first_print(&statements).expect("print statement");
        assert_eq!(interpreter.resolved_depth(expr.id), None);
    }

    #[test]
    fn test_resolver_09_parameters_live_in_the_function_scope() {
        let (statements, interpreter, errors) = resolve("fun f(x) { print x; }");
        assert!(errors.is_empty());

        let expr = first_print(&statements).expect("print statement");
        assert_eq!(interpreter.resolved_depth(expr.id), Some(0));
    }

    #[test]
    fn test_resolver_10_closure_captures_enclosing_local() {
        let (statements, interpreter, errors) =
            resolve("fun outer() { var n = 0; fun inner() { print n; } }");
        assert!(errors.is_empty());

        let expr = first_print(&statements).expect("print statement");
        assert_eq!(interpreter.resolved_depth(expr.id), Some(1));
    }

    #[test]
    fn test_resolver_11_redeclared_global_reads_previous_binding() {
        let (_, _, errors) = resolve("var a = 1;\nvar a = a + 1;\nprint a;");

        assert!(errors.is_empty(), "{:?}", errors);
    }

    #[test]
    fn test_resolver_12_global_bound_by_an_earlier_run() {
        let mut errors: Vec<LoxError> = Vec::new();
        let mut interpreter = Interpreter::with_output(Box::new(std::io::sink()));

        for source in ["var a = 1;", "var a = a + 1;"] {
            let tokens = Scanner::new(source).scan_tokens(&mut errors);
            let statements = Parser::new(tokens, &mut errors).parse();
            let mut resolver = Resolver::new(&mut interpreter, &mut errors);
            resolver.resolve(&statements);
            assert!(!resolver.had_error());
            interpreter.interpret(&statements).unwrap();
        }

        assert!(errors.is_empty(), "{:?}", errors);
        assert!(interpreter.is_global("a"));
    }
}
