#[cfg(test)]
mod exit_status_tests {
    use std::fs;
    use std::path::PathBuf;
    use std::process::{Command, Output};

    use rox::{Lox, LoxError, RunStatus};

    /// Write `source` to a scratch file and run `rox <command> <file>` on it.
    fn rox(command: &str, name: &str, source: &str) -> Output {
        let path: PathBuf = std::env::temp_dir().join(format!(
            "rox-{}-{}.lox",
            std::process::id(),
            name
        ));
        fs::write(&path, source).unwrap();

        let output = Command::new(env!("CARGO_BIN_EXE_rox"))
            .arg(command)
            .arg(&path)
            .output()
            .unwrap();

        let _ = fs::remove_file(&path);
        output
    }

    #[test]
    fn test_exit_01_status_codes() {
        assert_eq!(RunStatus::Success.exit_code(), 0);
        assert_eq!(RunStatus::StaticError.exit_code(), 65);
        assert_eq!(RunStatus::RuntimeError.exit_code(), 70);
    }

    #[test]
    fn test_exit_02_static_error_skips_execution() {
        let mut lox = Lox::with_output(Box::new(std::io::sink()));
        let mut errors: Vec<LoxError> = Vec::new();

        let status = lox.run("print \"before\";\nreturn 1;", &mut errors);

        assert_eq!(status, RunStatus::StaticError);
        assert!(errors.iter().all(LoxError::is_static));
    }

    #[test]
    fn test_exit_03_run_clean_program() {
        let output = rox("run", "clean", "var a = 40; print a + 2;");

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(String::from_utf8_lossy(&output.stdout), "42\n");
        assert!(output.stderr.is_empty());
    }

    #[test]
    fn test_exit_04_run_syntax_error() {
        let output = rox("run", "syntax", "print 0;\n1 +;");

        assert_eq!(output.status.code(), Some(65));
        assert!(output.stdout.is_empty());
        assert_eq!(
            String::from_utf8_lossy(&output.stderr),
            "[line 2] Error at ';': Expect expression.\n"
        );
    }

    #[test]
    fn test_exit_05_run_runtime_error() {
        let output = rox("run", "runtime", "print 1 + \"a\";");

        assert_eq!(output.status.code(), Some(70));
        assert!(output.stdout.is_empty());
        assert_eq!(
            String::from_utf8_lossy(&output.stderr),
            "Operands must be either two strings or two numbers!\n[line 1]\n"
        );
    }

    #[test]
    fn test_exit_06_tokenize() {
        let output = rox("tokenize", "tokens", "var x = 1;");

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            "VAR var null\nIDENTIFIER x null\nEQUAL = null\nNUMBER 1 1.0\nSEMICOLON ; null\nEOF  null\n"
        );
    }

    #[test]
    fn test_exit_07_tokenize_lexical_error() {
        let output = rox("tokenize", "lexerr", "@;");

        assert_eq!(output.status.code(), Some(65));
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            "SEMICOLON ; null\nEOF  null\n"
        );
        assert_eq!(
            String::from_utf8_lossy(&output.stderr),
            "[line 1] Error: Unexpected character: @\n"
        );
    }

    #[test]
    fn test_exit_08_deep_recursion_runs() {
        let output = rox(
            "run",
            "deep",
            "fun f(n) { if (n == 0) return 0; return f(n - 1) + 1; } print f(900);",
        );

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(String::from_utf8_lossy(&output.stdout), "900\n");
    }

    #[test]
    fn test_exit_09_unbounded_recursion_is_a_runtime_error() {
        let output = rox(
            "run",
            "unbounded",
            "fun f(n) { if (n == 0) return 0; return f(n - 1) + 1; } print f(10000);",
        );

        assert_eq!(output.status.code(), Some(70));
        assert!(output.stdout.is_empty());
        assert_eq!(
            String::from_utf8_lossy(&output.stderr),
            "Stack overflow.\n[line 1]\n"
        );
    }
}
