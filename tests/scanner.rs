#[cfg(test)]
mod scanner_tests {
    use rox::scanner::*;
    use rox::token::*;
    use rox::LoxError;

    fn assert_token_sequence(source: &str, expected: &[(TokenType, &str)]) {
        let scanner = Scanner::new(source);
        let tokens: Vec<_> = scanner.filter_map(Result::ok).collect();

        assert_eq!(tokens.len(), expected.len());

        for (actual, (expected_type, expected_lexeme)) in tokens.iter().zip(expected.iter()) {
            assert_eq!(actual.token_type, *expected_type);
            assert_eq!(actual.lexeme, *expected_lexeme);
        }
    }

    fn scan_all(source: &str) -> (Vec<Token>, Vec<LoxError>) {
        let mut errors: Vec<LoxError> = Vec::new();
        let tokens = Scanner::new(source).scan_tokens(&mut errors);
        (tokens, errors)
    }

    #[test]
    fn test_scanner_01_symbols() {
        assert_token_sequence(
            "({*.,+*})",
            &[
                (TokenType::LEFT_PAREN, "("),
                (TokenType::LEFT_BRACE, "{"),
                (TokenType::STAR, "*"),
                (TokenType::DOT, "."),
                (TokenType::COMMA, ","),
                (TokenType::PLUS, "+"),
                (TokenType::STAR, "*"),
                (TokenType::RIGHT_BRACE, "}"),
                (TokenType::RIGHT_PAREN, ")"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_02_operators() {
        let (tokens, errors) = scan_all("!= = == > >= < <=");

        assert!(errors.is_empty());
        assert_token_sequence(
            "!= = == > >= < <=",
            &[
                (TokenType::BANG_EQUAL, "!="),
                (TokenType::EQUAL, "="),
                (TokenType::EQUAL_EQUAL, "=="),
                (TokenType::GREATER, ">"),
                (TokenType::GREATER_EQUAL, ">="),
                (TokenType::LESS, "<"),
                (TokenType::LESS_EQUAL, "<="),
                (TokenType::EOF, ""),
            ],
        );
        assert!(tokens.iter().all(|t| t.line == 1));
    }

    #[test]
    fn test_scanner_03_strings() {
        let (tokens, errors) = scan_all("\"\" \"123\" \"a\nb\"");

        assert!(errors.is_empty());
        assert_eq!(tokens.len(), 4);

        let contents: Vec<&str> = tokens
            .iter()
            .filter_map(|t| match &t.token_type {
                TokenType::STRING(s) => Some(s.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(contents, vec!["", "123", "a\nb"]);

        assert_eq!(tokens[1].lexeme, "\"123\"");
        assert_eq!(tokens[3].token_type, TokenType::EOF);
        assert_eq!(tokens[3].line, 2);
    }

    #[test]
    fn test_scanner_04_unterminated_string() {
        let (tokens, errors) = scan_all("print \"oops");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "[line 1] Error: Unterminated string.");
        assert!(!tokens
            .iter()
            .any(|t| t.token_type == TokenType::STRING(String::new())));
        assert_eq!(tokens.last().map(|t| t.token_type.clone()), Some(TokenType::EOF));
    }

    #[test]
    fn test_unexpected_chars_token_sequence() {
        let results: Vec<_> = Scanner::new(",.$(#").collect();

        assert_eq!(results.len(), 6);

        let errors: Vec<&LoxError> = results.iter().filter_map(|r| r.as_ref().err()).collect();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.to_string().contains("Unexpected character")));
        assert_eq!(errors[0].to_string(), "[line 1] Error: Unexpected character: $");

        assert_token_sequence(
            ",.$(#",
            &[
                (TokenType::COMMA, ","),
                (TokenType::DOT, "."),
                (TokenType::LEFT_PAREN, "("),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_05_multibyte_character_reported_once() {
        let (tokens, errors) = scan_all("é;");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message(), "Unexpected character: é");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].token_type, TokenType::SEMICOLON);
    }

    #[test]
    fn test_scanner_06_numbers() {
        let (tokens, errors) = scan_all("123 45.67 123.");

        assert!(errors.is_empty());
        assert_token_sequence(
            "123 45.67 123.",
            &[
                (TokenType::NUMBER(0.0), "123"),
                (TokenType::NUMBER(0.0), "45.67"),
                (TokenType::NUMBER(0.0), "123"),
                (TokenType::DOT, "."),
                (TokenType::EOF, ""),
            ],
        );
        assert_eq!(tokens[1].literal(), Literal::Number(45.67));
    }

    #[test]
    fn test_scanner_07_keywords_and_identifiers() {
        assert_token_sequence(
            "var orchid = nil; class _x1 fun and or",
            &[
                (TokenType::VAR, "var"),
                (TokenType::IDENTIFIER, "orchid"),
                (TokenType::EQUAL, "="),
                (TokenType::NIL, "nil"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::CLASS, "class"),
                (TokenType::IDENTIFIER, "_x1"),
                (TokenType::FUN, "fun"),
                (TokenType::AND, "and"),
                (TokenType::OR, "or"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_08_comments_and_lines() {
        let (tokens, errors) = scan_all("// nothing here\n/ // tail\n+");

        assert!(errors.is_empty());
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].token_type, TokenType::SLASH);
        assert_eq!(tokens[0].line, 2);
        assert_eq!(tokens[1].token_type, TokenType::PLUS);
        assert_eq!(tokens[1].line, 3);
    }

    #[test]
    fn test_scanner_09_empty_input_yields_single_eof() {
        let mut scanner = Scanner::new("");

        let eof = scanner.next();
        assert!(matches!(eof, Some(Ok(ref t)) if t.token_type == TokenType::EOF));
        assert!(scanner.next().is_none());
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_token_display() {
        let (tokens, _) = scan_all("3 2.5 \"hi\" foo");

        let printed: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        assert_eq!(
            printed,
            vec![
                "NUMBER 3 3.0",
                "NUMBER 2.5 2.5",
                "STRING \"hi\" hi",
                "IDENTIFIER foo null",
                "EOF  null",
            ]
        );
    }

    #[test]
    fn test_token_json() {
        let (tokens, _) = scan_all(";");

        let json = serde_json::to_string(&tokens[0]).unwrap();
        assert_eq!(
            json,
            r#"{"token_type":"SEMICOLON","lexeme":";","line":1}"#
        );
    }
}
