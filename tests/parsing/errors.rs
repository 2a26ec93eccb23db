#[cfg(test)]
mod syntax {
    use yamlet::diagnostics::Journal;
    use yamlet::parsing::{parse_logged, ErrorKind, Options, ParsingError};

    /// Helper function to check if parsing produces the expected error type,
    /// and that a message describing it was logged.
    fn expect_error(content: &str, expected: ParsingError) {
        let mut journal = Journal::new();
        let result = parse_logged(content, &Options::default(), &mut journal);
        match result {
            Ok(_) => panic!(
                "Expected parsing to fail, but it succeeded for input: {}",
                content
            ),
            Err(error) => {
                if std::mem::discriminant(&error) != std::mem::discriminant(&expected) {
                    panic!(
                        "Expected error type like {:?} but got: {:?} for input '{}'",
                        expected, error, content
                    );
                }
                let message = journal
                    .pop_last()
                    .expect("a diagnostic should have been logged");
                assert!(
                    message.ends_with(&error.message()),
                    "message '{}' does not describe {:?}",
                    message,
                    error
                );
                assert!(journal.is_empty(), "only one message per failed parse");
            }
        }
    }

    #[test]
    fn unterminated_string() {
        expect_error(
            r#"
key: "unterminated
            "#
            .trim_ascii(),
            ParsingError::UnterminatedString(0),
        );
    }

    #[test]
    fn symbol_running_into_quote() {
        expect_error(
            r#"
key: value"quoted"
            "#
            .trim_ascii(),
            ParsingError::InvalidSymbol(0),
        );
    }

    #[test]
    fn unrecognized_character() {
        expect_error(
            r#"
key: value
other: [1, 2]
            "#
            .trim_ascii(),
            ParsingError::UnrecognizedCharacter(0, ' '),
        );
    }

    #[test]
    fn comments_are_not_supported() {
        expect_error(
            r#"
# a comment
key: value
            "#
            .trim_ascii(),
            ParsingError::UnrecognizedCharacter(0, ' '),
        );
    }

    #[test]
    fn zero_length_input() {
        expect_error("", ParsingError::EmptyInput);
    }

    #[test]
    fn only_blank_lines() {
        expect_error("\n   \n\t\n", ParsingError::NoContent(0));
    }

    #[test]
    fn bare_scalar_document() {
        expect_error(
            r#"
"just a string"
            "#
            .trim_ascii(),
            ParsingError::InvalidRoot(0),
        );
    }

    #[test]
    fn quoted_key() {
        expect_error(
            r#"
first: 1
"second": 2
            "#
            .trim_ascii(),
            ParsingError::KeyNotSymbol(0),
        );
    }

    #[test]
    fn missing_colon() {
        expect_error(
            r#"
first: 1
second 2
            "#
            .trim_ascii(),
            ParsingError::ExpectedColon(0),
        );
    }

    #[test]
    fn missing_value() {
        expect_error(
            r#"
first:
second: 2
            "#
            .trim_ascii(),
            ParsingError::ExpectedValue(0),
        );
    }

    #[test]
    fn dash_without_item() {
        expect_error(
            r#"
items:
  -
  - two
            "#
            .trim_ascii(),
            ParsingError::ExpectedItem(0),
        );
    }

    #[test]
    fn two_values_on_one_line() {
        expect_error(
            r#"
name: Alice Smith
            "#
            .trim_ascii(),
            ParsingError::ExpectedLineEnd(0),
        );
    }

    #[test]
    fn repeated_key() {
        expect_error(
            r#"
name: Alice
name: Bob
            "#
            .trim_ascii(),
            ParsingError::DuplicateKey(0, String::new()),
        );
    }

    #[test]
    fn indenting_after_scalar() {
        expect_error(
            r#"
name: Alice
    age: 30
            "#
            .trim_ascii(),
            ParsingError::UnexpectedIndentation(0),
        );
    }

    #[test]
    fn undenting_between_levels() {
        expect_error(
            r#"
outer:
    inner:
        deep: value
      wrong: level
            "#
            .trim_ascii(),
            ParsingError::InconsistentIndentation(0, 0),
        );
    }

    #[test]
    fn sequence_then_mapping() {
        expect_error(
            r#"
items:
  - one
  key: value
            "#
            .trim_ascii(),
            ParsingError::MixedContainer(0),
        );
    }

    #[test]
    fn mapping_then_sequence() {
        expect_error(
            r#"
key: value
- item
            "#
            .trim_ascii(),
            ParsingError::MixedContainer(0),
        );
    }

    #[test]
    fn too_deep() {
        let mut content = String::new();
        for i in 0..100 {
            content.push_str(&" ".repeat(i));
            content.push_str("k:\n");
        }
        content.push_str(&" ".repeat(100));
        content.push_str("k: v\n");

        expect_error(&content, ParsingError::NestingTooDeep(0, 0));
    }

    #[test]
    fn error_classification() {
        let mut journal = Journal::new();
        let options = Options::default();

        let error = parse_logged("a: \"b", &options, &mut journal).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Lexical);

        let error = parse_logged("a b", &options, &mut journal).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Syntax);

        let options = Options { max_depth: 1 };
        let error = parse_logged("a:\n  b: c", &options, &mut journal).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Resource);

        assert_eq!(journal.len(), 3);
    }
}
