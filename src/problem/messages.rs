use crate::formatting::{render_node, Render};
use crate::language::Node;
use crate::parsing::ParsingError;

fn scalar(text: &str) -> Node {
    Node::Scalar(text.to_string())
}

/// Generate problem and detail messages for parsing errors
pub fn generate_error_message(error: &ParsingError, renderer: &impl Render) -> (String, String) {
    match error {
        ParsingError::UnterminatedString(_) => (
            "Unterminated string".to_string(),
            r#"
A double-quoted string must end with a closing '"' on the same line. To
include a quote character inside a string, escape it with a backslash.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::InvalidSymbol(_) => (
            "Invalid symbol".to_string(),
            r#"
A bare word was immediately followed by a '"'. Either put the whole value in
quotes or separate the two with a space.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::UnrecognizedCharacter(_, c) => (
            format!("Unrecognized character '{}'", c),
            r#"
Keys and bare values must begin with a letter, digit, or underscore. Values
beginning with any other character need to be enclosed in double quotes.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::InvalidEncoding(_) => (
            "Invalid encoding".to_string(),
            "The input must be UTF-8 text.".to_string(),
        ),
        ParsingError::EmptyInput => (
            "String is empty".to_string(),
            "There was no input at all to parse.".to_string(),
        ),
        ParsingError::NoContent(_) => (
            "Document has no content".to_string(),
            "The input contains only blank lines.".to_string(),
        ),
        ParsingError::InvalidRoot(_) => {
            let example = Node::Mapping(vec![
                ("name".to_string(), scalar("Alice")),
                (
                    "roles".to_string(),
                    Node::Sequence(vec![scalar("admin"), scalar("editor")]),
                ),
            ]);

            (
                "Invalid document".to_string(),
                format!(
                    r#"
A document must be either a mapping of keys to values, or a sequence of items
each beginning with '-'. For example:

{}
                    "#,
                    render_node(renderer, &example)
                )
                .trim_ascii()
                .to_string(),
            )
        }
        ParsingError::ExpectedKey(_) => (
            "Expected a key".to_string(),
            "Each line of a mapping begins with a key followed by ':'.".to_string(),
        ),
        ParsingError::KeyNotSymbol(_) => (
            "Quoted key".to_string(),
            r#"
Keys must be bare words. Quoted strings can only be used as values.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::ExpectedColon(_) => (
            "Expected ':'".to_string(),
            "A key must be followed by ':' and then its value.".to_string(),
        ),
        ParsingError::ExpectedValue(_) => {
            let example = Node::Mapping(vec![
                ("inline".to_string(), scalar("value")),
                (
                    "nested".to_string(),
                    Node::Mapping(vec![("key".to_string(), scalar("value"))]),
                ),
            ]);

            (
                "Expected value after key".to_string(),
                format!(
                    r#"
A value either follows the ':' on the same line, or is a block indented
further than the key on the lines below it:

{}
                    "#,
                    render_node(renderer, &example)
                )
                .trim_ascii()
                .to_string(),
            )
        }
        ParsingError::ExpectedItem(_) => (
            "Expected sequence item".to_string(),
            r#"
A '-' must be followed by a value on the same line, or by a block indented
further than the '-' on the lines below it.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::ExpectedDash(_) => (
            "Expected '-'".to_string(),
            "Each item in a sequence begins with '-'.".to_string(),
        ),
        ParsingError::ExpectedLineEnd(_) => (
            "Expected end of line".to_string(),
            r#"
Only one value is permitted per line. If the value contains spaces, enclose
it in double quotes.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::DuplicateKey(_, key) => (
            format!("Duplicate key '{}'", key),
            "Each key can appear only once within a mapping.".to_string(),
        ),
        ParsingError::UnexpectedIndentation(_) => (
            "Unexpected indentation".to_string(),
            r#"
This line is indented further than the one before it, but the previous line
does not open a nested block.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::InconsistentIndentation(_, level) => (
            "Inconsistent indentation".to_string(),
            format!(
                r#"
This line is indented by {} but no enclosing block starts at that column.
Lines in the same block must be indented by exactly the same amount.
                "#,
                level
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::MixedContainer(_) => (
            "Mixed mapping and sequence".to_string(),
            r#"
A block is either a mapping (lines of 'key: value') or a sequence (lines
beginning with '-'), not both.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::NestingTooDeep(_, limit) => (
            "Nesting too deep".to_string(),
            format!(
                "Blocks may be nested at most {} levels deep. Use --max-depth to raise the limit.",
                limit
            ),
        ),
    }
}
