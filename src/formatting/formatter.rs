//! Code formatter for documents

use crate::formatting::Syntax;
use crate::language::*;

/// Number of spaces added for each level of nesting.
pub const INDENT: usize = 2;

/// Convert a node into a sequence of tagged fragments, in block style.
///
/// Any tree the parser produced formats to text that parses back to the
/// same tree. Trees assembled by hand are formatted literally, and may
/// not: a scalar root, an empty container, or a key that is not a symbol
/// all have no block-style spelling.
pub fn format_node(node: &Node) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new();

    match node {
        Node::Scalar(text) => {
            output.format_scalar(text);
            output.append_newline();
        }
        _ => output.format_container(node, 0),
    }

    output.fragments
}

struct Formatter {
    fragments: Vec<(Syntax, String)>,
}

impl Formatter {
    fn new() -> Formatter {
        Formatter {
            fragments: Vec::new(),
        }
    }

    fn append(&mut self, syntax: Syntax, content: &str) {
        self.fragments
            .push((syntax, content.to_string()));
    }

    fn append_newline(&mut self) {
        self.append(Syntax::Newline, "\n");
    }

    fn append_indent(&mut self, nesting: usize) {
        if nesting > 0 {
            self.append(Syntax::Indent, &" ".repeat(nesting));
        }
    }

    fn format_scalar(&mut self, text: &str) {
        if is_symbol(text) {
            self.append(Syntax::Symbol, text);
        } else {
            self.append(Syntax::String, &quote(text));
        }
    }

    // Either a scalar on the current line, or a line break followed by
    // the container indented beneath.
    fn format_value(&mut self, value: &Node, nesting: usize) {
        match value {
            Node::Scalar(text) => {
                self.append(Syntax::Neutral, " ");
                self.format_scalar(text);
                self.append_newline();
            }
            _ => {
                self.append_newline();
                self.format_container(value, nesting + INDENT);
            }
        }
    }

    fn format_container(&mut self, node: &Node, nesting: usize) {
        match node {
            Node::Mapping(entries) => {
                for (key, value) in entries {
                    self.append_indent(nesting);
                    self.append(Syntax::Key, key);
                    self.append(Syntax::Punctuation, ":");
                    self.format_value(value, nesting);
                }
            }
            Node::Sequence(items) => {
                for item in items {
                    self.append_indent(nesting);
                    self.append(Syntax::Punctuation, "-");
                    self.format_value(item, nesting);
                }
            }
            Node::Scalar(text) => {
                self.append_indent(nesting);
                self.format_scalar(text);
                self.append_newline();
            }
        }
    }
}

/// Would this text be read back as a single bare symbol?
pub fn is_symbol(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_alphanumeric() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| !matches!(c, ' ' | '\t' | '\r' | '\n' | '"' | ':' | '-'))
}

/// Double-quote text, escaping characters the tokenizer would otherwise
/// treat specially.
pub fn quote(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 2);
    result.push('"');
    for c in text.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            c => result.push(c),
        }
    }
    result.push('"');
    result
}
