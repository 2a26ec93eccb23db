use owo_colors::OwoColorize;

use crate::formatting::{formatter, Render, Syntax};
use crate::language::*;

/// Embellish fragments with ANSI escapes to create syntax highlighting in
/// terminal output.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Neutral => content.to_string(),
            Syntax::Indent => content.to_string(),
            Syntax::Newline => content.to_string(),
            Syntax::Key => content // entity.name.tag - #3465a4 (blue) bold
                .color(owo_colors::Rgb(52, 101, 164))
                .bold()
                .to_string(),
            Syntax::Symbol => content.to_string(),
            Syntax::String => content // string - #4e9a06 (green) bold
                .color(owo_colors::Rgb(78, 154, 6))
                .bold()
                .to_string(),
            Syntax::Punctuation => content // punctuation - #999999 (grey)
                .color(owo_colors::Rgb(153, 153, 153))
                .to_string(),
        }
    }
}

/// Formatting happens in two passes. First the tree is converted into a
/// Vec of "fragments" (Syntax tag, String pairs). Then the specified
/// renderer is applied to each pair to result in an embellished String.
pub fn render(renderer: &impl Render, document: &Document) -> String {
    render_node(renderer, document.root())
}

/// Render any node, for example one found by a lookup, as if it were the
/// root of a document.
pub fn render_node(renderer: &impl Render, node: &Node) -> String {
    // Pass 1: convert tree to tagged fragments
    let fragments = formatter::format_node(node);

    // Pass 2: render tagged fragments to final output
    render_to_string(renderer, fragments)
}

fn render_to_string(renderer: &impl Render, fragments: Vec<(Syntax, String)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    output
}
