//! Report generation for the command line application

use serde::Serialize;
use std::path::Path;
use tinytemplate::TinyTemplate;
use tracing::debug;

use crate::language::Document;

static TEMPLATE: &'static str =
    "{filename}: {kind} with {children} {{ if single }}child{{ else }}children{{ endif }}, {nodes} nodes, depth {depth}";

#[derive(Serialize)]
struct Context {
    filename: String,
    kind: String,
    children: usize,
    single: bool,
    nodes: usize,
    depth: usize,
}

/// One line describing the shape of a successfully parsed document.
pub fn summarize(filename: &Path, document: &Document) -> Result<String, tinytemplate::error::Error> {
    let root = document.root();

    let context = Context {
        filename: filename
            .to_string_lossy()
            .to_string(),
        kind: root
            .kind()
            .to_string(),
        children: root.len(),
        single: root.len() == 1,
        nodes: root.count(),
        depth: root.depth(),
    };

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("summary", TEMPLATE)?;

    let rendered = tt.render("summary", &context)?;
    debug!("Summary: {}", rendered);

    Ok(rendered)
}
