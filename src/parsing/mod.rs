//! parser for indentation-structured documents

use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::diagnostics::{self, Journal};
use crate::language::{Document, LoadingError, Node};

pub mod builder;
mod errors;
mod scope;
pub mod tokenizer;

pub use errors::*;

/// Settings governing a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Maximum number of containers that may be open at once.
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options { max_depth: 64 }
    }
}

/// Where the bytes handed to `parse_source()` come from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Origin {
    /// The bytes are the document itself.
    Memory,
    /// The bytes name a file containing the document.
    Disk,
}

/// Read a file and return an owned String. A filename of "-" reads
/// standard input.
pub fn load(filename: &Path) -> Result<String, LoadingError> {
    let result = if filename.to_str() == Some("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map(|_| content)
    } else {
        std::fs::read_to_string(filename)
    };

    let error = match result {
        Ok(content) => {
            if content.is_empty() {
                LoadingError {
                    problem: "File was empty".to_string(),
                    details: String::new(),
                    filename: filename.to_path_buf(),
                }
            } else {
                return Ok(content);
            }
        }
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename: filename.to_path_buf(),
                },
                _ => LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename: filename.to_path_buf(),
                },
            }
        }
    };

    diagnostics::log(&error.to_string());
    Err(error)
}

/// Parse text into a Document, using default options. On failure a
/// description of the problem is also recorded in the process-wide
/// diagnostic log.
pub fn parse(content: &str) -> Result<Document, ParsingError> {
    parse_with(content, &Options::default())
}

pub fn parse_with(content: &str, options: &Options) -> Result<Document, ParsingError> {
    let result = builder::parse_document(content, options);
    report(content, &result);

    if let Err(error) = &result {
        diagnostics::log(&describe(content, error));
    }
    result
}

/// Parse text into a Document, recording any failure in the supplied
/// journal rather than the process-wide one.
pub fn parse_logged(
    content: &str,
    options: &Options,
    journal: &mut Journal,
) -> Result<Document, ParsingError> {
    let result = builder::parse_document(content, options);
    report(content, &result);

    if let Err(error) = &result {
        journal.log(&describe(content, error));
    }
    result
}

/// Parse a document either held in memory or named by a file path.
pub fn parse_source(source: &[u8], origin: Origin) -> Result<Document, ParseFailure> {
    match origin {
        Origin::Memory => {
            let content = match std::str::from_utf8(source) {
                Ok(content) => content,
                Err(error) => {
                    let error = ParsingError::InvalidEncoding(error.valid_up_to());
                    diagnostics::log(&error.to_string());
                    return Err(error.into());
                }
            };
            Ok(parse(content)?)
        }
        Origin::Disk => {
            let filename = String::from_utf8_lossy(source);
            let content = load(Path::new(filename.as_ref()))?;
            Ok(parse(&content)?)
        }
    }
}

/// Render an error as "line:column: message" against the content it came
/// from. Both numbers are one-origin.
pub fn describe(content: &str, error: &ParsingError) -> String {
    let (line, column) = locate(content, error.offset());
    format!("{}:{}: {}", line + 1, column + 1, error.message())
}

/// Zero-origin line and column of a byte offset.
pub fn locate(content: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(content.len());
    let before = &content[..offset];

    let line = before
        .bytes()
        .filter(|&b| b == b'\n')
        .count();
    let column = match before.rfind('\n') {
        Some(start) => before[start + 1..]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    };

    (line, column)
}

fn report(content: &str, result: &Result<Document, ParsingError>) {
    match result {
        Ok(document) => match document.root() {
            Node::Mapping(entries) => {
                debug!(
                    "Found mapping with {} entr{}",
                    entries.len(),
                    if entries.len() == 1 { "y" } else { "ies" }
                );
            }
            Node::Sequence(items) => {
                debug!(
                    "Found sequence with {} item{}",
                    items.len(),
                    if items.len() == 1 { "" } else { "s" }
                );
            }
            Node::Scalar(_) => {
                debug!("Found scalar");
            }
        },
        Err(error) => {
            info!(
                "Parse failed with {:?} error: {}",
                error.kind(),
                describe(content, error)
            );
        }
    }
}
