use super::messages::generate_error_message;
use owo_colors::OwoColorize;
use std::path::Path;

use crate::formatting::Render;
use crate::language::LoadingError;
use crate::parsing::{locate, ParsingError};
use crate::store::LookupError;

/// Format a parsing error with full details including source code context
pub fn full_parsing_error(
    error: &ParsingError,
    filename: &Path,
    source: &str,
    renderer: &impl Render,
) -> String {
    let (problem, details) = generate_error_message(error, renderer);
    let (i, j) = locate(source, error.offset());

    let code = source
        .lines()
        .nth(i)
        .unwrap_or("");
    let line = i + 1;
    let column = j + 1;
    let width = 3.max(
        line.to_string()
            .len(),
    );

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}

{}
        "#,
        "error".bright_red(),
        filename.to_string_lossy(),
        line,
        column,
        problem.bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        '^'.bright_red(),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a parsing error with concise single-line output
pub fn concise_parsing_error(error: &ParsingError, filename: &Path, source: &str) -> String {
    let (i, j) = locate(source, error.offset());

    format!(
        "{}: {}:{}:{} {}",
        "error".bright_red(),
        filename.to_string_lossy(),
        i + 1,
        j + 1,
        error
            .message()
            .bold(),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error(error: &LoadingError) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    )
}

/// Format a LookupError, naming the path that was being followed
pub fn concise_lookup_error(error: &LookupError, path: &str) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        path,
        error
            .to_string()
            .bold()
    )
}
