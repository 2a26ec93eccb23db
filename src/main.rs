use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, Level};

use yamlet::diagnostics;
use yamlet::formatting::{self, Identity, Terminal};
use yamlet::language::{Document, Node};
use yamlet::output;
use yamlet::parsing::{self, Options, ParsingError};
use yamlet::problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("yamlet")
        .version(VERSION)
        .propagate_version(true)
        .author("Andrew Cowie")
        .about("Parse and query indentation-structured YAML documents.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log details of the parse to standard error."),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .global(true)
                .value_parser(clap::value_parser!(usize))
                .help("Maximum nesting of blocks before the document is rejected."),
        )
        .subcommand(
            Command::new("check")
                .about("Syntax-check the given document")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the document you want to check, or '-' for standard input."),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Print the given document in canonical form")
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the document you want to format."),
                ),
        )
        .subcommand(
            Command::new("get")
                .about("Print the value found at a path within the given document")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the value as JSON."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the document to query."),
                )
                .arg(
                    Arg::new("path")
                        .required(true)
                        .help("Dotted path to the value, for example 'servers.0.name'. Numeric segments index into sequences."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut options = Options::default();
    if let Some(depth) = matches.get_one::<usize>("max-depth") {
        options.max_depth = *depth;
    }
    debug!(?options);

    match matches.subcommand() {
        Some(("check", submatches)) => {
            if let Some(filename) = submatches.get_one::<String>("filename") {
                let filename = Path::new(filename);
                let document = load_and_parse(filename, &options);

                match output::summarize(filename, &document) {
                    Ok(summary) => println!("{}", summary),
                    Err(error) => {
                        eprintln!("{}: {}", "error".bright_red(), error);
                        std::process::exit(1);
                    }
                }
            }
        }
        Some(("format", submatches)) => {
            if let Some(filename) = submatches.get_one::<String>("filename") {
                let filename = Path::new(filename);
                let document = load_and_parse(filename, &options);

                let result = if submatches.get_flag("raw-control-chars")
                    || std::io::stdout().is_terminal()
                {
                    formatting::render(&Terminal, &document)
                } else {
                    formatting::render(&Identity, &document)
                };
                print!("{}", result);
            }
        }
        Some(("get", submatches)) => {
            let filename = submatches.get_one::<String>("filename");
            let path = submatches.get_one::<String>("path");

            if let (Some(filename), Some(path)) = (filename, path) {
                let filename = Path::new(filename);
                let document = load_and_parse(filename, &options);

                let node = match document.lookup_str(path) {
                    Ok(node) => node,
                    Err(error) => {
                        eprintln!("{}", problem::concise_lookup_error(&error, path));
                        std::process::exit(1);
                    }
                };

                if submatches.get_flag("json") {
                    match serde_json::to_string_pretty(node) {
                        Ok(json) => println!("{}", json),
                        Err(error) => {
                            eprintln!("{}: {}", "error".bright_red(), error);
                            std::process::exit(1);
                        }
                    }
                } else {
                    match node {
                        Node::Scalar(text) => println!("{}", text),
                        _ => print!("{}", formatting::render_node(&Identity, node)),
                    }
                }
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: yamlet [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

/// Load and parse the given file, or report why not and exit.
fn load_and_parse(filename: &Path, options: &Options) -> Document {
    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            drain_diagnostics();
            std::process::exit(1);
        }
    };

    match parsing::parse_with(&content, options) {
        Ok(document) => document,
        Err(error) => {
            eprintln!("{}", explain(&error, filename, &content));
            drain_diagnostics();
            std::process::exit(1);
        }
    }
}

fn explain(error: &ParsingError, filename: &Path, content: &str) -> String {
    if std::io::stderr().is_terminal() {
        problem::full_parsing_error(error, filename, content, &Terminal)
    } else {
        problem::full_parsing_error(error, filename, content, &Identity)
    }
}

// The formatted error has already been shown; the log's copies are only of
// interest when debugging.
fn drain_diagnostics() {
    for message in diagnostics::drain() {
        debug!("{}", message);
    }
}
