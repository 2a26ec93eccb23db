//! A parser for a restricted, indentation-sensitive subset of YAML: block
//! mappings, block sequences, and scalar leaves.
//!
//! ```
//! use yamlet::language::{Node, Segment};
//!
//! let document = yamlet::parsing::parse("name: Alice\nage: 30\n").unwrap();
//! let age = document.lookup(&[Segment::from("age")]).unwrap();
//! assert_eq!(age, &Node::Scalar("30".to_string()));
//! ```

pub mod diagnostics;
pub mod formatting;
pub mod language;
pub mod output;
pub mod parsing;
pub mod problem;
pub mod store;

pub use diagnostics::pop_last_error;
pub use language::{Document, Node, Path, Segment};
pub use parsing::{parse, parse_source, Origin, ParseFailure, ParsingError};
pub use store::{free, lookup, LookupError};
