use std::fmt;

use crate::language::LoadingError;

/// Broad classification of parse failures.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Resource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    // lexical
    UnterminatedString(usize),
    InvalidSymbol(usize),
    UnrecognizedCharacter(usize, char),
    InvalidEncoding(usize),
    // syntax
    EmptyInput,
    NoContent(usize),
    InvalidRoot(usize),
    ExpectedKey(usize),
    KeyNotSymbol(usize),
    ExpectedColon(usize),
    ExpectedValue(usize),
    ExpectedItem(usize),
    ExpectedDash(usize),
    ExpectedLineEnd(usize),
    DuplicateKey(usize, String),
    UnexpectedIndentation(usize),
    InconsistentIndentation(usize, usize),
    MixedContainer(usize),
    // resource
    NestingTooDeep(usize, usize),
}

impl ParsingError {
    pub fn offset(&self) -> usize {
        match self {
            ParsingError::UnterminatedString(offset) => *offset,
            ParsingError::InvalidSymbol(offset) => *offset,
            ParsingError::UnrecognizedCharacter(offset, _) => *offset,
            ParsingError::InvalidEncoding(offset) => *offset,
            ParsingError::EmptyInput => 0,
            ParsingError::NoContent(offset) => *offset,
            ParsingError::InvalidRoot(offset) => *offset,
            ParsingError::ExpectedKey(offset) => *offset,
            ParsingError::KeyNotSymbol(offset) => *offset,
            ParsingError::ExpectedColon(offset) => *offset,
            ParsingError::ExpectedValue(offset) => *offset,
            ParsingError::ExpectedItem(offset) => *offset,
            ParsingError::ExpectedDash(offset) => *offset,
            ParsingError::ExpectedLineEnd(offset) => *offset,
            ParsingError::DuplicateKey(offset, _) => *offset,
            ParsingError::UnexpectedIndentation(offset) => *offset,
            ParsingError::InconsistentIndentation(offset, _) => *offset,
            ParsingError::MixedContainer(offset) => *offset,
            ParsingError::NestingTooDeep(offset, _) => *offset,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ParsingError::UnterminatedString(_)
            | ParsingError::InvalidSymbol(_)
            | ParsingError::UnrecognizedCharacter(_, _)
            | ParsingError::InvalidEncoding(_) => ErrorKind::Lexical,
            ParsingError::NestingTooDeep(_, _) => ErrorKind::Resource,
            _ => ErrorKind::Syntax,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::UnterminatedString(_) => "Unterminated string".to_string(),
            ParsingError::InvalidSymbol(_) => "Invalid symbol".to_string(),
            ParsingError::UnrecognizedCharacter(_, c) => {
                format!("Unrecognized token starting with {:?}", c)
            }
            ParsingError::InvalidEncoding(_) => "Input is not valid UTF-8".to_string(),
            ParsingError::EmptyInput => "String is empty".to_string(),
            ParsingError::NoContent(_) => "Document has no content".to_string(),
            ParsingError::InvalidRoot(_) => {
                "Document must begin with a key or a sequence item".to_string()
            }
            ParsingError::ExpectedKey(_) => "Expected a key".to_string(),
            ParsingError::KeyNotSymbol(_) => "Keys must be bare symbols".to_string(),
            ParsingError::ExpectedColon(_) => "Expected ':' after key".to_string(),
            ParsingError::ExpectedValue(_) => "Expected value after key".to_string(),
            ParsingError::ExpectedItem(_) => "Expected value after '-'".to_string(),
            ParsingError::ExpectedDash(_) => "Expected '-' to begin a sequence item".to_string(),
            ParsingError::ExpectedLineEnd(_) => "Expected end of line after value".to_string(),
            ParsingError::DuplicateKey(_, key) => format!("Duplicate key '{}'", key),
            ParsingError::UnexpectedIndentation(_) => "Unexpected indentation".to_string(),
            ParsingError::InconsistentIndentation(_, level) => {
                format!("Indentation of {} matches no enclosing block", level)
            }
            ParsingError::MixedContainer(_) => {
                "Mapping entries and sequence items mixed at the same level".to_string()
            }
            ParsingError::NestingTooDeep(_, limit) => {
                format!("Nesting exceeds the limit of {} levels", limit)
            }
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ParsingError {}

/// Failure from `parse_source()`, which may fail either getting the
/// content or parsing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    Loading(LoadingError),
    Parsing(ParsingError),
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFailure::Loading(error) => write!(f, "{}", error),
            ParseFailure::Parsing(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for ParseFailure {}

impl From<LoadingError> for ParseFailure {
    fn from(error: LoadingError) -> Self {
        ParseFailure::Loading(error)
    }
}

impl From<ParsingError> for ParseFailure {
    fn from(error: ParsingError) -> Self {
        ParseFailure::Parsing(error)
    }
}
