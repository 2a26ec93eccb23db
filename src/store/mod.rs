//! Queries against a parsed Document, and its teardown.

use std::fmt;

use crate::language::{Document, Node, NodeKind, Path, Segment};

/// Why a path could not be followed. `position` is the index of the
/// failing segment within the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    MissingKey {
        position: usize,
        key: String,
    },
    IndexOutOfRange {
        position: usize,
        index: usize,
        length: usize,
    },
    NotAMapping {
        position: usize,
        key: String,
        found: NodeKind,
    },
    NotASequence {
        position: usize,
        index: usize,
        found: NodeKind,
    },
}

impl LookupError {
    pub fn position(&self) -> usize {
        match self {
            LookupError::MissingKey { position, .. } => *position,
            LookupError::IndexOutOfRange { position, .. } => *position,
            LookupError::NotAMapping { position, .. } => *position,
            LookupError::NotASequence { position, .. } => *position,
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::MissingKey { key, .. } => write!(f, "key '{}' not found", key),
            LookupError::IndexOutOfRange { index, length, .. } => write!(
                f,
                "index {} out of range for sequence of length {}",
                index, length
            ),
            LookupError::NotAMapping { key, found, .. } => {
                write!(f, "cannot look up key '{}' in a {}", key, found)
            }
            LookupError::NotASequence { index, found, .. } => {
                write!(f, "cannot take index {} of a {}", index, found)
            }
        }
    }
}

impl std::error::Error for LookupError {}

/// Walk from the root of the document following each segment in turn.
/// The document is never modified.
pub fn lookup<'d>(document: &'d Document, path: &[Segment]) -> Result<&'d Node, LookupError> {
    let mut node = document.root();

    for (position, segment) in path
        .iter()
        .enumerate()
    {
        node = step(node, position, segment)?;
    }

    Ok(node)
}

fn step<'d>(node: &'d Node, position: usize, segment: &Segment) -> Result<&'d Node, LookupError> {
    match (node, segment) {
        (Node::Mapping(entries), Segment::Key(key)) => entries
            .iter()
            .find_map(|(k, v)| if k == key { Some(v) } else { None })
            .ok_or_else(|| LookupError::MissingKey {
                position,
                key: key.clone(),
            }),
        (Node::Sequence(items), Segment::Index(index)) => {
            items
                .get(*index)
                .ok_or(LookupError::IndexOutOfRange {
                    position,
                    index: *index,
                    length: items.len(),
                })
        }
        (_, Segment::Key(key)) => Err(LookupError::NotAMapping {
            position,
            key: key.clone(),
            found: node.kind(),
        }),
        (_, Segment::Index(index)) => Err(LookupError::NotASequence {
            position,
            index: *index,
            found: node.kind(),
        }),
    }
}

impl Document {
    pub fn lookup(&self, path: &[Segment]) -> Result<&Node, LookupError> {
        lookup(self, path)
    }

    /// Look up a dotted path such as `servers.0.name`.
    pub fn lookup_str(&self, path: &str) -> Result<&Node, LookupError> {
        let path = Path::parse(path);
        lookup(self, path.segments())
    }
}

/// Release a document and every node in it, returning the number of nodes
/// released. Taking the document by value means a freed document cannot
/// be used, or freed, again.
pub fn free(document: Document) -> usize {
    // Children are moved onto a worklist rather than dropped recursively,
    // so teardown does not consume stack in proportion to nesting.
    let mut pending = vec![document.root];
    let mut released = 0;

    while let Some(node) = pending.pop() {
        released += 1;
        match node {
            Node::Scalar(_) => {}
            Node::Sequence(items) => pending.extend(items),
            Node::Mapping(entries) => pending.extend(
                entries
                    .into_iter()
                    .map(|(_, value)| value),
            ),
        }
    }

    released
}
