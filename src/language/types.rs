//! Types representing a parsed document tree

use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A complete parsed document. The tree owns copies of all its text, so it
/// outlives the buffer it was parsed from.
#[derive(Eq, Debug, PartialEq, Clone)]
pub struct Document {
    pub root: Node,
}

impl Document {
    pub fn new(root: Node) -> Document {
        Document { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }
}

/// A single node in the tree. Children are exclusively owned by their
/// parent container; there is no sharing between nodes.
#[derive(Eq, Debug, PartialEq, Clone)]
pub enum Node {
    Scalar(String),
    Sequence(Vec<Node>),
    /// Entries in document order. Keys are unique within one mapping.
    Mapping(Vec<(String, Node)>),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Scalar,
    Sequence,
    Mapping,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Scalar => "scalar",
            NodeKind::Sequence => "sequence",
            NodeKind::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Scalar(_) => NodeKind::Scalar,
            Node::Sequence(_) => NodeKind::Sequence,
            Node::Mapping(_) => NodeKind::Mapping,
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Node::Scalar(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&[(String, Node)]> {
        match self {
            Node::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Find the value for a key by exact match. Mappings are kept in
    /// document order so this is a linear scan.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_mapping()?
            .iter()
            .find_map(|(k, v)| if k == key { Some(v) } else { None })
    }

    pub fn index(&self, i: usize) -> Option<&Node> {
        self.as_sequence()?
            .get(i)
    }

    /// Number of direct children; zero for a scalar.
    pub fn len(&self) -> usize {
        match self {
            Node::Scalar(_) => 0,
            Node::Sequence(items) => items.len(),
            Node::Mapping(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of nodes in this subtree, including this one.
    pub fn count(&self) -> usize {
        match self {
            Node::Scalar(_) => 1,
            Node::Sequence(items) => {
                1 + items
                    .iter()
                    .map(Node::count)
                    .sum::<usize>()
            }
            Node::Mapping(entries) => {
                1 + entries
                    .iter()
                    .map(|(_, value)| value.count())
                    .sum::<usize>()
            }
        }
    }

    /// Container nesting depth. A scalar is depth 0, a container of
    /// scalars is depth 1, and so on.
    pub fn depth(&self) -> usize {
        let deepest = match self {
            Node::Scalar(_) => return 0,
            Node::Sequence(items) => items
                .iter()
                .map(Node::depth)
                .max(),
            Node::Mapping(entries) => entries
                .iter()
                .map(|(_, value)| value.depth())
                .max(),
        };
        1 + deepest.unwrap_or(0)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Scalar(text) => serializer.serialize_str(text),
            Node::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root
            .serialize(serializer)
    }
}

/// One step along a path into a document.
#[derive(Eq, Debug, PartialEq, Clone)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => write!(f, "{}", key),
            Segment::Index(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Segment {
        Segment::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Segment {
        Segment::Key(key)
    }
}

impl From<usize> for Segment {
    fn from(i: usize) -> Segment {
        Segment::Index(i)
    }
}

/// An ordered sequence of keys and indices used to navigate a Document.
#[derive(Eq, Debug, PartialEq, Clone, Default)]
pub struct Path(pub Vec<Segment>);

impl Path {
    /// Split a dotted path such as `servers.0.name`. Segments made only of
    /// ASCII digits are sequence indices, everything else is a key. The
    /// empty string is the empty path, which names the root.
    pub fn parse(text: &str) -> Path {
        if text.is_empty() {
            return Path(vec![]);
        }

        let segments = text
            .split('.')
            .map(|part| {
                if !part.is_empty()
                    && part
                        .bytes()
                        .all(|b| b.is_ascii_digit())
                {
                    match part.parse::<usize>() {
                        Ok(i) => Segment::Index(i),
                        Err(_) => Segment::Key(part.to_string()),
                    }
                } else {
                    Segment::Key(part.to_string())
                }
            })
            .collect();

        Path(segments)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self
            .0
            .iter()
            .enumerate()
        {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
