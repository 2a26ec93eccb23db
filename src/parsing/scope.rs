#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Container {
    Mapping,
    Sequence,
}

/// A container that is open at a given indentation column.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Layer {
    pub level: usize,
    pub container: Container,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// The new layer is not deeper than the one enclosing it.
    NotDeeper,
    TooDeep,
}

/// Stack of open containers. Levels strictly increase from the bottom of
/// the stack to the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Scope {
    stack: Vec<Layer>,
    limit: usize,
}

impl Scope {
    pub(crate) fn new(limit: usize) -> Scope {
        Scope {
            stack: vec![],
            limit,
        }
    }

    pub(crate) fn current(&self) -> Option<Layer> {
        self.stack
            .last()
            .copied()
    }

    pub(crate) fn depth(&self) -> usize {
        self.stack
            .len()
    }

    pub(crate) fn push(&mut self, level: usize, container: Container) -> Result<(), ScopeError> {
        if let Some(layer) = self.current() {
            if level <= layer.level {
                return Err(ScopeError::NotDeeper);
            }
        }
        if self.depth() >= self.limit {
            return Err(ScopeError::TooDeep);
        }
        self.stack
            .push(Layer { level, container });
        Ok(())
    }

    pub(crate) fn pop(&mut self) -> Option<Layer> {
        self.stack
            .pop()
    }

    /// Would an undent to this level land exactly on an open container?
    pub(crate) fn resolves(&self, level: usize) -> bool {
        self.stack
            .iter()
            .any(|layer| layer.level == level)
    }

    /// Number of layers that an undent to the given level closes.
    pub(crate) fn closed_by(&self, level: usize) -> usize {
        self.stack
            .iter()
            .rev()
            .take_while(|layer| layer.level > level)
            .count()
    }
}
