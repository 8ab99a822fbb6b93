//! Undo history.
//!
//! Placements are recorded by key in the order they happen. Undo pops the
//! most recent key; the editor then drops that key from the layout. There is
//! no redo and no depth limit: every live layout key must stay reachable.

use certgen_core::FieldKey;

#[derive(Debug, Clone, Default)]
pub struct History {
    stack: Vec<FieldKey>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: FieldKey) {
        self.stack.push(key);
    }

    pub fn pop(&mut self) -> Option<FieldKey> {
        self.stack.pop()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.stack.contains(&key)
    }

    /// Keys oldest first.
    pub fn iter(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.stack.iter().copied()
    }
}
