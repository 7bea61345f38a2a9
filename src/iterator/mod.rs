pub mod cursor;
pub mod range;

pub use cursor::{Cursor, CursorMut};
pub use range::{Range, RangeCursor};

use crate::error::Result;
use crate::tree::SearchTree;
use crate::tree::node::NodeId;

/// Positioned, step-at-a-time access to entries in ascending key order.
///
/// Every cursor over a [`SearchTree`] implements this trait: the full
/// in-order [`Cursor`], the mutable [`CursorMut`], and the bounded
/// [`RangeCursor`]. Once a cursor runs off the end it is exhausted and
/// every accessor returns [`Error::ExhaustedCursor`](crate::Error).
pub trait TreeCursor {
    type Key;
    type Value;

    /// Key at the current position.
    fn key(&self) -> Result<&Self::Key>;

    /// Value at the current position.
    fn value(&self) -> Result<&Self::Value>;

    /// Returns true if the cursor is positioned at an entry.
    fn is_valid(&self) -> bool;

    /// Moves to the next entry in ascending order.
    fn advance(&mut self) -> Result<()>;

    /// Alias of [`is_valid`](Self::is_valid).
    fn has_next(&self) -> bool {
        self.is_valid()
    }

    /// Key and value at the current position.
    fn entry(&self) -> Result<(&Self::Key, &Self::Value)> {
        Ok((self.key()?, self.value()?))
    }
}

/// Stack of pending ancestors for an in-order walk.
///
/// The top is the current node. Below it sit the ancestors whose left
/// subtree is being walked, nearest first, so popping the top and pushing
/// the left spine of its right child yields the next key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PathStack {
    ids: Vec<NodeId>,
}

impl PathStack {
    /// Path to the smallest key under `link`.
    pub(crate) fn leftmost<K, V>(tree: &SearchTree<K, V>, link: Option<NodeId>) -> Self {
        let mut path = PathStack::default();
        path.push_left_spine(tree, link);
        path
    }

    pub(crate) fn push(&mut self, id: NodeId) {
        self.ids.push(id);
    }

    pub(crate) fn top(&self) -> Option<NodeId> {
        self.ids.last().copied()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.ids.clear();
    }

    /// Pop the current node and descend to its in-order successor.
    /// Returns the popped id, or `None` if the stack was already empty.
    pub(crate) fn step<K, V>(&mut self, tree: &SearchTree<K, V>) -> Option<NodeId> {
        let id = self.ids.pop()?;
        self.push_left_spine(tree, tree.node(id).right);
        Some(id)
    }

    fn push_left_spine<K, V>(&mut self, tree: &SearchTree<K, V>, mut link: Option<NodeId>) {
        while let Some(id) = link {
            self.ids.push(id);
            link = tree.node(id).left;
        }
    }
}
