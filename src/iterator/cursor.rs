use std::fmt;
use std::ptr;

use super::{PathStack, TreeCursor};
use crate::error::{Error, Result};
use crate::tree::SearchTree;

/// In-order cursor over a [`SearchTree`].
///
/// Holds an explicit stack of pending ancestors instead of recursing, so it
/// can be stepped one entry at a time. It reads the live tree; the shared
/// borrow keeps the tree from being mutated underneath it.
///
/// Also an [`Iterator`] over `(&K, &V)`: `next()` yields the current entry
/// and then advances.
pub struct Cursor<'a, K, V> {
    tree: &'a SearchTree<K, V>,
    path: PathStack,
}

impl<'a, K, V> Cursor<'a, K, V> {
    pub(crate) fn new(tree: &'a SearchTree<K, V>, path: PathStack) -> Self {
        Cursor { tree, path }
    }

    pub(crate) fn clear(&mut self) {
        self.path.clear();
    }

    /// Current entry with the tree's lifetime rather than the cursor's.
    pub(crate) fn current(&self) -> Option<(&'a K, &'a V)> {
        let node = self.tree.node(self.path.top()?);
        Some((&node.key, &node.value))
    }
}

impl<K, V> TreeCursor for Cursor<'_, K, V> {
    type Key = K;
    type Value = V;

    fn key(&self) -> Result<&K> {
        self.current().map(|(k, _)| k).ok_or(Error::ExhaustedCursor)
    }

    fn value(&self) -> Result<&V> {
        self.current().map(|(_, v)| v).ok_or(Error::ExhaustedCursor)
    }

    fn is_valid(&self) -> bool {
        !self.path.is_empty()
    }

    fn advance(&mut self) -> Result<()> {
        self.path.step(self.tree).ok_or(Error::ExhaustedCursor)?;
        Ok(())
    }
}

impl<'a, K, V> Iterator for Cursor<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let entry = self.current()?;
        self.path.step(self.tree);
        Some(entry)
    }
}

impl<K, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self {
        Cursor {
            tree: self.tree,
            path: self.path.clone(),
        }
    }
}

/// Two cursors are equal when both are exhausted, or when both sit on the
/// same node of the same tree.
impl<K, V> PartialEq for Cursor<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        match (self.path.top(), other.path.top()) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b && ptr::eq(self.tree, other.tree),
            _ => false,
        }
    }
}

impl<K, V> Eq for Cursor<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Cursor<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.current() {
            Some((key, value)) => f.debug_tuple("Cursor").field(key).field(value).finish(),
            None => f.write_str("Cursor(end)"),
        }
    }
}

/// In-order cursor with write access to values.
///
/// Keys stay read-only: changing one in place could break the ordering.
pub struct CursorMut<'a, K, V> {
    tree: &'a mut SearchTree<K, V>,
    path: PathStack,
}

impl<'a, K, V> CursorMut<'a, K, V> {
    pub(crate) fn new(tree: &'a mut SearchTree<K, V>, path: PathStack) -> Self {
        CursorMut { tree, path }
    }

    /// Mutable handle to the value at the current position.
    pub fn value_mut(&mut self) -> Result<&mut V> {
        let id = self.path.top().ok_or(Error::ExhaustedCursor)?;
        Ok(&mut self.tree.node_mut(id).value)
    }
}

impl<K, V> TreeCursor for CursorMut<'_, K, V> {
    type Key = K;
    type Value = V;

    fn key(&self) -> Result<&K> {
        let id = self.path.top().ok_or(Error::ExhaustedCursor)?;
        Ok(&self.tree.node(id).key)
    }

    fn value(&self) -> Result<&V> {
        let id = self.path.top().ok_or(Error::ExhaustedCursor)?;
        Ok(&self.tree.node(id).value)
    }

    fn is_valid(&self) -> bool {
        !self.path.is_empty()
    }

    fn advance(&mut self) -> Result<()> {
        self.path.step(self.tree).ok_or(Error::ExhaustedCursor)?;
        Ok(())
    }
}
