use std::fmt;

use super::{Cursor, PathStack, TreeCursor};
use crate::error::Result;
use crate::tree::SearchTree;

/// Entries with `low <= key < high`, produced by [`SearchTree::range`].
///
/// The view holds the starting stack built by the descent for `low`; each
/// cursor taken from it starts there and stops before the first key that
/// is `>= high`. An inverted or empty interval yields nothing.
pub struct Range<'a, K, V> {
    tree: &'a SearchTree<K, V>,
    path: PathStack,
    high: K,
}

impl<'a, K: Ord, V> Range<'a, K, V> {
    pub(crate) fn new(tree: &'a SearchTree<K, V>, path: PathStack, high: K) -> Self {
        Range { tree, path, high }
    }

    /// Returns true if no key falls in the interval.
    pub fn is_empty(&self) -> bool {
        match self.path.top() {
            Some(id) => self.tree.node(id).key >= self.high,
            None => true,
        }
    }

    /// Exclusive upper bound of the view.
    pub fn high(&self) -> &K {
        &self.high
    }
}

impl<'a, K: Ord + Clone, V> Range<'a, K, V> {
    /// Cursor at the first key in range.
    pub fn begin(&self) -> RangeCursor<'a, K, V> {
        RangeCursor::new(Cursor::new(self.tree, self.path.clone()), self.high.clone())
    }

    /// The exhausted cursor for this view.
    pub fn end(&self) -> RangeCursor<'a, K, V> {
        RangeCursor::new(Cursor::new(self.tree, PathStack::default()), self.high.clone())
    }

    pub fn iter(&self) -> RangeCursor<'a, K, V> {
        self.begin()
    }
}

impl<'a, K: Ord, V> IntoIterator for Range<'a, K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = RangeCursor<'a, K, V>;

    fn into_iter(self) -> RangeCursor<'a, K, V> {
        RangeCursor::new(Cursor::new(self.tree, self.path), self.high)
    }
}

impl<'a, K: Ord + Clone, V> IntoIterator for &Range<'a, K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = RangeCursor<'a, K, V>;

    fn into_iter(self) -> RangeCursor<'a, K, V> {
        self.begin()
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Range<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.path.top().map(|id| &self.tree.node(id).key);
        f.debug_struct("Range")
            .field("start", &start)
            .field("high", &self.high)
            .finish()
    }
}

/// In-order cursor that goes exhausted at the first key `>= high`.
///
/// The bound is checked on construction as well as after every step, so a
/// starting position already past `high` never yields.
pub struct RangeCursor<'a, K, V> {
    inner: Cursor<'a, K, V>,
    high: K,
}

impl<'a, K: Ord, V> RangeCursor<'a, K, V> {
    fn new(inner: Cursor<'a, K, V>, high: K) -> Self {
        let mut cursor = RangeCursor { inner, high };
        cursor.clip();
        cursor
    }

    /// Drop the whole stack once the current key reaches the bound.
    fn clip(&mut self) {
        if self.inner.current().is_some_and(|(key, _)| *key >= self.high) {
            self.inner.clear();
        }
    }

    /// Exclusive upper bound of this cursor.
    pub fn high(&self) -> &K {
        &self.high
    }
}

impl<K: Ord, V> TreeCursor for RangeCursor<'_, K, V> {
    type Key = K;
    type Value = V;

    fn key(&self) -> Result<&K> {
        self.inner.key()
    }

    fn value(&self) -> Result<&V> {
        self.inner.value()
    }

    fn is_valid(&self) -> bool {
        self.inner.is_valid()
    }

    fn advance(&mut self) -> Result<()> {
        self.inner.advance()?;
        self.clip();
        Ok(())
    }
}

impl<'a, K: Ord, V> Iterator for RangeCursor<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let entry = self.inner.next()?;
        self.clip();
        Some(entry)
    }
}

/// Equal when the underlying positions match and the bounds agree.
impl<K: PartialEq, V> PartialEq for RangeCursor<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner && self.high == other.high
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for RangeCursor<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeCursor")
            .field("at", &self.inner)
            .field("high", &self.high)
            .finish()
    }
}
