mod balance;
pub(crate) mod node;
mod validate;

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::iterator::{Cursor, CursorMut, PathStack, Range};
use crate::options::Options;
use node::{Color, Node, NodeArena, NodeId};

/// An ordered map backed by a left-leaning red-black tree.
///
/// Every insert and erase restores the red-black invariants before it
/// returns, so lookups, inserts and erases are `O(log n)` and the tree
/// height never exceeds `2 * log2(n + 1)`.
///
/// Nodes live in a slab owned by the tree and refer to their children by
/// slot id. Cursors borrow the tree, so it cannot be mutated while a
/// traversal is in progress.
///
/// ```
/// use search_tree::SearchTree;
///
/// let mut tree = SearchTree::new();
/// tree.insert(3, "three");
/// tree.insert(1, "one");
/// tree.insert(2, "two");
///
/// let keys: Vec<_> = tree.iter().map(|(k, _)| *k).collect();
/// assert_eq!(keys, [1, 2, 3]);
/// ```
#[derive(Clone)]
pub struct SearchTree<K, V> {
    nodes: NodeArena<K, V>,
    root: Option<NodeId>,
}

impl<K, V> SearchTree<K, V> {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        SearchTree {
            nodes: NodeArena::new(options.capacity, options.reuse_slots),
            root: None,
        }
    }

    /// Number of entries in the tree.
    pub fn len(&self) -> usize {
        self.nodes.occupied()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drop every entry. Released slots are not kept around.
    pub fn clear(&mut self) {
        debug!("clearing tree of {} entries", self.len());
        self.root = None;
        self.nodes.clear();
    }

    /// Cursor at the smallest key, or exhausted if the tree is empty.
    pub fn begin(&self) -> Cursor<'_, K, V> {
        Cursor::new(self, PathStack::leftmost(self, self.root))
    }

    /// The exhausted cursor. Every cursor that runs off the end equals it.
    pub fn end(&self) -> Cursor<'_, K, V> {
        Cursor::new(self, PathStack::default())
    }

    /// Ascending iterator over `(&key, &value)` pairs.
    pub fn iter(&self) -> Cursor<'_, K, V> {
        self.begin()
    }

    /// Mutable cursor at the smallest key.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, K, V> {
        let path = PathStack::leftmost(self, self.root);
        CursorMut::new(self, path)
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        let mut id = self.root?;
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        let node = &self.nodes[id];
        Some((&node.key, &node.value))
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        let mut id = self.root?;
        while let Some(right) = self.nodes[id].right {
            id = right;
        }
        let node = &self.nodes[id];
        Some((&node.key, &node.value))
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        &self.nodes[id]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        &mut self.nodes[id]
    }
}

impl<K: Ord, V> SearchTree<K, V> {
    /// Insert a key-value pair. Returns `true` if a new entry was created.
    ///
    /// If the key is already present the tree is left untouched: the stored
    /// value is never overwritten and `value` is dropped.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let root = self.root;
        let (root, inserted) = self.insert_at(root, key, value);
        self.nodes[root].color = Color::Black;
        self.root = Some(root);
        inserted
    }

    /// Remove a key, returning its value. Absent keys are a no-op.
    pub fn erase(&mut self, key: &K) -> Option<V> {
        let root = self.root?;
        if self.locate(key).is_none() {
            trace!("erase: key not present");
            return None;
        }
        // Borrow a red link for the descent unless the root already has one.
        if !self.is_red(self.nodes[root].left) && !self.is_red(self.nodes[root].right) {
            self.nodes[root].color = Color::Red;
        }
        let (root, removed) = self.erase_at(root, key);
        self.root = root;
        if let Some(root) = self.root {
            self.nodes[root].color = Color::Black;
        }
        removed
    }

    /// Cursor positioned at `key`, or [`end`](Self::end) if it is absent.
    ///
    /// Advancing the cursor continues in ascending order from `key`.
    pub fn find(&self, key: &K) -> Cursor<'_, K, V> {
        match self.search_path(key) {
            Some(path) => Cursor::new(self, path),
            None => self.end(),
        }
    }

    /// Mutable cursor positioned at `key`, exhausted if it is absent.
    pub fn find_mut(&mut self, key: &K) -> CursorMut<'_, K, V> {
        let path = self.search_path(key).unwrap_or_default();
        CursorMut::new(self, path)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.locate(key).map(|id| &self.nodes[id].value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.locate(key)?;
        Some(&mut self.nodes[id].value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.locate(key).is_some()
    }

    /// View over the entries with `low <= key < high`, in ascending order.
    ///
    /// The descent from the root stacks every node whose key is `>= low`,
    /// which is exactly the pending-ancestor stack an in-order cursor would
    /// hold at the first key in range.
    pub fn range(&self, low: K, high: K) -> Range<'_, K, V> {
        let mut path = PathStack::default();
        let mut link = self.root;
        while let Some(id) = link {
            let node = &self.nodes[id];
            if node.key >= low {
                path.push(id);
            }
            link = match low.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => break,
            };
        }
        Range::new(self, path, high)
    }

    fn locate(&self, key: &K) -> Option<NodeId> {
        let mut link = self.root;
        while let Some(id) = link {
            let node = &self.nodes[id];
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// In-order stack for `key`: the match plus every ancestor the search
    /// left through. Ancestors passed on the right are already behind us.
    fn search_path(&self, key: &K) -> Option<PathStack> {
        let mut path = PathStack::default();
        let mut link = self.root;
        while let Some(id) = link {
            let node = &self.nodes[id];
            link = match key.cmp(&node.key) {
                Ordering::Less => {
                    path.push(id);
                    node.left
                }
                Ordering::Greater => node.right,
                Ordering::Equal => {
                    path.push(id);
                    return Some(path);
                }
            };
        }
        None
    }
}

impl<K, V> Default for SearchTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SearchTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V> IntoIterator for &'a SearchTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Cursor<'a, K, V>;

    fn into_iter(self) -> Cursor<'a, K, V> {
        self.begin()
    }
}

impl<K: Ord, V> Extend<(K, V)> for SearchTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SearchTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = SearchTree::new();
        tree.extend(iter);
        tree
    }
}
