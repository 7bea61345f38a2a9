/// Construction-time settings for a [`SearchTree`](crate::SearchTree).
///
/// ```
/// use search_tree::{Options, SearchTree};
///
/// let tree: SearchTree<u32, &str> =
///     SearchTree::with_options(Options::default().with_capacity(64));
/// assert!(tree.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Node slots reserved in the arena up front.
    pub capacity: usize,
    /// Recycle slots released by `erase` for later inserts.
    ///
    /// When off, released slots stay vacant until `clear()`. Node ids are
    /// then never reused, which is handy when debugging cursor identity.
    pub reuse_slots: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            capacity: 0,
            reuse_slots: true,
        }
    }
}

impl Options {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn reuse_slots(mut self, reuse: bool) -> Self {
        self.reuse_slots = reuse;
        self
    }
}
