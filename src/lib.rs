//! # Search Tree
//!
//! An in-memory ordered key-value container built on a self-balancing
//! red-black tree.
//!
//! ## Core idea
//! Keep keys in a binary search tree, and after every insert or erase walk
//! back up the changed path recoloring and rotating until the red-black
//! invariants hold again. The tree stays within twice the optimal height,
//! so lookups, updates and ordered scans from any starting key cost
//! `O(log n)` to position.
//!
//! ```
//! use search_tree::SearchTree;
//!
//! let mut tree = SearchTree::new();
//! for (k, v) in [(1, "one"), (2, "two"), (3, "three"), (4, "four")] {
//!     tree.insert(k, v);
//! }
//!
//! let in_range: Vec<_> = tree.range(2, 4).into_iter().map(|(k, _)| *k).collect();
//! assert_eq!(in_range, [2, 3]);
//! ```

pub mod error;
pub mod iterator;
pub mod options;
pub mod tree;

// Public re-exports for the top-level API
pub use error::{Error, Result};
pub use iterator::{Cursor, CursorMut, Range, RangeCursor, TreeCursor};
pub use options::Options;
pub use tree::SearchTree;
