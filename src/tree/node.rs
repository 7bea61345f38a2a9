use std::ops::{Index, IndexMut};

use log::trace;

/// Index of a node slot in the arena.
pub type NodeId = usize;

/// Structural color of a node. Empty child positions count as `Black`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn flip(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// A single entry in the tree.
///
/// Children are slot ids into the owning [`NodeArena`]. A node is the only
/// holder of its children's ids, so the arena expresses the same single-owner
/// hierarchy as boxed links would, with nodes packed into one allocation.
///
/// Keys 1..=7 inserted in ascending order:
///
/// ```text
///              [4:B]
///             /     \
///         [2:B]     [6:B]
///         /   \     /   \
///      [1:B] [3:B][5:B] [7:B]
///
/// slots:  0:1  1:2  2:3  3:4  4:5  5:6  6:7     root = 3
/// ```
#[derive(Debug, Clone)]
pub struct Node<K, V> {
    pub key: K,
    pub value: V,
    pub color: Color,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    /// Fresh leaves are always red.
    pub fn leaf(key: K, value: V) -> Self {
        Node {
            key,
            value,
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

/// Slab of node slots with a free list of vacated ids.
#[derive(Debug, Clone)]
pub struct NodeArena<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<NodeId>,
    reuse: bool,
    occupied: usize,
}

impl<K, V> NodeArena<K, V> {
    pub fn new(capacity: usize, reuse: bool) -> Self {
        NodeArena {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            reuse,
            occupied: 0,
        }
    }

    /// Store a node, preferring a recycled slot.
    pub fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        self.occupied += 1;
        if let Some(id) = self.free.pop() {
            trace!("reusing node slot {id}");
            self.slots[id] = Some(node);
            return id;
        }
        let id = self.slots.len();
        if id == self.slots.capacity() {
            trace!("growing node arena past {id} slots");
        }
        self.slots.push(Some(node));
        id
    }

    /// Take the node out of its slot. The id must not be used afterwards.
    pub fn release(&mut self, id: NodeId) -> Node<K, V> {
        let node = match self.slots.get_mut(id).and_then(Option::take) {
            Some(node) => node,
            None => panic!("released vacant node slot {id}"),
        };
        self.occupied -= 1;
        if self.reuse {
            self.free.push(id);
        }
        node
    }

    pub fn get(&self, id: NodeId) -> Option<&Node<K, V>> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<K, V>> {
        self.slots.get_mut(id).and_then(Option::as_mut)
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.occupied = 0;
    }
}

impl<K, V> Index<NodeId> for NodeArena<K, V> {
    type Output = Node<K, V>;

    fn index(&self, id: NodeId) -> &Node<K, V> {
        match self.get(id) {
            Some(node) => node,
            None => panic!("dangling node id {id}"),
        }
    }
}

impl<K, V> IndexMut<NodeId> for NodeArena<K, V> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("dangling node id {id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_slot_is_reused() {
        let mut arena = NodeArena::new(0, true);
        let a = arena.alloc(Node::leaf(1, "a"));
        let b = arena.alloc(Node::leaf(2, "b"));
        assert_eq!(arena.release(a).value, "a");
        assert_eq!(arena.occupied(), 1);

        let c = arena.alloc(Node::leaf(3, "c"));
        assert_eq!(c, a);
        assert_eq!(arena[b].key, 2);
        assert_eq!(arena[c].key, 3);
    }

    #[test]
    fn released_slot_stays_vacant_without_reuse() {
        let mut arena = NodeArena::new(4, false);
        let a = arena.alloc(Node::leaf(1, ()));
        arena.release(a);
        let b = arena.alloc(Node::leaf(2, ()));
        assert_ne!(a, b);
        assert!(arena.get(a).is_none());
    }

    #[test]
    fn new_leaf_is_red() {
        let node = Node::leaf("k", 0u8);
        assert!(node.is_red());
        assert_eq!(node.color.flip(), Color::Black);
    }
}
