//! Rotations, color flips, and the recursive insert/erase descents.
//!
//! The tree is kept left-leaning: a red link may only hang off a node's left
//! side. That makes every tree a 1-1 encoding of a 2-3 tree, so black-height
//! stays uniform and the longest path is at most twice the shortest.
//!
//! Insertion walks down to an empty position, attaches a red leaf, and calls
//! `balance` on every ancestor while unwinding.
//!
//! Deletion walks down carrying a red link with it ("move red left / right")
//! so the node finally unlinked is never black. The same `balance` pass then
//! fixes up any right-leaning reds left behind.

use std::cmp::Ordering;
use std::mem;

use super::SearchTree;
use super::node::{Color, Node, NodeId};

impl<K, V> SearchTree<K, V> {
    pub(super) fn is_red(&self, link: Option<NodeId>) -> bool {
        link.is_some_and(|id| self.nodes[id].is_red())
    }

    fn left_of(&self, link: Option<NodeId>) -> Option<NodeId> {
        link.and_then(|id| self.nodes[id].left)
    }

    /// Promote the right child of `h`. Returns the new subtree root.
    ///
    /// ```text
    ///      h                x
    ///     / \              / \
    ///    a   x     =>     h   c
    ///       / \          / \
    ///      b   c        a   b
    /// ```
    pub(super) fn rotate_left(&mut self, h: NodeId) -> NodeId {
        let Some(x) = self.nodes[h].right else {
            return h;
        };
        self.nodes[h].right = self.nodes[x].left;
        self.nodes[x].left = Some(h);
        self.nodes[x].color = self.nodes[h].color;
        self.nodes[h].color = Color::Red;
        x
    }

    /// Mirror of [`rotate_left`](Self::rotate_left).
    pub(super) fn rotate_right(&mut self, h: NodeId) -> NodeId {
        let Some(x) = self.nodes[h].left else {
            return h;
        };
        self.nodes[h].left = self.nodes[x].right;
        self.nodes[x].right = Some(h);
        self.nodes[x].color = self.nodes[h].color;
        self.nodes[h].color = Color::Red;
        x
    }

    /// Toggle `h` and both children. On insert this splits a temporary
    /// 4-node (black parent, two red children); on erase it merges one.
    pub(super) fn flip_colors(&mut self, h: NodeId) {
        let node = &mut self.nodes[h];
        node.color = node.color.flip();
        let (left, right) = (node.left, node.right);
        for child in [left, right].into_iter().flatten() {
            let child = &mut self.nodes[child];
            child.color = child.color.flip();
        }
    }

    /// Fix-up applied to every ancestor on the way back up.
    pub(super) fn balance(&mut self, mut h: NodeId) -> NodeId {
        if self.is_red(self.nodes[h].right) && !self.is_red(self.nodes[h].left) {
            h = self.rotate_left(h);
        }
        let left = self.nodes[h].left;
        if self.is_red(left) && self.is_red(self.left_of(left)) {
            h = self.rotate_right(h);
        }
        if self.is_red(self.nodes[h].left) && self.is_red(self.nodes[h].right) {
            self.flip_colors(h);
        }
        h
    }

    /// Make `h.left` or one of its children red before descending left.
    fn move_red_left(&mut self, mut h: NodeId) -> NodeId {
        self.flip_colors(h);
        if let Some(right) = self.nodes[h].right {
            if self.is_red(self.nodes[right].left) {
                let right = self.rotate_right(right);
                self.nodes[h].right = Some(right);
                h = self.rotate_left(h);
                self.flip_colors(h);
            }
        }
        h
    }

    /// Make `h.right` or one of its children red before descending right.
    fn move_red_right(&mut self, mut h: NodeId) -> NodeId {
        self.flip_colors(h);
        let left = self.nodes[h].left;
        if self.is_red(self.left_of(left)) {
            h = self.rotate_right(h);
            self.flip_colors(h);
        }
        h
    }
}

impl<K: Ord, V> SearchTree<K, V> {
    /// Insert below `link`. Returns the new subtree root and whether a node
    /// was created. An existing key keeps its value.
    pub(super) fn insert_at(&mut self, link: Option<NodeId>, key: K, value: V) -> (NodeId, bool) {
        let Some(h) = link else {
            return (self.nodes.alloc(Node::leaf(key, value)), true);
        };
        let inserted = match key.cmp(&self.nodes[h].key) {
            Ordering::Less => {
                let left = self.nodes[h].left;
                let (child, inserted) = self.insert_at(left, key, value);
                self.nodes[h].left = Some(child);
                inserted
            }
            Ordering::Greater => {
                let right = self.nodes[h].right;
                let (child, inserted) = self.insert_at(right, key, value);
                self.nodes[h].right = Some(child);
                inserted
            }
            Ordering::Equal => return (h, false),
        };
        (self.balance(h), inserted)
    }

    /// Erase `key` from the subtree rooted at `h`. The key must be present.
    ///
    /// Returns the new subtree root and the erased value. When the node has
    /// two children, its in-order successor is unlinked instead and moved
    /// into the node's slot.
    pub(super) fn erase_at(&mut self, mut h: NodeId, key: &K) -> (Option<NodeId>, Option<V>) {
        let removed;
        if *key < self.nodes[h].key {
            let left = self.nodes[h].left;
            if !self.is_red(left) && !self.is_red(self.left_of(left)) {
                h = self.move_red_left(h);
            }
            let Some(left) = self.nodes[h].left else {
                return (Some(self.balance(h)), None);
            };
            let (child, value) = self.erase_at(left, key);
            self.nodes[h].left = child;
            removed = value;
        } else {
            if self.is_red(self.nodes[h].left) {
                h = self.rotate_right(h);
            }
            if *key == self.nodes[h].key && self.nodes[h].right.is_none() {
                let node = self.nodes.release(h);
                return (node.left, Some(node.value));
            }
            let right = self.nodes[h].right;
            if !self.is_red(right) && !self.is_red(self.left_of(right)) {
                h = self.move_red_right(h);
            }
            let Some(right) = self.nodes[h].right else {
                return (Some(self.balance(h)), None);
            };
            if *key == self.nodes[h].key {
                let (child, successor) = self.erase_min(right);
                self.nodes[h].right = child;
                let successor = self.nodes.release(successor);
                let node = &mut self.nodes[h];
                node.key = successor.key;
                removed = Some(mem::replace(&mut node.value, successor.value));
            } else {
                let (child, value) = self.erase_at(right, key);
                self.nodes[h].right = child;
                removed = value;
            }
        }
        (Some(self.balance(h)), removed)
    }

    /// Detach the leftmost node under `h` without releasing it.
    /// Returns the new subtree root and the detached node's id.
    fn erase_min(&mut self, mut h: NodeId) -> (Option<NodeId>, NodeId) {
        let Some(left) = self.nodes[h].left else {
            return (self.nodes[h].right.take(), h);
        };
        if !self.is_red(Some(left)) && !self.is_red(self.nodes[left].left) {
            h = self.move_red_left(h);
        }
        let Some(left) = self.nodes[h].left else {
            unreachable!("move_red_left keeps the left child of node {h}");
        };
        let (child, min) = self.erase_min(left);
        self.nodes[h].left = child;
        (Some(self.balance(h)), min)
    }
}
