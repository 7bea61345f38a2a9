use log::debug;

use super::SearchTree;
use super::node::NodeId;
use crate::error::{Error, Result};

impl<K: Ord, V> SearchTree<K, V> {
    /// Walk the whole tree and check the red-black invariants:
    ///
    /// - the root is black
    /// - no red node has a red child
    /// - every root-to-leaf path crosses the same number of black nodes
    /// - keys are strictly ascending in order
    /// - `len()` matches the number of reachable nodes
    ///
    /// Reports the first violation found as [`Error::Corruption`].
    pub fn validate(&self) -> Result<()> {
        self.check_tree().inspect_err(|e| debug!("validate failed: {e}"))
    }

    fn check_tree(&self) -> Result<()> {
        let Some(root) = self.root else {
            if self.len() != 0 {
                return Err(Error::Corruption(format!(
                    "empty root but {} occupied slots",
                    self.len()
                )));
            }
            return Ok(());
        };
        if self.nodes[root].is_red() {
            return Err(Error::Corruption("root is red".into()));
        }
        let mut reached = 0;
        self.check_subtree(Some(root), None, None, &mut reached)?;
        if reached != self.len() {
            return Err(Error::Corruption(format!(
                "{reached} reachable nodes but {} occupied slots",
                self.len()
            )));
        }
        Ok(())
    }

    /// Returns the black-height of the subtree at `link`, counting the empty
    /// positions below it as one black level.
    fn check_subtree(
        &self,
        link: Option<NodeId>,
        lower: Option<&K>,
        upper: Option<&K>,
        reached: &mut usize,
    ) -> Result<usize> {
        let Some(id) = link else {
            return Ok(1);
        };
        *reached += 1;
        if *reached > self.len() {
            return Err(Error::Corruption(format!("node {id} reached twice")));
        }

        let node = &self.nodes[id];
        if lower.is_some_and(|lower| node.key <= *lower)
            || upper.is_some_and(|upper| node.key >= *upper)
        {
            return Err(Error::Corruption(format!("node {id} is out of key order")));
        }
        if node.is_red() && (self.is_red(node.left) || self.is_red(node.right)) {
            return Err(Error::Corruption(format!("red node {id} has a red child")));
        }

        let left = self.check_subtree(node.left, lower, Some(&node.key), reached)?;
        let right = self.check_subtree(node.right, Some(&node.key), upper, reached)?;
        if left != right {
            return Err(Error::Corruption(format!(
                "black-height differs under node {id}: {left} left, {right} right"
            )));
        }
        Ok(left + usize::from(!node.is_red()))
    }

    /// Longest root-to-leaf path, in nodes.
    #[cfg(test)]
    pub(crate) fn height(&self) -> usize {
        fn depth<K, V>(tree: &SearchTree<K, V>, link: Option<NodeId>) -> usize {
            match link {
                None => 0,
                Some(id) => {
                    let node = tree.node(id);
                    1 + depth(tree, node.left).max(depth(tree, node.right))
                }
            }
        }
        depth(self, self.root)
    }
}
