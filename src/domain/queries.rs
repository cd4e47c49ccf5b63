//! Depth, path-sum and successor queries.

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::BinaryTree;

impl BinaryTree {
    /// Number of nodes on the shortest root-to-leaf path, 0 when empty.
    ///
    /// Breadth-first, so the first leaf reached is a shallowest one.
    #[instrument(level = "debug", skip(self))]
    pub fn min_depth(&self) -> usize {
        self.iter_level_order()
            .find(|(_, node, _)| node.is_leaf())
            .map(|(_, _, depth)| depth)
            .unwrap_or(0)
    }

    /// Number of nodes on the longest root-to-leaf path, 0 when empty.
    #[instrument(level = "debug", skip(self))]
    pub fn max_depth(&self) -> usize {
        self.iter_level_order()
            .map(|(_, _, depth)| depth)
            .max()
            .unwrap_or(0)
    }

    /// Largest sum over any path that goes down, or down on both sides of a
    /// single turning node. The path need not touch the root and may be a
    /// single node. An empty tree sums to 0.
    ///
    /// Sums saturate at the `i64` bounds.
    #[instrument(level = "debug", skip(self))]
    pub fn max_sum(&self) -> i64 {
        let Some(root) = self.root else {
            return 0;
        };
        let mut best = i64::MIN;
        self.max_gain(root, &mut best);
        debug!(best, "max path sum");
        best
    }

    /// Best sum of a downward path starting at `idx`; records the best
    /// path turning at `idx` in `best`.
    fn max_gain(&self, idx: Index, best: &mut i64) -> i64 {
        let Some(node) = self.arena.get(idx) else {
            return 0;
        };
        let left = node.left.map_or(0, |child| self.max_gain(child, best).max(0));
        let right = node.right.map_or(0, |child| self.max_gain(child, best).max(0));

        let through = node.value().saturating_add(left).saturating_add(right);
        *best = (*best).max(through);
        node.value().saturating_add(left.max(right))
    }

    /// Smallest value strictly greater than `lower_bound`.
    ///
    /// Scans every node: values are not assumed to be in search-tree order.
    #[instrument(level = "debug", skip(self))]
    pub fn next_larger(&self, lower_bound: i64) -> Option<i64> {
        self.iter_inorder()
            .map(|(_, node)| node.value())
            .filter(|&value| value > lower_bound)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::arena::Node;

    use super::*;

    #[test]
    fn single_node_has_depth_one() {
        let tree = BinaryTree::from(Node::leaf(7));
        assert_eq!(tree.min_depth(), 1);
        assert_eq!(tree.max_depth(), 1);
        assert_eq!(tree.max_sum(), 7);
    }

    #[test]
    fn max_sum_ignores_negative_branches() {
        //   -10
        //   /  \
        //  9    20
        //      /  \
        //     15   7
        let tree = BinaryTree::from(
            Node::new(-10)
                .with_left(Node::leaf(9))
                .with_right(Node::new(20).with_left(Node::leaf(15)).with_right(Node::leaf(7))),
        );
        assert_eq!(tree.max_sum(), 42);
    }

    #[test]
    fn max_sum_saturates() {
        let tree = BinaryTree::from(Node::new(i64::MAX).with_left(Node::leaf(1)));
        assert_eq!(tree.max_sum(), i64::MAX);
    }
}
