//! Cousin and lowest-common-ancestor relations.
//!
//! Both searches recurse from the root, so stack use grows with tree height.

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::{BinaryTree, NodeId};

/// Where a non-root node hangs in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Location {
    /// Edges from the root.
    depth: usize,
    parent: Index,
}

impl BinaryTree {
    /// True when `a` and `b` sit at the same depth under different parents.
    ///
    /// False if either node is the root or not in this tree.
    #[instrument(level = "debug", skip(self))]
    pub fn are_cousins(&self, a: NodeId, b: NodeId) -> bool {
        let Some(root) = self.root else {
            return false;
        };
        let (Some(a), Some(b)) = (self.resolve(a), self.resolve(b)) else {
            return false;
        };
        if a == root || b == root {
            return false;
        }

        match (self.locate(root, a, 0), self.locate(root, b, 0)) {
            (Some(la), Some(lb)) => {
                debug!(?la, ?lb, "located both nodes");
                la.depth == lb.depth && la.parent != lb.parent
            }
            _ => false,
        }
    }

    fn locate(&self, current: Index, target: Index, depth: usize) -> Option<Location> {
        let node = self.arena.get(current)?;
        node.children().find_map(|child| {
            if child == target {
                Some(Location {
                    depth: depth + 1,
                    parent: current,
                })
            } else {
                self.locate(child, target, depth + 1)
            }
        })
    }

    /// Deepest node having both `a` and `b` below it, where a node counts as
    /// below itself. `None` unless both nodes are in this tree.
    #[instrument(level = "debug", skip(self))]
    pub fn lowest_common_ancestor(&self, a: NodeId, b: NodeId) -> Option<NodeId> {
        let root = self.root?;
        let a = self.resolve(a)?;
        let b = self.resolve(b)?;
        self.common_ancestor_from(root, a, b)
            .map(|idx| self.node_id(idx))
    }

    /// Returns `current` if it is a target or the targets split below it,
    /// otherwise whichever side found something.
    fn common_ancestor_from(&self, current: Index, a: Index, b: Index) -> Option<Index> {
        if current == a || current == b {
            return Some(current);
        }
        let node = self.arena.get(current)?;
        let left = node
            .left
            .and_then(|child| self.common_ancestor_from(child, a, b));
        let right = node
            .right
            .and_then(|child| self.common_ancestor_from(child, a, b));

        match (left, right) {
            (Some(_), Some(_)) => Some(current),
            (found, None) | (None, found) => found,
        }
    }
}
