//! Stack and queue based traversals. None of them recurse, so tree height
//! only costs heap space.

use std::collections::VecDeque;

use generational_arena::Index;
use tracing::instrument;

use crate::domain::arena::{BinaryTree, NodeId, TreeNode};

impl BinaryTree {
    /// Preorder: node, left subtree, right subtree.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> PreOrderIterator<'_> {
        PreOrderIterator::new(self)
    }

    /// In-order: left subtree, node, right subtree.
    #[instrument(level = "trace", skip(self))]
    pub fn iter_inorder(&self) -> InOrderIterator<'_> {
        InOrderIterator::new(self)
    }

    /// Breadth-first, yielding each node with its depth (root is 1).
    #[instrument(level = "trace", skip(self))]
    pub fn iter_level_order(&self) -> LevelOrderIterator<'_> {
        LevelOrderIterator::new(self)
    }
}

pub struct PreOrderIterator<'a> {
    tree: &'a BinaryTree,
    stack: Vec<Index>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(tree: &'a BinaryTree) -> Self {
        Self {
            tree,
            stack: tree.root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (NodeId, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(node) = self.tree.arena.get(current) {
                // right first so that left is popped first
                self.stack.extend(node.right);
                self.stack.extend(node.left);
                return Some((self.tree.node_id(current), node));
            }
        }
        None
    }
}

pub struct InOrderIterator<'a> {
    tree: &'a BinaryTree,
    stack: Vec<Index>,
    cursor: Option<Index>,
}

impl<'a> InOrderIterator<'a> {
    fn new(tree: &'a BinaryTree) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            cursor: tree.root,
        }
    }
}

impl<'a> Iterator for InOrderIterator<'a> {
    type Item = (NodeId, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.cursor {
            self.stack.push(current);
            self.cursor = self.tree.arena.get(current).and_then(|n| n.left);
        }
        let current = self.stack.pop()?;
        let node = self.tree.arena.get(current)?;
        self.cursor = node.right;
        Some((self.tree.node_id(current), node))
    }
}

pub struct LevelOrderIterator<'a> {
    tree: &'a BinaryTree,
    queue: VecDeque<(Index, usize)>,
}

impl<'a> LevelOrderIterator<'a> {
    fn new(tree: &'a BinaryTree) -> Self {
        Self {
            tree,
            queue: tree.root.map(|root| (root, 1)).into_iter().collect(),
        }
    }
}

impl<'a> Iterator for LevelOrderIterator<'a> {
    type Item = (NodeId, &'a TreeNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, depth)) = self.queue.pop_front() {
            if let Some(node) = self.tree.arena.get(current) {
                self.queue
                    .extend(node.children().map(|child| (child, depth + 1)));
                return Some((self.tree.node_id(current), node, depth));
            }
        }
        None
    }
}
