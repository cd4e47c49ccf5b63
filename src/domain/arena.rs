use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use generational_arena::{Arena, Index};
use tracing::{instrument, trace};

use crate::domain::error::{DomainError, TreeResult};
use crate::domain::path::{Direction, NodePath};

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one tree instance. Clones and deserialized copies get their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeId(u64);

impl TreeId {
    fn next() -> Self {
        TreeId(NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to a node of a specific tree.
///
/// Equality is identity: two nodes holding the same value are different
/// nodes, and a handle never resolves in any tree other than its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    tree: TreeId,
    index: Index,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.index.into_raw_parts();
        write!(f, "node {}:{} of tree {}", slot, generation, self.tree.0)
    }
}

/// Node as stored in the tree's arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    value: i64,
    pub(crate) left: Option<Index>,
    pub(crate) right: Option<Index>,
}

impl TreeNode {
    pub(crate) fn new(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn child(&self, side: Direction) -> Option<Index> {
        match side {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    fn slot_mut(&mut self, side: Direction) -> &mut Option<Index> {
        match side {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    /// Children left to right.
    pub(crate) fn children(&self) -> impl Iterator<Item = Index> {
        self.left.into_iter().chain(self.right)
    }
}

/// Owned, detached description of a subtree.
///
/// Used to spell out a whole tree in one expression before handing it to
/// [`BinaryTree::from`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub value: i64,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl Node {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn leaf(value: i64) -> Self {
        Self::new(value)
    }

    pub fn with_left(mut self, node: Node) -> Self {
        self.left = Some(Box::new(node));
        self
    }

    pub fn with_right(mut self, node: Node) -> Self {
        self.right = Some(Box::new(node));
        self
    }
}

/// Arena-backed binary tree.
///
/// Every node lives in a generational arena owned by the tree and links to
/// its children by index. Every stored node is reachable from the root:
/// nodes are only ever added below an existing node, and never removed.
#[derive(Debug)]
pub struct BinaryTree {
    id: TreeId,
    pub(crate) arena: Arena<TreeNode>,
    pub(crate) root: Option<Index>,
}

impl Default for BinaryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for BinaryTree {
    fn clone(&self) -> Self {
        Self {
            id: TreeId::next(),
            arena: self.arena.clone(),
            root: self.root,
        }
    }
}

impl BinaryTree {
    pub fn new() -> Self {
        Self {
            id: TreeId::next(),
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root.map(|idx| self.node_id(idx))
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Whether `node` is a node of this tree.
    pub fn contains(&self, node: NodeId) -> bool {
        self.resolve(node).is_some()
    }

    pub fn get(&self, node: NodeId) -> Option<&TreeNode> {
        self.resolve(node).and_then(|idx| self.arena.get(idx))
    }

    pub fn value(&self, node: NodeId) -> Option<i64> {
        self.get(node).map(TreeNode::value)
    }

    pub fn left(&self, node: NodeId) -> Option<NodeId> {
        self.child(node, Direction::Left)
    }

    pub fn right(&self, node: NodeId) -> Option<NodeId> {
        self.child(node, Direction::Right)
    }

    pub fn child(&self, node: NodeId, side: Direction) -> Option<NodeId> {
        self.get(node)
            .and_then(|n| n.child(side))
            .map(|idx| self.node_id(idx))
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.get(node)
            .map(|n| n.children().map(|idx| self.node_id(idx)).collect())
            .unwrap_or_default()
    }

    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.get(node).is_some_and(TreeNode::is_leaf)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn set_root(&mut self, value: i64) -> TreeResult<NodeId> {
        if self.root.is_some() {
            return Err(DomainError::RootOccupied);
        }
        let idx = self.arena.insert(TreeNode::new(value));
        self.root = Some(idx);
        Ok(self.node_id(idx))
    }

    /// Creates a leaf holding `value` in the empty `side` slot of `parent`.
    #[instrument(level = "trace", skip(self))]
    pub fn attach(&mut self, parent: NodeId, side: Direction, value: i64) -> TreeResult<NodeId> {
        let parent_idx = self
            .resolve(parent)
            .ok_or(DomainError::ForeignNode(parent))?;
        let occupied = self
            .arena
            .get(parent_idx)
            .and_then(|n| n.child(side))
            .is_some();
        if occupied {
            return Err(DomainError::SlotOccupied { parent, side });
        }

        let idx = self.arena.insert(TreeNode::new(value));
        if let Some(node) = self.arena.get_mut(parent_idx) {
            *node.slot_mut(side) = Some(idx);
        }
        trace!(?side, value, "attached child");
        Ok(self.node_id(idx))
    }

    pub fn attach_left(&mut self, parent: NodeId, value: i64) -> TreeResult<NodeId> {
        self.attach(parent, Direction::Left, value)
    }

    pub fn attach_right(&mut self, parent: NodeId, value: i64) -> TreeResult<NodeId> {
        self.attach(parent, Direction::Right, value)
    }

    /// Follows `path` from the root.
    #[instrument(level = "trace", skip(self))]
    pub fn node_at(&self, path: &NodePath) -> Option<NodeId> {
        let mut current = self.root?;
        for &step in path.steps() {
            current = self.arena.get(current)?.child(step)?;
        }
        Some(self.node_id(current))
    }

    /// Route from the root to `node`, or `None` if it is not in this tree.
    ///
    /// Recursion depth is bounded by the tree height.
    #[instrument(level = "trace", skip(self))]
    pub fn path_of(&self, node: NodeId) -> Option<NodePath> {
        let target = self.resolve(node)?;
        let root = self.root?;
        let mut path = NodePath::root();
        self.trace_path(root, target, &mut path).then_some(path)
    }

    fn trace_path(&self, current: Index, target: Index, path: &mut NodePath) -> bool {
        if current == target {
            return true;
        }
        let Some(node) = self.arena.get(current) else {
            return false;
        };
        for side in [Direction::Left, Direction::Right] {
            if let Some(child) = node.child(side) {
                path.push(side);
                if self.trace_path(child, target, path) {
                    return true;
                }
                path.pop();
            }
        }
        false
    }

    pub(crate) fn node_id(&self, index: Index) -> NodeId {
        NodeId {
            tree: self.id,
            index,
        }
    }

    pub(crate) fn resolve(&self, node: NodeId) -> Option<Index> {
        (node.tree == self.id && self.arena.contains(node.index)).then_some(node.index)
    }
}

impl From<Node> for BinaryTree {
    fn from(root: Node) -> Self {
        let mut tree = BinaryTree::new();
        let mut pending: Vec<(Node, Option<(Index, Direction)>)> = vec![(root, None)];

        while let Some((node, slot)) = pending.pop() {
            let Node { value, left, right } = node;
            let idx = tree.arena.insert(TreeNode::new(value));
            match slot {
                None => tree.root = Some(idx),
                Some((parent, side)) => {
                    if let Some(parent) = tree.arena.get_mut(parent) {
                        *parent.slot_mut(side) = Some(idx);
                    }
                }
            }
            if let Some(right) = right {
                pending.push((*right, Some((idx, Direction::Right))));
            }
            if let Some(left) = left {
                pending.push((*left, Some((idx, Direction::Left))));
            }
        }

        tree
    }
}

/// Same shape and same values; identity is not compared.
impl PartialEq for BinaryTree {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self.root, other.root)];
        while let Some(pair) = pending.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) => match (self.arena.get(a), other.arena.get(b)) {
                    (Some(x), Some(y)) if x.value == y.value => {
                        pending.push((x.right, y.right));
                        pending.push((x.left, y.left));
                    }
                    _ => return false,
                },
                _ => return false,
            }
        }
        true
    }
}

impl Eq for BinaryTree {}
