//! Arena-backed binary tree with structural queries and a preorder string codec.
//!
//! ```
//! use bintree::{BinaryTree, Node};
//!
//! let tree = BinaryTree::from(Node::new(1).with_left(Node::leaf(2)).with_right(Node::leaf(3)));
//! assert_eq!(tree.min_depth(), 2);
//! assert_eq!(tree.max_sum(), 6);
//! assert_eq!(bintree::serialize(&tree), "1,2,#,#,3,#,#");
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{
    deserialize, serialize, BinaryTree, Direction, DomainError, Node, NodeId, NodePath,
    ParseError, TreeCodec, TreeRender, TreeResult,
};
