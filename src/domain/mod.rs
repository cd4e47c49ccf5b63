//! Domain layer: the tree and its algorithms
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod ancestry;
pub mod arena;
pub mod codec;
pub mod error;
pub mod iter;
pub mod path;
pub mod queries;
pub mod render;

pub use arena::{BinaryTree, Node, NodeId, TreeId, TreeNode};
pub use codec::{deserialize, serialize, TreeCodec};
pub use error::{DomainError, ParseError, TreeResult};
pub use iter::{InOrderIterator, LevelOrderIterator, PreOrderIterator};
pub use path::{Direction, NodePath};
pub use render::TreeRender;
