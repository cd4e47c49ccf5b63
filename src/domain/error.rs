//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::arena::NodeId;
use crate::domain::path::Direction;

/// Errors raised while constructing or addressing a tree.
///
/// Queries never fail: a node that is not part of the tree is a
/// negative result, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("tree already has a root node")]
    RootOccupied,

    #[error("{0} does not belong to this tree")]
    ForeignNode(NodeId),

    #[error("{side} child of {parent} is already set")]
    SlotOccupied { parent: NodeId, side: Direction },

    #[error("invalid node path '{0}': expected '.' or a sequence of 'L'/'R'")]
    InvalidPath(String),

    #[error("invalid codec: {0}")]
    InvalidCodec(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Deserialization failures. Malformed input never yields a partial tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid token '{token}' at position {position}")]
    InvalidToken { position: usize, token: String },

    #[error("unexpected end of input after {consumed} tokens")]
    UnexpectedEnd { consumed: usize },

    #[error("trailing tokens after a complete tree, starting at position {position}")]
    TrailingTokens { position: usize },
}

/// Result type for tree construction.
pub type TreeResult<T> = Result<T, DomainError>;
