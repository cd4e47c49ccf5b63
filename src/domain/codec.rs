//! Preorder string encoding of trees.
//!
//! A tree is written as its preorder value sequence with a sentinel token
//! for every absent child, joined by a delimiter: `1,2,#,#,3,#,#` is a root
//! `1` with leaves `2` and `3`. The empty tree is the empty string.

use std::str::FromStr;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::arena::{BinaryTree, TreeNode};
use crate::domain::error::{DomainError, ParseError, TreeResult};

pub const DEFAULT_DELIMITER: &str = ",";
pub const DEFAULT_SENTINEL: &str = "#";

/// Delimiter and sentinel pair used to encode trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeCodec {
    delimiter: String,
    sentinel: String,
}

impl Default for TreeCodec {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            sentinel: DEFAULT_SENTINEL.to_string(),
        }
    }
}

impl TreeCodec {
    /// Builds a codec, rejecting token choices that would make the
    /// encoding ambiguous.
    pub fn new(delimiter: impl Into<String>, sentinel: impl Into<String>) -> TreeResult<Self> {
        let delimiter = delimiter.into();
        let sentinel = sentinel.into();

        if delimiter.is_empty() {
            return Err(DomainError::InvalidCodec("delimiter is empty".into()));
        }
        if delimiter
            .chars()
            .any(|c| c.is_ascii_digit() || c == '-' || c == '+')
        {
            return Err(DomainError::InvalidCodec(format!(
                "delimiter '{delimiter}' contains digits or sign characters"
            )));
        }
        if sentinel.is_empty() || sentinel.trim() != sentinel {
            return Err(DomainError::InvalidCodec(format!(
                "sentinel '{sentinel}' is empty or padded with whitespace"
            )));
        }
        if sentinel.contains(delimiter.as_str()) {
            return Err(DomainError::InvalidCodec(format!(
                "sentinel '{sentinel}' contains the delimiter '{delimiter}'"
            )));
        }
        if delimiter.contains(sentinel.as_str()) {
            return Err(DomainError::InvalidCodec(format!(
                "delimiter '{delimiter}' contains the sentinel '{sentinel}'"
            )));
        }
        if overlaps(&sentinel, &delimiter) || overlaps(&delimiter, &sentinel) {
            return Err(DomainError::InvalidCodec(format!(
                "sentinel '{sentinel}' and delimiter '{delimiter}' overlap"
            )));
        }
        if sentinel.parse::<i64>().is_ok() {
            return Err(DomainError::InvalidCodec(format!(
                "sentinel '{sentinel}' is a number"
            )));
        }

        Ok(Self {
            delimiter,
            sentinel,
        })
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    #[instrument(level = "debug", skip_all)]
    pub fn serialize(&self, tree: &BinaryTree) -> String {
        let Some(root) = tree.root else {
            return String::new();
        };

        let mut tokens = Vec::with_capacity(2 * tree.len() + 1);
        let mut stack = vec![Some(root)];
        while let Some(slot) = stack.pop() {
            match slot.and_then(|idx| tree.arena.get(idx)) {
                Some(node) => {
                    tokens.push(node.value().to_string());
                    stack.push(node.right);
                    stack.push(node.left);
                }
                None => tokens.push(self.sentinel.clone()),
            }
        }
        tokens.join(self.delimiter.as_str())
    }

    /// Rebuilds a tree from its encoding.
    ///
    /// Tokens are trimmed before they are read. Input that is blank or a
    /// lone sentinel gives the empty tree; anything truncated, non-numeric
    /// or followed by extra tokens is an error.
    #[instrument(level = "debug", skip(self))]
    pub fn deserialize(&self, input: &str) -> Result<BinaryTree, ParseError> {
        let mut tree = BinaryTree::new();
        if input.trim().is_empty() {
            return Ok(tree);
        }

        let tokens: Vec<&str> = input.split(self.delimiter.as_str()).map(str::trim).collect();
        let mut cursor = 0;
        tree.root = self.read_subtree(&tokens, &mut cursor, &mut tree.arena)?;
        if cursor < tokens.len() {
            return Err(ParseError::TrailingTokens { position: cursor });
        }

        debug!(nodes = tree.len(), "decoded tree");
        Ok(tree)
    }

    /// Recursion depth is bounded by the height of the encoded tree.
    fn read_subtree(
        &self,
        tokens: &[&str],
        cursor: &mut usize,
        arena: &mut Arena<TreeNode>,
    ) -> Result<Option<Index>, ParseError> {
        let position = *cursor;
        let token = *tokens
            .get(position)
            .ok_or(ParseError::UnexpectedEnd { consumed: position })?;
        *cursor += 1;

        if token == self.sentinel {
            return Ok(None);
        }
        let value = token
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidToken {
                position,
                token: token.to_string(),
            })?;

        let idx = arena.insert(TreeNode::new(value));
        let left = self.read_subtree(tokens, cursor, arena)?;
        let right = self.read_subtree(tokens, cursor, arena)?;
        if let Some(node) = arena.get_mut(idx) {
            node.left = left;
            node.right = right;
        }
        Ok(Some(idx))
    }
}

/// True when a proper suffix of `head` is a prefix of `tail`, so that
/// `head` followed by `tail` holds a spurious copy of either token.
fn overlaps(head: &str, tail: &str) -> bool {
    head.char_indices()
        .skip(1)
        .any(|(at, _)| tail.starts_with(&head[at..]))
}

/// Encodes `tree` with `,` and `#`.
pub fn serialize(tree: &BinaryTree) -> String {
    TreeCodec::default().serialize(tree)
}

/// Decodes a `,`/`#` encoding produced by [`serialize`].
pub fn deserialize(input: &str) -> Result<BinaryTree, ParseError> {
    TreeCodec::default().deserialize(input)
}

impl FromStr for BinaryTree {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        deserialize(s)
    }
}
