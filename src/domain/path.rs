//! Addressing nodes by the left/right steps taken from the root.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Child slot of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    fn as_step(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Route from the root to a node.
///
/// The textual form is `.` for the root and otherwise one `L` or `R`
/// per step, e.g. `LR` is the right child of the root's left child.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<Direction>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of steps, i.e. the node's depth in edges.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn steps(&self) -> &[Direction] {
        &self.0
    }

    pub fn push(&mut self, step: Direction) {
        self.0.push(step);
    }

    pub fn pop(&mut self) -> Option<Direction> {
        self.0.pop()
    }

    pub fn child(&self, step: Direction) -> Self {
        let mut path = self.clone();
        path.push(step);
        path
    }

    /// Path of the parent node, `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.to_vec()))
    }
}

impl From<Vec<Direction>> for NodePath {
    fn from(steps: Vec<Direction>) -> Self {
        Self(steps)
    }
}

impl FromStr for NodePath {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "." || s.eq_ignore_ascii_case("root") {
            return Ok(Self::root());
        }
        s.chars()
            .map(|c| match c.to_ascii_uppercase() {
                'L' => Ok(Direction::Left),
                'R' => Ok(Direction::Right),
                _ => Err(DomainError::InvalidPath(s.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, ".");
        }
        for step in &self.0 {
            write!(f, "{}", step.as_step())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_steps_case_insensitively() {
        let path: NodePath = "lRl".parse().unwrap();
        assert_eq!(
            path.steps(),
            &[Direction::Left, Direction::Right, Direction::Left]
        );
        assert_eq!(path.to_string(), "LRL");
    }

    #[test]
    fn root_has_several_spellings() {
        for s in ["", ".", "root", " ROOT "] {
            assert!(s.parse::<NodePath>().unwrap().is_root(), "{s:?}");
        }
        assert_eq!(NodePath::root().to_string(), ".");
    }

    #[test]
    fn rejects_unknown_steps() {
        let err = "LX".parse::<NodePath>().unwrap_err();
        assert_eq!(err, DomainError::InvalidPath("LX".into()));
    }

    #[test]
    fn parent_drops_last_step() {
        let path: NodePath = "LR".parse().unwrap();
        assert_eq!(path.parent().unwrap().to_string(), "L");
        assert_eq!(NodePath::root().parent(), None);
    }
}
