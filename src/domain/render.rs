use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::BinaryTree;
use crate::domain::codec::DEFAULT_SENTINEL;

pub const EMPTY_LABEL: &str = "(empty)";

pub trait TreeRender {
    /// Renders with `sentinel` marking a missing child.
    fn to_tree_string_with(&self, sentinel: &str) -> Tree<String>;

    fn to_tree_string(&self) -> Tree<String> {
        self.to_tree_string_with(DEFAULT_SENTINEL)
    }
}

impl TreeRender for BinaryTree {
    /// A child slot left empty next to an occupied one is drawn as the
    /// sentinel so that left and right stay distinguishable. Recursion
    /// depth is bounded by the height of the tree.
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string_with(&self, sentinel: &str) -> Tree<String> {
        let Some(root) = self.root else {
            return Tree::new(EMPTY_LABEL.to_string());
        };

        fn build(tree: &BinaryTree, idx: Index, sentinel: &str) -> Tree<String> {
            let Some(node) = tree.arena.get(idx) else {
                return Tree::new(sentinel.to_string());
            };
            let mut view = Tree::new(node.value().to_string());
            if !node.is_leaf() {
                for slot in [node.left, node.right] {
                    view.push(match slot {
                        Some(child) => build(tree, child, sentinel),
                        None => Tree::new(sentinel.to_string()),
                    });
                }
            }
            view
        }

        build(self, root, sentinel)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::arena::Node;

    use super::*;

    #[test]
    fn marks_missing_sibling() {
        let tree = BinaryTree::from(Node::new(1).with_right(Node::leaf(3)));
        let rendered = tree.to_tree_string().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "1");
        assert!(lines[1].ends_with("#"), "{rendered}");
        assert!(lines[2].ends_with("3"), "{rendered}");
    }

    #[test]
    fn marks_missing_child_with_given_sentinel() {
        let tree = BinaryTree::from(Node::new(1).with_left(Node::leaf(2)));
        let rendered = tree.to_tree_string_with("~").to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[1].ends_with("2"), "{rendered}");
        assert!(lines[2].ends_with("~"), "{rendered}");
        assert!(!rendered.contains('#'), "{rendered}");
    }

    #[test]
    fn empty_tree_has_label() {
        assert_eq!(BinaryTree::new().to_tree_string().to_string().trim(), EMPTY_LABEL);
    }
}
