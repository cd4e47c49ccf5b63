//! Depth, path-sum and successor queries

use bintree::util::testing;
use bintree::{BinaryTree, Node};
use rstest::{fixture, rstest};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

/// root=1, left=2, right=3
#[fixture]
fn small_tree() -> BinaryTree {
    BinaryTree::from(Node::new(1).with_left(Node::leaf(2)).with_right(Node::leaf(3)))
}

/// ```text
///        6
///       / \
///      5   5
///     / \   \
///    3   1   1
///   / \
///  2   1
/// ```
#[fixture]
fn large_tree() -> BinaryTree {
    BinaryTree::from(
        Node::new(6)
            .with_left(
                Node::new(5)
                    .with_left(Node::new(3).with_left(Node::leaf(2)).with_right(Node::leaf(1)))
                    .with_right(Node::leaf(1)),
            )
            .with_right(Node::new(5).with_right(Node::leaf(1))),
    )
}

// ============================================================
// Depth
// ============================================================

#[rstest]
fn given_empty_tree_when_measuring_depth_then_zero() {
    let tree = BinaryTree::new();
    assert_eq!(tree.min_depth(), 0);
    assert_eq!(tree.max_depth(), 0);
}

#[rstest]
fn given_small_tree_when_measuring_depth_then_both_two(small_tree: BinaryTree) {
    assert_eq!(small_tree.min_depth(), 2);
    assert_eq!(small_tree.max_depth(), 2);
}

#[rstest]
fn given_large_tree_when_measuring_depth_then_shortest_and_longest_paths(large_tree: BinaryTree) {
    assert_eq!(large_tree.min_depth(), 3);
    assert_eq!(large_tree.max_depth(), 4);
}

#[rstest]
fn given_chain_when_measuring_depth_then_counts_every_node() {
    let tree = BinaryTree::from(
        Node::new(1).with_right(Node::new(2).with_right(Node::new(3).with_right(Node::leaf(4)))),
    );
    assert_eq!(tree.min_depth(), 4);
    assert_eq!(tree.max_depth(), 4);
}

#[rstest]
fn given_tree_built_by_attaching_when_measuring_depth_then_sees_new_leaves() {
    let mut tree = BinaryTree::new();
    let root = tree.set_root(1).unwrap();
    let left = tree.attach_left(root, 2).unwrap();
    tree.attach_left(left, 4).unwrap();
    assert_eq!(tree.min_depth(), 3);

    tree.attach_right(root, 3).unwrap();
    assert_eq!(tree.min_depth(), 2);
    assert_eq!(tree.max_depth(), 3);
}

// ============================================================
// Max path sum
// ============================================================

#[rstest]
fn given_empty_tree_when_summing_then_zero() {
    assert_eq!(BinaryTree::new().max_sum(), 0);
}

#[rstest]
fn given_small_tree_when_summing_then_path_bends_at_root(small_tree: BinaryTree) {
    assert_eq!(small_tree.max_sum(), 6);
}

#[rstest]
fn given_large_tree_when_summing_then_best_path_crosses_root(large_tree: BinaryTree) {
    // 2 - 3 - 5 - 6 - 5 - 1
    assert_eq!(large_tree.max_sum(), 22);
}

#[rstest]
#[case(Node::leaf(-4), -4)]
#[case(Node::new(-3).with_left(Node::leaf(-1)).with_right(Node::leaf(-2)), -1)]
#[case(Node::new(-8).with_left(Node::new(-6).with_left(Node::leaf(-7))), -6)]
fn given_all_negative_values_when_summing_then_largest_single_value(
    #[case] root: Node,
    #[case] expected: i64,
) {
    assert_eq!(BinaryTree::from(root).max_sum(), expected);
}

#[rstest]
fn given_negative_root_when_summing_then_path_avoids_root() {
    //      -10
    //      /  \
    //     8    2
    //    / \
    //   3   4
    let tree = BinaryTree::from(
        Node::new(-10)
            .with_left(Node::new(8).with_left(Node::leaf(3)).with_right(Node::leaf(4)))
            .with_right(Node::leaf(2)),
    );
    assert_eq!(tree.max_sum(), 15);
}

// ============================================================
// Next larger
// ============================================================

#[rstest]
fn given_empty_tree_when_looking_for_next_larger_then_none() {
    assert_eq!(BinaryTree::new().next_larger(0), None);
}

#[rstest]
#[case(0, Some(1))]
#[case(1, Some(2))]
#[case(2, Some(3))]
#[case(3, None)]
#[case(4, None)]
#[case(i64::MIN, Some(1))]
fn given_small_tree_when_looking_for_next_larger_then_smallest_above_bound(
    small_tree: BinaryTree,
    #[case] bound: i64,
    #[case] expected: Option<i64>,
) {
    assert_eq!(small_tree.next_larger(bound), expected);
}

#[rstest]
#[case(1, Some(2))]
#[case(2, Some(3))]
#[case(4, Some(5))]
#[case(5, Some(6))]
#[case(6, None)]
fn given_duplicates_when_looking_for_next_larger_then_minimal_qualifying_value(
    large_tree: BinaryTree,
    #[case] bound: i64,
    #[case] expected: Option<i64>,
) {
    assert_eq!(large_tree.next_larger(bound), expected);
}

#[rstest]
fn given_unsorted_values_when_looking_for_next_larger_then_scans_whole_tree() {
    // in-order 9, 1, 5, 2: not ascending
    let tree = BinaryTree::from(
        Node::new(1)
            .with_left(Node::leaf(9))
            .with_right(Node::new(5).with_right(Node::leaf(2))),
    );
    assert_eq!(tree.next_larger(1), Some(2));
    assert_eq!(tree.next_larger(5), Some(9));
}
