use pretty_assertions::assert_eq;
use simplelog::{Config, LevelFilter, TestLogger};

use search_trees::{AvlTree, BinarySearchTree, Color, OrderedTree, RedBlackTree};

use crate::op::{inorder, preorder};

/// Routes the trees' trace output into the test harness so it shows up on failures.
fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

fn tree_of<T: OrderedTree<i32>>(mut tree: T, keys: &[i32]) -> T {
    for &key in keys {
        tree.insert(key).unwrap();
    }
    tree
}

#[test]
fn ascending_bst_is_a_chain() {
    let tree = tree_of(BinarySearchTree::new(), &[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(tree.height(), Some(6));
    // A pre-order walk of a chain that only ever goes right is just the keys in order.
    assert_eq!(preorder(&tree), [1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn ascending_avl_is_balanced() {
    init_logger();
    let tree = tree_of(AvlTree::new(), &[1, 2, 3, 4, 5, 6, 7]);
    assert!(tree.height().unwrap() <= 3);
    assert_eq!(inorder(&tree), [1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn avl_single_left_rotation() {
    init_logger();
    let tree = tree_of(AvlTree::new(), &[10, 20, 30]);
    assert_eq!(preorder(&tree), [20, 10, 30]);
    assert_eq!(tree.height(), Some(1));
}

#[test]
fn red_black_rotation_and_colors() {
    init_logger();
    let tree = tree_of(RedBlackTree::new(), &[10, 20, 30]);
    assert_eq!(preorder(&tree), [20, 10, 30]);
    assert_eq!(tree.color_of(20), Some(Color::Black));
    assert_eq!(tree.color_of(10), Some(Color::Red));
    assert_eq!(tree.color_of(30), Some(Color::Red));
}

fn remove_then_search<T: OrderedTree<i32>>(tree: T) {
    let mut tree = tree_of(tree, &[5, 3, 8]);
    assert!(tree.remove(3));
    assert!(!tree.search(3));
    assert_eq!(inorder(&tree), [5, 8]);
}

#[test]
fn remove_then_search_every_tree() {
    remove_then_search(BinarySearchTree::new());
    remove_then_search(AvlTree::new());
    remove_then_search(RedBlackTree::new());
}

fn rejects_nan<T: OrderedTree<f64>>(mut tree: T) {
    tree.insert(1.0).unwrap();
    tree.insert(-1.0).unwrap();
    let before = preorder(&tree);

    let err = tree.insert(f64::NAN).unwrap_err();
    assert_eq!(err.to_string(), "`NaN` is not a valid numeric key");

    assert_eq!(preorder(&tree), before);
    assert_eq!(tree.len(), 2);
}

#[test]
fn nan_is_rejected_by_every_tree() {
    init_logger();
    rejects_nan(BinarySearchTree::new());
    rejects_nan(AvlTree::new());
    rejects_nan(RedBlackTree::new());
}

fn min_max_on_empty<T: OrderedTree<u32>>(tree: T) {
    assert!(tree.is_empty());
    assert_eq!(tree.min(), None);
    assert_eq!(tree.max(), None);
    assert_eq!(tree.height(), None);

    let mut visits = 0;
    tree.inorder_traverse(|_| visits += 1);
    tree.preorder_traverse(|_| visits += 1);
    tree.postorder_traverse(|_| visits += 1);
    assert_eq!(visits, 0);
}

#[test]
fn empty_trees_have_no_extremes() {
    min_max_on_empty(BinarySearchTree::new());
    min_max_on_empty(AvlTree::new());
    min_max_on_empty(RedBlackTree::new());
}

fn postorder_visits_children_first<T: OrderedTree<i32>>(tree: T) {
    let tree = tree_of(tree, &[2, 1, 3]);
    let mut keys = Vec::new();
    tree.postorder_traverse(|key| keys.push(key));
    assert_eq!(keys, [1, 3, 2]);
}

#[test]
fn postorder_on_every_tree() {
    postorder_visits_children_first(BinarySearchTree::new());
    postorder_visits_children_first(AvlTree::new());
    postorder_visits_children_first(RedBlackTree::new());
}
