use std::collections::{BTreeSet, HashSet};

use search_trees::{AvlTree, BinarySearchTree, OrderedTree, RedBlackTree};

use crate::op::{do_ops, inorder, preorder, Op};

fn fuzz_multiple_operations<T: OrderedTree<i8>>(mut tree: T, ops: Vec<Op<i8>>) -> bool {
    let mut set = BTreeSet::new();
    do_ops(&ops, &mut tree, &mut set);

    tree.len() == set.len()
        && (i8::MIN..=i8::MAX).all(|k| tree.search(k) == set.contains(&k))
        && tree.min() == set.first().copied()
        && tree.max() == set.last().copied()
}

fn inorder_is_sorted_and_distinct<T: OrderedTree<i32>>(mut tree: T, xs: Vec<i32>) -> bool {
    for &x in &xs {
        tree.insert(x).unwrap();
    }
    let expected: Vec<i32> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
    inorder(&tree) == expected
}

fn contains_not<T: OrderedTree<i8>>(mut tree: T, xs: Vec<i8>, nots: Vec<i8>) -> bool {
    for &x in &xs {
        tree.insert(x).unwrap();
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|&x| !tree.search(x))
}

fn removing_missing_keys_changes_nothing<T: OrderedTree<i16>>(
    mut tree: T,
    xs: Vec<i16>,
    missing: Vec<i16>,
) -> bool {
    for &x in &xs {
        tree.insert(x).unwrap();
    }
    let before = preorder(&tree);
    for k in missing {
        if !xs.contains(&k) {
            assert!(!tree.remove(k));
        }
    }
    preorder(&tree) == before
}

fn removing_everything_empties<T: OrderedTree<i16>>(mut tree: T, xs: Vec<i16>) -> bool {
    for &x in &xs {
        tree.insert(x).unwrap();
    }
    for &x in &xs {
        tree.remove(x);
    }
    tree.is_empty() && tree.height().is_none() && xs.iter().all(|&x| !tree.search(x))
}

fn balanced_height<T: OrderedTree<u16>>(mut tree: T, xs: Vec<u16>) -> bool {
    for &x in &xs {
        tree.insert(x).unwrap();
    }
    // Both balanced trees are at most about twice as tall as a perfect tree.
    let bound = 2.0 * ((tree.len() + 1) as f64).log2();
    tree.height().map_or(true, |h| (h as f64) < bound)
}

macro_rules! properties {
    ($($name:ident => $tree:expr),*) => {
        $(
            mod $name {
                use super::*;

                quickcheck::quickcheck! {
                    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
                        fuzz_multiple_operations($tree, ops)
                    }

                    fn inorder_sorted(xs: Vec<i32>) -> bool {
                        inorder_is_sorted_and_distinct($tree, xs)
                    }

                    fn contains_not_inserted(xs: Vec<i8>, nots: Vec<i8>) -> bool {
                        contains_not($tree, xs, nots)
                    }

                    fn idempotent_removal(xs: Vec<i16>, missing: Vec<i16>) -> bool {
                        removing_missing_keys_changes_nothing($tree, xs, missing)
                    }

                    fn empties(xs: Vec<i16>) -> bool {
                        removing_everything_empties($tree, xs)
                    }
                }
            }
        )*
    };
}

properties!(
    bst => BinarySearchTree::new(),
    avl => AvlTree::new(),
    red_black => RedBlackTree::new()
);

quickcheck::quickcheck! {
    fn avl_height_is_logarithmic(xs: Vec<u16>) -> bool {
        balanced_height(AvlTree::new(), xs)
    }

    fn red_black_height_is_logarithmic(xs: Vec<u16>) -> bool {
        balanced_height(RedBlackTree::new(), xs)
    }
}
