use quickcheck::{Arbitrary, Gen};

use search_trees::{Key, OrderedTree};
use std::collections::BTreeSet;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K> {
    /// Insert the K into the tree
    Insert(K),
    /// Remove the K from the tree
    Remove(K),
    /// Compare an in-order traversal with the model
    Traverse,
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Remove(K::arbitrary(g)),
            2 => Op::Traverse,
            _ => unreachable!(),
        }
    }
}

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
pub fn do_ops<K, T>(ops: &[Op<K>], tree: &mut T, set: &mut BTreeSet<K>)
where
    K: Key + Ord,
    T: OrderedTree<K>,
{
    for op in ops {
        match *op {
            Op::Insert(k) => assert_eq!(tree.insert(k), Ok(set.insert(k))),
            Op::Remove(k) => assert_eq!(tree.remove(k), set.remove(&k)),
            Op::Traverse => assert_eq!(inorder(&*tree), set.iter().copied().collect::<Vec<_>>()),
        }
    }
}

pub fn inorder<K: Key, T: OrderedTree<K>>(tree: &T) -> Vec<K> {
    let mut keys = Vec::new();
    tree.inorder_traverse(|key| keys.push(key));
    keys
}

pub fn preorder<K: Key, T: OrderedTree<K>>(tree: &T) -> Vec<K> {
    let mut keys = Vec::new();
    tree.preorder_traverse(|key| keys.push(key));
    keys
}
