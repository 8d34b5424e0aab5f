//! A height balanced Binary Search Tree (an AVL tree). Inserts and removals recurse down to the
//! affected node and, on the way back up, every node on the path checks its balance factor and
//! rotates if one side has become two levels taller than the other. That keeps the height
//! logarithmic in the number of keys, which also bounds the recursion depth.
//!
//! See [the Wikipedia page][wiki] for the terminology used here.
//!
//! [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Rebalancing
//!
//! # Examples
//!
//! ```
//! use search_trees::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for key in 1..=7 {
//!     tree.insert(key).unwrap();
//! }
//!
//! // Ascending inserts still give a perfectly balanced tree.
//! assert_eq!(tree.height(), Some(2));
//!
//! let mut keys = Vec::new();
//! tree.inorder_traverse(|key| keys.push(key));
//! assert_eq!(keys, [1, 2, 3, 4, 5, 6, 7]);
//! ```

use std::fmt;

use crate::compare::{ascending, Comparator, Comparison, Key};
use crate::error::{validate, InvalidKeyError};
use crate::walk::{self, Subtree};

type Link<K> = Option<Box<Node<K>>>;

/// Height of a possibly empty subtree. Empty subtrees are one shorter than a leaf.
fn height<K>(link: &Link<K>) -> isize {
    link.as_ref().map_or(-1, |n| n.height)
}

/// `height(left) - height(right)` bucketed. Only the two `Unbalanced*` buckets trigger a
/// rotation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum BalanceFactor {
    UnbalancedRight,
    SlightlyRight,
    Balanced,
    SlightlyLeft,
    UnbalancedLeft,
}

/// The four ways to restore balance, named after the path from the unbalanced node to its
/// tallest grandchild.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Rotation {
    /// A single right rotation.
    LeftLeft,
    /// A single left rotation.
    RightRight,
    /// Rotate the left child left, then the node right.
    LeftRight,
    /// Rotate the right child right, then the node left.
    RightLeft,
}

#[derive(Clone, Debug)]
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
    /// Edges on the longest path down to a leaf. Leaves have a height of 0.
    height: isize,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height: 0,
        })
    }

    fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    fn balance_factor(&self) -> BalanceFactor {
        match height(&self.left) - height(&self.right) {
            d if d >= 2 => BalanceFactor::UnbalancedLeft,
            1 => BalanceFactor::SlightlyLeft,
            0 => BalanceFactor::Balanced,
            -1 => BalanceFactor::SlightlyRight,
            _ => BalanceFactor::UnbalancedRight,
        }
    }
}

impl<'a, K: Key> Subtree for &'a Node<K> {
    type Key = K;

    fn key(self) -> K {
        self.key
    }

    fn left(self) -> Option<Self> {
        self.left.as_deref()
    }

    fn right(self) -> Option<Self> {
        self.right.as_deref()
    }
}

/// Rotate `node` to the right. This moves the left child up and `node` down. Nothing happens
/// if there is no left child.
///
/// ```text
///       node                pivot
///      /    \              /     \
///   pivot    z   rotate ->  x      node
///   /   \                         /   \
///  x     y                       y     z
/// ```
fn rotate_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.fix_height();

    pivot.right = Some(node);
    pivot.fix_height();
    pivot
}

/// Mirror image of [`rotate_right`].
fn rotate_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.fix_height();

    pivot.left = Some(node);
    pivot.fix_height();
    pivot
}

fn rotate<K: Key>(mut node: Box<Node<K>>, rotation: Rotation) -> Box<Node<K>> {
    log::trace!("{rotation:?} rotation at {:?}", node.key);
    let rotated = match rotation {
        Rotation::LeftLeft => rotate_right(node),
        Rotation::RightRight => rotate_left(node),
        Rotation::LeftRight => {
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
        Rotation::RightLeft => {
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
    };

    if cfg!(debug_assertions) {
        assert!((height(&rotated.left) - height(&rotated.right)).abs() <= 1);
    }
    rotated
}

/// A recursive insert or remove in progress. Remembers whether the tree changed so the caller
/// can keep its length up to date.
struct Edit<K> {
    compare: Comparator<K>,
    changed: bool,
}

impl<K: Key> Edit<K> {
    fn new(compare: Comparator<K>) -> Self {
        Self {
            compare,
            changed: false,
        }
    }

    fn insert(&mut self, link: Link<K>, key: K) -> Box<Node<K>> {
        let Some(mut node) = link else {
            self.changed = true;
            return Node::new_boxed(key);
        };

        match (self.compare)(&key, &node.key) {
            Comparison::Less => node.left = Some(self.insert(node.left.take(), key)),
            Comparison::Equal => return node,
            Comparison::Greater => node.right = Some(self.insert(node.right.take(), key)),
        }

        node.fix_height();
        // The new key lands on the outside of the tall child (a single rotation fixes it) or on
        // the inside (it needs a double rotation).
        match node.balance_factor() {
            BalanceFactor::UnbalancedLeft => {
                let inside = node
                    .left
                    .as_ref()
                    .map_or(false, |left| (self.compare)(&key, &left.key) == Comparison::Greater);
                if inside {
                    rotate(node, Rotation::LeftRight)
                } else {
                    rotate(node, Rotation::LeftLeft)
                }
            }
            BalanceFactor::UnbalancedRight => {
                let inside = node
                    .right
                    .as_ref()
                    .map_or(false, |right| (self.compare)(&key, &right.key) == Comparison::Less);
                if inside {
                    rotate(node, Rotation::RightLeft)
                } else {
                    rotate(node, Rotation::RightRight)
                }
            }
            _ => node,
        }
    }

    fn remove(&mut self, link: Link<K>, key: K) -> Link<K> {
        let mut node = link?;

        match (self.compare)(&key, &node.key) {
            Comparison::Less => node.left = self.remove(node.left.take(), key),
            Comparison::Greater => node.right = self.remove(node.right.take(), key),
            Comparison::Equal => {
                self.changed = true;
                match (node.left.take(), node.right.take()) {
                    (None, None) => return None,
                    // A lone child is already a balanced subtree.
                    (Some(left), None) => return Some(left),
                    (None, Some(right)) => return Some(right),
                    (Some(left), Some(right)) => {
                        let successor = walk::leftmost(&*right).key;
                        log::trace!("promoting successor {successor:?} over {:?}", node.key);

                        node.key = successor;
                        node.left = Some(left);
                        node.right = self.remove(Some(right), successor);
                    }
                }
            }
        }

        node.fix_height();
        // Which key was removed doesn't say anything about the shape of the tall side, so look
        // at the tall child's own balance instead.
        let rebalanced = match node.balance_factor() {
            BalanceFactor::UnbalancedLeft => {
                match node.left.as_deref().map(Node::balance_factor) {
                    Some(BalanceFactor::SlightlyRight) => rotate(node, Rotation::LeftRight),
                    _ => rotate(node, Rotation::LeftLeft),
                }
            }
            BalanceFactor::UnbalancedRight => {
                match node.right.as_deref().map(Node::balance_factor) {
                    Some(BalanceFactor::SlightlyLeft) => rotate(node, Rotation::RightLeft),
                    _ => rotate(node, Rotation::RightRight),
                }
            }
            _ => node,
        };
        Some(rebalanced)
    }
}

/// A self-balancing Binary Search Tree keeping every node's subtrees within one level of each
/// other's height.
#[derive(Clone)]
pub struct AvlTree<K> {
    root: Link<K>,
    compare: Comparator<K>,
    len: usize,
}

impl<K: Key> fmt::Debug for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = f.debug_list();
        walk::in_order(self.root.as_deref(), |n| {
            keys.entry(&n.key);
        });
        keys.finish()
    }
}

impl<K: Key> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key> AvlTree<K> {
    /// Generates a new, empty `AvlTree` ordering keys from smallest to largest.
    pub fn new() -> Self {
        Self::with_comparator(ascending)
    }

    /// Generates a new, empty `AvlTree` that orders its keys with `compare`.
    pub fn with_comparator(compare: Comparator<K>) -> Self {
        Self {
            root: None,
            compare,
            len: 0,
        }
    }

    /// Inserts `key` and rebalances the path back up to the root. Returns `Ok(false)` without
    /// changing anything if the key is already present.
    ///
    /// # Errors
    ///
    /// [`InvalidKeyError`] if `key` is not a number (i.e. `NaN`).
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.insert(10), Ok(true));
    /// assert_eq!(tree.insert(10), Ok(false));
    ///
    /// let mut floats = AvlTree::new();
    /// assert!(floats.insert(f64::NAN).is_err());
    /// assert!(floats.is_empty());
    /// ```
    pub fn insert(&mut self, key: K) -> Result<bool, InvalidKeyError> {
        let key = validate(key)?;
        let mut edit = Edit::new(self.compare);
        self.root = Some(edit.insert(self.root.take(), key));

        if edit.changed {
            self.len += 1;
        }
        Ok(edit.changed)
    }

    /// Whether `key` is in the tree.
    pub fn search(&self, key: K) -> bool {
        walk::find(self.root.as_deref(), key, self.compare).is_some()
    }

    /// Removes `key` and rebalances the path back up to the root. Returns whether the key was
    /// there.
    pub fn remove(&mut self, key: K) -> bool {
        let mut edit = Edit::new(self.compare);
        self.root = edit.remove(self.root.take(), key);

        if edit.changed {
            self.len -= 1;
        }
        edit.changed
    }

    /// The smallest key, or `None` if the tree is empty.
    pub fn min(&self) -> Option<K> {
        self.root.as_deref().map(|root| walk::leftmost(root).key)
    }

    /// The largest key, or `None` if the tree is empty.
    pub fn max(&self) -> Option<K> {
        self.root.as_deref().map(|root| walk::rightmost(root).key)
    }

    /// Calls `visit` with every key in order.
    pub fn inorder_traverse(&self, mut visit: impl FnMut(K)) {
        walk::in_order(self.root.as_deref(), |n| visit(n.key));
    }

    /// Calls `visit` with every key, each node before its subtrees.
    pub fn preorder_traverse(&self, mut visit: impl FnMut(K)) {
        walk::pre_order(self.root.as_deref(), |n| visit(n.key));
    }

    /// Calls `visit` with every key, each node after its subtrees.
    pub fn postorder_traverse(&self, mut visit: impl FnMut(K)) {
        walk::post_order(self.root.as_deref(), |n| visit(n.key));
    }

    /// Edges on the longest path from the root down. `None` when empty.
    pub fn height(&self) -> Option<usize> {
        self.root.as_ref().map(|root| root.height as usize)
    }

    /// Number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no keys in the tree.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}

/// Recomputes every height from scratch, checking the cached ones and the AVL invariant.
/// Returns the height of the subtree.
#[cfg(test)]
fn assert_avl<K: Key>(link: &Link<K>) -> isize {
    let Some(node) = link else {
        return -1;
    };
    let left = assert_avl(&node.left);
    let right = assert_avl(&node.right);
    assert_eq!(node.height, left.max(right) + 1, "stale height at {:?}", node.key);
    assert!((left - right).abs() <= 1, "unbalanced at {:?}", node.key);
    node.height
}
