//! An unbalanced Binary Search Tree. Nothing is done to keep its height down so inserting keys in
//! ascending order builds a tree shaped like a linked list. Every operation here is a loop over
//! the owned links rather than a recursive call for that reason.
//!
//! # Examples
//!
//! ```
//! use search_trees::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(1));
//!
//! assert_eq!(tree.insert(1), Ok(true));
//! assert!(tree.search(1));
//!
//! // Inserting the same key again does nothing.
//! assert_eq!(tree.insert(1), Ok(false));
//! assert_eq!(tree.len(), 1);
//!
//! assert!(tree.remove(1));
//! assert!(!tree.search(1));
//! ```

use std::fmt;

use crate::compare::{ascending, Comparator, Comparison, Key};
use crate::error::{validate, InvalidKeyError};
use crate::node::{Link, Node};
use crate::walk;

/// A Binary Search Tree without any balancing.
pub struct BinarySearchTree<K> {
    root: Link<K>,
    compare: Comparator<K>,
    len: usize,
}

impl<K: Key> Default for BinarySearchTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for BinarySearchTree<K> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K: Key> Clone for BinarySearchTree<K> {
    fn clone(&self) -> Self {
        // Children are finished before their parent in post-order, so each node can collect its
        // already cloned subtrees off the top of the stack.
        let mut built: Vec<Box<Node<K>>> = Vec::new();
        walk::post_order(self.root.as_deref(), |n| {
            let right = if n.right.is_some() { built.pop() } else { None };
            let left = if n.left.is_some() { built.pop() } else { None };
            built.push(Box::new(Node {
                key: n.key,
                left,
                right,
            }));
        });

        Self {
            root: built.pop(),
            compare: self.compare,
            len: self.len,
        }
    }
}

impl<K: Key> fmt::Debug for BinarySearchTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = f.debug_list();
        walk::in_order(self.root.as_deref(), |n| {
            keys.entry(&n.key);
        });
        keys.finish()
    }
}

impl<K: Key> BinarySearchTree<K> {
    /// Generates a new, empty `BinarySearchTree` ordering keys from smallest to largest.
    pub fn new() -> Self {
        Self::with_comparator(ascending)
    }

    /// Generates a new, empty `BinarySearchTree` that orders its keys with `compare`.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::{compare, BinarySearchTree};
    ///
    /// let mut tree = BinarySearchTree::with_comparator(compare::descending);
    /// for key in [2, 3, 1] {
    ///     tree.insert(key).unwrap();
    /// }
    ///
    /// let mut keys = Vec::new();
    /// tree.inorder_traverse(|key| keys.push(key));
    /// assert_eq!(keys, [3, 2, 1]);
    /// ```
    pub fn with_comparator(compare: Comparator<K>) -> Self {
        Self {
            root: None,
            compare,
            len: 0,
        }
    }

    /// Inserts `key` as a new leaf. Returns `Ok(false)` without changing anything if the key
    /// is already present.
    ///
    /// # Errors
    ///
    /// [`InvalidKeyError`] if `key` is not a number (i.e. `NaN`).
    pub fn insert(&mut self, key: K) -> Result<bool, InvalidKeyError> {
        let key = validate(key)?;
        let compare = self.compare;

        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match compare(&key, &node.key) {
                Comparison::Less => &mut node.left,
                Comparison::Equal => return Ok(false),
                Comparison::Greater => &mut node.right,
            };
        }
        *slot = Some(Node::new_boxed(key));

        self.len += 1;
        Ok(true)
    }

    /// Whether `key` is in the tree.
    pub fn search(&self, key: K) -> bool {
        walk::find(self.root.as_deref(), key, self.compare).is_some()
    }

    /// Removes `key` from the tree, returning whether it was there.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// for key in [5, 3, 8] {
    ///     tree.insert(key).unwrap();
    /// }
    ///
    /// assert!(tree.remove(3));
    /// assert!(!tree.remove(3));
    /// assert!(!tree.search(3));
    /// ```
    pub fn remove(&mut self, key: K) -> bool {
        let removed = remove_from(&mut self.root, key, self.compare);
        if removed {
            self.len -= 1;
        }
        removed
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
        walk::height(self.root.as_deref())
    }

    /// Number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no keys in the tree.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl<K> BinarySearchTree<K> {
    /// Removes every key.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }
}

/// Walks down from `slot` to the node holding `key` and unlinks it.
fn remove_from<K: Key>(mut slot: &mut Link<K>, key: K, compare: Comparator<K>) -> bool {
    loop {
        let ordering = match slot.as_deref() {
            Some(node) => compare(&key, &node.key),
            None => return false,
        };
        if ordering == Comparison::Equal {
            break;
        }
        let Some(node) = slot else {
            return false;
        };
        slot = match ordering {
            Comparison::Less => &mut node.left,
            _ => &mut node.right,
        };
    }

    unlink(slot, compare);
    true
}

/// Removes the node in `slot` and puts whatever should take its place back into `slot`.
fn unlink<K: Key>(slot: &mut Link<K>, compare: Comparator<K>) {
    let Some(mut node) = slot.take() else {
        return;
    };

    *slot = match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (Some(left), None) => Some(left),
        (None, Some(right)) => Some(right),
        (Some(left), Some(right)) => {
            // Promote the in-order successor's key. The successor has no left child so removing
            // it from the right subtree only ever detaches it or splices up its right child.
            let successor = walk::leftmost(&*right).key;
            log::trace!("promoting successor {successor:?} over {:?}", node.key);

            node.key = successor;
            node.left = Some(left);
            node.right = Some(right);
            remove_from(&mut node.right, successor, compare);
            Some(node)
        }
    };
}
