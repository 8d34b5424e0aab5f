use crate::avl::AvlTree;
use crate::bst::BinarySearchTree;
use crate::compare::Key;
use crate::error::InvalidKeyError;
use crate::rbtree::RedBlackTree;

/// What every tree in this crate can do. Handy for code that doesn't care how (or whether) a
/// tree balances itself.
///
/// # Examples
///
/// ```
/// use search_trees::{AvlTree, BinarySearchTree, OrderedTree, RedBlackTree};
///
/// fn sorted<T: OrderedTree<i32>>(mut tree: T, keys: &[i32]) -> Vec<i32> {
///     for &key in keys {
///         tree.insert(key).unwrap();
///     }
///     let mut out = Vec::new();
///     tree.inorder_traverse(|key| out.push(key));
///     out
/// }
///
/// let keys = [3, 1, 2, 3];
/// assert_eq!(sorted(BinarySearchTree::new(), &keys), [1, 2, 3]);
/// assert_eq!(sorted(AvlTree::new(), &keys), [1, 2, 3]);
/// assert_eq!(sorted(RedBlackTree::new(), &keys), [1, 2, 3]);
/// ```
pub trait OrderedTree<K: Key> {
    /// Adds `key`, returning `Ok(false)` if it was already present.
    ///
    /// # Errors
    ///
    /// [`InvalidKeyError`] if `key` is not a number. The tree is left untouched.
    fn insert(&mut self, key: K) -> Result<bool, InvalidKeyError>;

    /// Whether `key` is present.
    fn search(&self, key: K) -> bool;

    /// Removes `key`, returning whether it was present.
    fn remove(&mut self, key: K) -> bool;

    /// The smallest key, `None` when empty.
    fn min(&self) -> Option<K>;

    /// The largest key, `None` when empty.
    fn max(&self) -> Option<K>;

    /// Visits every key: left subtree, node, right subtree.
    fn inorder_traverse<F: FnMut(K)>(&self, visit: F);

    /// Visits every key: node, left subtree, right subtree.
    fn preorder_traverse<F: FnMut(K)>(&self, visit: F);

    /// Visits every key: left subtree, right subtree, node.
    fn postorder_traverse<F: FnMut(K)>(&self, visit: F);

    /// Edges on the longest root to leaf path, `None` when empty.
    fn height(&self) -> Option<usize>;

    /// Number of keys.
    fn len(&self) -> usize;

    /// Whether there are no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! impl_ordered_tree {
    ($($tree:ident),*) => {
        $(
            impl<K: Key> OrderedTree<K> for $tree<K> {
                fn insert(&mut self, key: K) -> Result<bool, InvalidKeyError> {
                    $tree::insert(self, key)
                }

                fn search(&self, key: K) -> bool {
                    $tree::search(self, key)
                }

                fn remove(&mut self, key: K) -> bool {
                    $tree::remove(self, key)
                }

                fn min(&self) -> Option<K> {
                    $tree::min(self)
                }

                fn max(&self) -> Option<K> {
                    $tree::max(self)
                }

                fn inorder_traverse<F: FnMut(K)>(&self, visit: F) {
                    $tree::inorder_traverse(self, visit)
                }

                fn preorder_traverse<F: FnMut(K)>(&self, visit: F) {
                    $tree::preorder_traverse(self, visit)
                }

                fn postorder_traverse<F: FnMut(K)>(&self, visit: F) {
                    $tree::postorder_traverse(self, visit)
                }

                fn height(&self) -> Option<usize> {
                    $tree::height(self)
                }

                fn len(&self) -> usize {
                    $tree::len(self)
                }

                fn is_empty(&self) -> bool {
                    $tree::is_empty(self)
                }
            }
        )*
    };
}

impl_ordered_tree!(BinarySearchTree, AvlTree, RedBlackTree);
