//! A Red-Black tree. Every node is colored red or black and the tree keeps two rules: a red
//! node never has a red child, and every path from a node down to a missing child passes the
//! same number of black nodes. Together they keep the longest path at most twice the shortest.
//!
//! Nodes live in an arena and refer to each other by handle. `left` and `right` are the owning
//! direction while `parent` is only used to walk back up during fix-ups, so there's no
//! reference cycle to manage.
//!
//! # Examples
//!
//! ```
//! use search_trees::{Color, RedBlackTree};
//!
//! let mut tree = RedBlackTree::new();
//! for key in [10, 20, 30] {
//!     tree.insert(key).unwrap();
//! }
//!
//! let mut keys = Vec::new();
//! tree.preorder_traverse(|key| keys.push(key));
//! assert_eq!(keys, [20, 10, 30]);
//!
//! assert_eq!(tree.color_of(20), Some(Color::Black));
//! assert_eq!(tree.color_of(10), Some(Color::Red));
//! assert_eq!(tree.color_of(30), Some(Color::Red));
//! ```

mod arena;
mod node;

use std::fmt;

use self::arena::{Arena, Handle};
pub use self::node::Color;
use self::node::{ColoredNode, NodeRef};
use crate::compare::{ascending, Comparator, Comparison, Key};
use crate::error::{validate, InvalidKeyError};
use crate::walk;

/// A self-balancing Binary Search Tree that keeps its balance through node colors.
#[derive(Clone)]
pub struct RedBlackTree<K> {
    nodes: Arena<ColoredNode<K>>,
    root: Option<Handle>,
    compare: Comparator<K>,
}

impl<K: Key> Default for RedBlackTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key> fmt::Debug for RedBlackTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = f.debug_list();
        walk::in_order(self.root_ref(), |n| {
            let node = n.node();
            keys.entry(&(node.key, node.color));
        });
        keys.finish()
    }
}

impl<K: Key> RedBlackTree<K> {
    /// Generates a new, empty `RedBlackTree` ordering keys from smallest to largest.
    pub fn new() -> Self {
        Self::with_comparator(ascending)
    }

    /// Generates a new, empty `RedBlackTree` that orders its keys with `compare`.
    pub fn with_comparator(compare: Comparator<K>) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            compare,
        }
    }

    /// Inserts `key` as a red leaf and then restores the coloring rules. Returns `Ok(false)`
    /// without changing anything if the key is already present.
    ///
    /// # Errors
    ///
    /// [`InvalidKeyError`] if `key` is not a number (i.e. `NaN`).
    pub fn insert(&mut self, key: K) -> Result<bool, InvalidKeyError> {
        let key = validate(key)?;

        let Some(mut current) = self.root else {
            self.root = Some(self.nodes.alloc(ColoredNode::new(key, Color::Black, None)));
            return Ok(true);
        };

        let inserted = loop {
            let (ordering, left, right) = {
                let node = &self.nodes[current];
                ((self.compare)(&key, &node.key), node.left, node.right)
            };
            match (ordering, left, right) {
                (Comparison::Equal, _, _) => return Ok(false),
                (Comparison::Less, Some(left), _) => current = left,
                (Comparison::Greater, _, Some(right)) => current = right,
                (Comparison::Less, None, _) => {
                    let leaf = self.new_leaf(key, current);
                    self.nodes[current].left = Some(leaf);
                    break leaf;
                }
                (Comparison::Greater, _, None) => {
                    let leaf = self.new_leaf(key, current);
                    self.nodes[current].right = Some(leaf);
                    break leaf;
                }
            }
        };

        self.fix_after_insert(inserted);
        Ok(true)
    }

    /// Whether `key` is in the tree.
    pub fn search(&self, key: K) -> bool {
        self.find(key).is_some()
    }

    /// Removes `key` and restores the coloring rules. Returns whether the key was there.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// for key in 1..=10 {
    ///     tree.insert(key).unwrap();
    /// }
    ///
    /// assert!(tree.remove(4));
    /// assert!(!tree.remove(4));
    /// assert_eq!(tree.len(), 9);
    /// ```
    pub fn remove(&mut self, key: K) -> bool {
        let Some(target) = self.find(key) else {
            return false;
        };
        let ColoredNode {
            left, right, color, parent, ..
        } = self.nodes[target];

        // `replacement` takes the place of whichever node is actually unlinked. If that node was
        // black, every path through `replacement` is now one black node short.
        let (removed_color, replacement, replacement_parent) = match (left, right) {
            (None, _) => {
                self.transplant(target, right);
                (color, right, parent)
            }
            (Some(_), None) => {
                self.transplant(target, left);
                (color, left, parent)
            }
            (Some(left), Some(right)) => {
                let successor = walk::leftmost(self.node_ref(right)).handle;
                let ColoredNode {
                    color: successor_color,
                    right: successor_right,
                    parent: successor_parent,
                    ..
                } = self.nodes[successor];

                let replacement_parent = if successor == right {
                    successor
                } else {
                    self.transplant(successor, successor_right);
                    self.nodes[successor].right = Some(right);
                    self.nodes[right].parent = Some(successor);
                    successor_parent.unwrap_or(right)
                };

                self.transplant(target, Some(successor));
                self.nodes[successor].left = Some(left);
                self.nodes[left].parent = Some(successor);
                self.nodes[successor].color = color;

                (successor_color, successor_right, Some(replacement_parent))
            }
        };

        self.nodes.take(target);
        if removed_color == Color::Black {
            self.fix_after_remove(replacement, replacement_parent);
        }
        true
    }

    /// The smallest key, or `None` if the tree is empty.
    pub fn min(&self) -> Option<K> {
        self.root_ref().map(|root| walk::leftmost(root).node().key)
    }

    /// The largest key, or `None` if the tree is empty.
    pub fn max(&self) -> Option<K> {
        self.root_ref().map(|root| walk::rightmost(root).node().key)
    }

    /// Calls `visit` with every key in order.
    pub fn inorder_traverse(&self, mut visit: impl FnMut(K)) {
        walk::in_order(self.root_ref(), |n| visit(n.node().key));
    }

    /// Calls `visit` with every key, each node before its subtrees.
    pub fn preorder_traverse(&self, mut visit: impl FnMut(K)) {
        walk::pre_order(self.root_ref(), |n| visit(n.node().key));
    }

    /// Calls `visit` with every key, each node after its subtrees.
    pub fn postorder_traverse(&self, mut visit: impl FnMut(K)) {
        walk::post_order(self.root_ref(), |n| visit(n.node().key));
    }

    /// Edges on the longest path from the root down. `None` when empty.
    pub fn height(&self) -> Option<usize> {
        walk::height(self.root_ref())
    }

    /// Number of keys in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether there are no keys in the tree.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// The color of the node holding `key`, if there is one.
    pub fn color_of(&self, key: K) -> Option<Color> {
        self.find(key).map(|handle| self.nodes[handle].color)
    }

    fn find(&self, key: K) -> Option<Handle> {
        walk::find(self.root_ref(), key, self.compare).map(|n| n.handle)
    }

    fn new_leaf(&mut self, key: K, parent: Handle) -> Handle {
        self.nodes
            .alloc(ColoredNode::new(key, Color::Red, Some(parent)))
    }
}

impl<K> RedBlackTree<K> {
    fn root_ref(&self) -> Option<NodeRef<'_, K>> {
        self.root.map(|root| self.node_ref(root))
    }

    fn node_ref(&self, handle: Handle) -> NodeRef<'_, K> {
        NodeRef {
            nodes: &self.nodes,
            handle,
        }
    }

    /// Missing nodes are black.
    fn color(&self, handle: Option<Handle>) -> Color {
        handle.map_or(Color::Black, |handle| self.nodes[handle].color)
    }

    fn set_color(&mut self, handle: Option<Handle>, color: Color) {
        if let Some(handle) = handle {
            self.nodes[handle].color = color;
        }
    }

    /// Points whichever link referred to `old` (a child link of `parent`, or the root when
    /// there is no parent) at `new` instead.
    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let parent = &mut self.nodes[parent];
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    parent.right = new;
                }
            }
        }
    }

    /// Puts the subtree `new` where `old` was, fixing up the parent link in both directions.
    fn transplant(&mut self, old: Handle, new: Option<Handle>) {
        let parent = self.nodes[old].parent;
        self.replace_child(parent, old, new);
        if let Some(new) = new {
            self.nodes[new].parent = parent;
        }
    }

    /// Rotate `node` to the right, moving its left child up into its place. Nothing happens if
    /// there is no left child.
    ///
    /// ```text
    ///    Option<parent>            Option<parent>
    ///      /                         /
    ///    node                      pivot
    ///    /  \                      /   \
    /// pivot  z      rotate ->     x    node
    ///  / \                             /  \
    /// x   y                           y    z
    /// ```
    fn rotate_right(&mut self, node: Handle) {
        let Some(pivot) = self.nodes[node].left else {
            return;
        };

        let inner = self.nodes[pivot].right;
        self.nodes[node].left = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(node);
        }

        let parent = self.nodes[node].parent;
        self.nodes[pivot].parent = parent;
        self.replace_child(parent, node, Some(pivot));

        self.nodes[pivot].right = Some(node);
        self.nodes[node].parent = Some(pivot);
    }

    /// Mirror image of [`Self::rotate_right`].
    fn rotate_left(&mut self, node: Handle) {
        let Some(pivot) = self.nodes[node].right else {
            return;
        };

        let inner = self.nodes[pivot].left;
        self.nodes[node].right = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(node);
        }

        let parent = self.nodes[node].parent;
        self.nodes[pivot].parent = parent;
        self.replace_child(parent, node, Some(pivot));

        self.nodes[pivot].left = Some(node);
        self.nodes[node].parent = Some(pivot);
    }

    /// Restores the coloring rules after `node` was attached as a red leaf. The only rule that
    /// can be broken is a red node with a red parent, and it's pushed up the tree until it's
    /// resolved or reaches the root.
    fn fix_after_insert(&mut self, mut node: Handle) {
        while let Some(mut parent) = self.nodes[node].parent {
            if self.nodes[parent].color == Color::Black || self.nodes[node].color == Color::Black {
                break;
            }
            // The root is black so a red parent always has a parent of its own.
            let Some(grand_parent) = self.nodes[parent].parent else {
                break;
            };

            if self.nodes[grand_parent].left == Some(parent) {
                let uncle = self.nodes[grand_parent].right;
                if self.color(uncle) == Color::Red {
                    log::trace!("recoloring below {:?}", grand_parent);
                    self.nodes[grand_parent].color = Color::Red;
                    self.nodes[parent].color = Color::Black;
                    self.set_color(uncle, Color::Black);
                    node = grand_parent;
                } else {
                    if self.nodes[parent].right == Some(node) {
                        log::trace!("rotating {:?} left to line up with its parent", parent);
                        self.rotate_left(parent);
                        std::mem::swap(&mut node, &mut parent);
                    }
                    log::trace!("rotating {:?} right", grand_parent);
                    self.rotate_right(grand_parent);
                    self.nodes[parent].color = Color::Black;
                    self.nodes[grand_parent].color = Color::Red;
                    node = parent;
                }
            } else {
                let uncle = self.nodes[grand_parent].left;
                if self.color(uncle) == Color::Red {
                    log::trace!("recoloring below {:?}", grand_parent);
                    self.nodes[grand_parent].color = Color::Red;
                    self.nodes[parent].color = Color::Black;
                    self.set_color(uncle, Color::Black);
                    node = grand_parent;
                } else {
                    if self.nodes[parent].left == Some(node) {
                        log::trace!("rotating {:?} right to line up with its parent", parent);
                        self.rotate_right(parent);
                        std::mem::swap(&mut node, &mut parent);
                    }
                    log::trace!("rotating {:?} left", grand_parent);
                    self.rotate_left(grand_parent);
                    self.nodes[parent].color = Color::Black;
                    self.nodes[grand_parent].color = Color::Red;
                    node = parent;
                }
            }
        }

        // Recoloring may have turned the root red and it has no parent to push that onto.
        let root = self.root;
        self.set_color(root, Color::Black);
    }

    /// Restores the coloring rules after a black node was unlinked. `node` (possibly missing)
    /// sits where it was and every path through `node` is one black node short. `parent` is
    /// needed because a missing node can't say where it is.
    fn fix_after_remove(&mut self, mut node: Option<Handle>, mut parent: Option<Handle>) {
        while node != self.root && self.color(node) == Color::Black {
            let Some(p) = parent else {
                break;
            };

            if self.nodes[p].left == node {
                let mut sibling = self.nodes[p].right;
                if self.color(sibling) == Color::Red {
                    self.set_color(sibling, Color::Black);
                    self.nodes[p].color = Color::Red;
                    self.rotate_left(p);
                    sibling = self.nodes[p].right;
                }
                // The short side is at least one black node deep on the other side, so a
                // sibling always exists. Move up if it somehow doesn't.
                let Some(s) = sibling else {
                    node = Some(p);
                    parent = self.nodes[p].parent;
                    continue;
                };

                let (near, far) = (self.nodes[s].left, self.nodes[s].right);
                if self.color(near) == Color::Black && self.color(far) == Color::Black {
                    self.nodes[s].color = Color::Red;
                    node = Some(p);
                    parent = self.nodes[p].parent;
                } else {
                    let mut s = s;
                    if self.color(far) == Color::Black {
                        self.set_color(near, Color::Black);
                        self.nodes[s].color = Color::Red;
                        self.rotate_right(s);
                        s = match self.nodes[p].right {
                            Some(s) => s,
                            None => break,
                        };
                    }
                    self.nodes[s].color = self.nodes[p].color;
                    self.nodes[p].color = Color::Black;
                    let far = self.nodes[s].right;
                    self.set_color(far, Color::Black);
                    self.rotate_left(p);
                    node = self.root;
                    parent = None;
                }
            } else {
                let mut sibling = self.nodes[p].left;
                if self.color(sibling) == Color::Red {
                    self.set_color(sibling, Color::Black);
                    self.nodes[p].color = Color::Red;
                    self.rotate_right(p);
                    sibling = self.nodes[p].left;
                }
                let Some(s) = sibling else {
                    node = Some(p);
                    parent = self.nodes[p].parent;
                    continue;
                };

                let (near, far) = (self.nodes[s].right, self.nodes[s].left);
                if self.color(near) == Color::Black && self.color(far) == Color::Black {
                    self.nodes[s].color = Color::Red;
                    node = Some(p);
                    parent = self.nodes[p].parent;
                } else {
                    let mut s = s;
                    if self.color(far) == Color::Black {
                        self.set_color(near, Color::Black);
                        self.nodes[s].color = Color::Red;
                        self.rotate_left(s);
                        s = match self.nodes[p].left {
                            Some(s) => s,
                            None => break,
                        };
                    }
                    self.nodes[s].color = self.nodes[p].color;
                    self.nodes[p].color = Color::Black;
                    let far = self.nodes[s].left;
                    self.set_color(far, Color::Black);
                    self.rotate_right(p);
                    node = self.root;
                    parent = None;
                }
            }
        }

        self.set_color(node, Color::Black);
    }
}

#[cfg(test)]
impl<K: Key> RedBlackTree<K> {
    /// Panics if the tree breaks any ordering, coloring, or parent link rule. Returns the black
    /// height of the root.
    fn assert_invariants(&self) -> usize {
        if let Some(root) = self.root {
            assert_eq!(self.nodes[root].color, Color::Black, "red root");
            assert_eq!(self.nodes[root].parent, None, "root has a parent");
        }

        let mut keys = Vec::new();
        self.inorder_traverse(|key| keys.push(key));
        assert!(
            keys.windows(2)
                .all(|pair| (self.compare)(&pair[0], &pair[1]) == Comparison::Less),
            "keys out of order: {keys:?}"
        );
        assert_eq!(keys.len(), self.len());

        self.assert_subtree(self.root)
    }

    fn assert_subtree(&self, handle: Option<Handle>) -> usize {
        let Some(handle) = handle else {
            return 0;
        };
        let node = &self.nodes[handle];
        for child in [node.left, node.right].into_iter().flatten() {
            assert_eq!(self.nodes[child].parent, Some(handle), "stale parent link");
            if node.color == Color::Red {
                assert_eq!(self.nodes[child].color, Color::Black, "red {:?} has a red child", node.key);
            }
        }

        let left = self.assert_subtree(node.left);
        let right = self.assert_subtree(node.right);
        assert_eq!(left, right, "black heights differ below {:?}", node.key);
        left + usize::from(node.color == Color::Black)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tree_of(keys: &[i32]) -> RedBlackTree<i32> {
        let mut tree = RedBlackTree::new();
        for &key in keys {
            tree.insert(key).unwrap();
            tree.assert_invariants();
        }
        tree
    }

    fn preorder(tree: &RedBlackTree<i32>) -> Vec<i32> {
        let mut keys = Vec::new();
        tree.preorder_traverse(|key| keys.push(key));
        keys
    }

    fn inorder(tree: &RedBlackTree<i32>) -> Vec<i32> {
        let mut keys = Vec::new();
        tree.inorder_traverse(|key| keys.push(key));
        keys
    }

    #[test]
    fn first_key_is_a_black_root() {
        let tree = tree_of(&[7]);
        assert_eq!(tree.color_of(7), Some(Color::Black));
        assert_eq!(tree.color_of(8), None);
    }

    #[test]
    fn ascending_triple_rotates_grandparent() {
        let tree = tree_of(&[10, 20, 30]);
        assert_eq!(preorder(&tree), [20, 10, 30]);
        assert_eq!(tree.color_of(20), Some(Color::Black));
        assert_eq!(tree.color_of(10), Some(Color::Red));
        assert_eq!(tree.color_of(30), Some(Color::Red));
    }

    #[test]
    fn descending_triple_rotates_grandparent() {
        let tree = tree_of(&[30, 20, 10]);
        assert_eq!(preorder(&tree), [20, 10, 30]);
        assert_eq!(tree.color_of(20), Some(Color::Black));
    }

    #[test]
    fn zig_zag_needs_two_rotations() {
        let tree = tree_of(&[30, 10, 20]);
        assert_eq!(preorder(&tree), [20, 10, 30]);

        let tree = tree_of(&[10, 30, 20]);
        assert_eq!(preorder(&tree), [20, 10, 30]);
    }

    #[test]
    fn red_uncle_is_recolored() {
        let tree = tree_of(&[20, 10, 30, 5]);
        // No rotation, 10 and 30 turn black and 20 would turn red but it's the root.
        assert_eq!(preorder(&tree), [20, 10, 5, 30]);
        assert_eq!(tree.color_of(20), Some(Color::Black));
        assert_eq!(tree.color_of(10), Some(Color::Black));
        assert_eq!(tree.color_of(30), Some(Color::Black));
        assert_eq!(tree.color_of(5), Some(Color::Red));
    }

    #[test]
    fn rotation_at_root_updates_root() {
        let tree = tree_of(&[1, 2, 3]);
        let root = tree.root.unwrap();
        assert_eq!(tree.nodes[root].key, 2);
        assert_eq!(tree.nodes[root].parent, None);
    }

    #[test]
    fn ascending_inserts_stay_shallow() {
        let keys: Vec<i32> = (0..1000).collect();
        let tree = tree_of(&keys);
        // A Red-Black tree with n keys is at most 2 * log2(n + 1) tall.
        assert!(tree.height().unwrap() <= 19);
        assert_eq!(inorder(&tree), keys);
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut tree = tree_of(&[2, 1, 3]);
        assert_eq!(tree.insert(2), Ok(false));
        assert_eq!(tree.len(), 3);
        assert_eq!(inorder(&tree), [1, 2, 3]);
    }

    #[test]
    fn nan_is_rejected_without_changes() {
        let mut tree = RedBlackTree::new();
        tree.insert(0.5).unwrap();
        assert!(tree.insert(f64::NAN).is_err());
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.max(), Some(0.5));
    }

    #[test]
    fn min_and_max() {
        let tree = tree_of(&[8, 3, 10, 1, 6, 14]);
        assert_eq!(tree.min(), Some(1));
        assert_eq!(tree.max(), Some(14));
        assert_eq!(RedBlackTree::<u8>::new().min(), None);
    }

    #[test]
    fn remove_red_leaf() {
        let mut tree = tree_of(&[10, 20, 30]);
        assert!(tree.remove(10));
        tree.assert_invariants();
        assert_eq!(preorder(&tree), [20, 30]);
    }

    #[test]
    fn remove_black_leaf_borrows_from_sibling() {
        let mut tree = tree_of(&[20, 10, 30, 35]);
        // 10 is black with a black sibling 30 that has a red child.
        assert!(tree.remove(10));
        tree.assert_invariants();
        assert_eq!(preorder(&tree), [30, 20, 35]);
    }

    #[test]
    fn remove_root_with_two_children() {
        let mut tree = tree_of(&[20, 10, 30, 5, 15, 25, 35]);
        assert!(tree.remove(20));
        tree.assert_invariants();
        assert_eq!(inorder(&tree), [5, 10, 15, 25, 30, 35]);
        assert!(!tree.search(20));
    }

    #[test]
    fn remove_missing_key_is_a_no_op() {
        let mut tree = tree_of(&[5, 3, 8]);
        assert!(!tree.remove(4));
        assert_eq!(preorder(&tree), [5, 3, 8]);
    }

    #[test]
    fn removing_everything_empties_the_tree() {
        let keys: Vec<i32> = (0..200).map(|k| (k * 73) % 200).collect();
        let mut tree = tree_of(&keys);
        for &key in keys.iter().rev() {
            assert!(tree.remove(key));
            tree.assert_invariants();
        }
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(keys.iter().all(|&key| !tree.search(key)));
    }

    #[test]
    fn freed_nodes_are_reused() {
        let mut tree = tree_of(&[1, 2, 3, 4, 5]);
        tree.remove(2);
        tree.remove(4);
        tree.insert(6).unwrap();
        tree.insert(7).unwrap();
        tree.assert_invariants();
        assert_eq!(tree.nodes.len(), 5);
        assert_eq!(inorder(&tree), [1, 3, 5, 6, 7]);
    }

    #[test]
    fn descending_comparator() {
        let mut tree = RedBlackTree::with_comparator(crate::compare::descending);
        for key in 0..50 {
            tree.insert(key).unwrap();
        }
        tree.assert_invariants();
        assert_eq!(tree.min(), Some(49));
        assert_eq!(tree.max(), Some(0));
    }

    #[test]
    fn debug_shows_keys_and_colors() {
        let tree = tree_of(&[10, 20, 30]);
        assert_eq!(
            format!("{tree:?}"),
            "[(10, Red), (20, Black), (30, Red)]"
        );
    }
}
