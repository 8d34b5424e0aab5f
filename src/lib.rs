//! This crate exposes a few flavors of Binary Search Trees (BSTs) over numeric keys, mostly
//! for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored keys. BSTs are typically defined recursively using the notion of a `Node`. A `Node`
//! stores a key and will sometimes have child `Node`s. The most important invariants of a BST
//! are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a key less than its
//!    own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a key greater than
//!    its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` where `height` is the longest path from the root `Node` to a leaf
//! `Node`. A plain [`BinarySearchTree`] does nothing to limit its height, so inserting keys in
//! sorted order gives it a height of `N - 1`. The self-balancing trees keep the height at
//! `O(lg N)`:
//!
//! - [`AvlTree`] keeps the heights of every `Node`'s two subtrees within one of each other.
//! - [`RedBlackTree`] colors every `Node` red or black and keeps the number of black `Node`s on
//!   every path the same.
//!
//! All three implement [`OrderedTree`]. Keys are primitive numbers ordered by a
//! [`Comparator`](compare::Comparator), ascending unless another one is supplied. Traversals
//! call a visitor with each key rather than returning an iterator.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod bst;
pub mod compare;
mod error;
mod node;
mod ordered;
pub mod rbtree;
mod walk;

pub use avl::AvlTree;
pub use bst::BinarySearchTree;
pub use compare::{Comparator, Comparison, Key};
pub use error::InvalidKeyError;
pub use ordered::OrderedTree;
pub use rbtree::{Color, RedBlackTree};
