use super::arena::{Arena, Handle};
use crate::compare::Key;
use crate::walk::Subtree;

/// The color of a node in a [`RedBlackTree`](super::RedBlackTree). Missing children count as
/// black.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red nodes never have red children.
    Red,
    /// Every path down from a node passes the same number of black nodes.
    Black,
}

#[derive(Clone, Debug)]
pub(crate) struct ColoredNode<K> {
    pub(crate) key: K,
    pub(crate) color: Color,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
    /// Back-reference for walking up during fix-ups. Ownership only flows down through `left`
    /// and `right`.
    pub(crate) parent: Option<Handle>,
}

impl<K> ColoredNode<K> {
    pub(crate) fn new(key: K, color: Color, parent: Option<Handle>) -> Self {
        Self {
            key,
            color,
            left: None,
            right: None,
            parent,
        }
    }
}

/// A node together with the arena it lives in.
pub(crate) struct NodeRef<'a, K> {
    pub(crate) nodes: &'a Arena<ColoredNode<K>>,
    pub(crate) handle: Handle,
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<K> Copy for NodeRef<'_, K> {}

impl<'a, K> NodeRef<'a, K> {
    pub(crate) fn node(self) -> &'a ColoredNode<K> {
        &self.nodes[self.handle]
    }

    fn at(self, handle: Option<Handle>) -> Option<Self> {
        handle.map(|handle| Self {
            nodes: self.nodes,
            handle,
        })
    }
}

impl<K: Key> Subtree for NodeRef<'_, K> {
    type Key = K;

    fn key(self) -> K {
        self.node().key
    }

    fn left(self) -> Option<Self> {
        self.at(self.node().left)
    }

    fn right(self) -> Option<Self> {
        self.at(self.node().right)
    }
}
