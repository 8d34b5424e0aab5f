use crate::compare::Key;
use crate::walk::Subtree;

pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A key and the two subtrees it exclusively owns.
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
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
