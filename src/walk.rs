//! Read-only algorithms shared by every tree. They're written against [`Subtree`] so they work
//! for boxed nodes and arena nodes alike, and they use an explicit stack instead of recursion so
//! a degenerate (linked-list shaped) tree can't overflow the call stack.

use crate::compare::{Comparator, Comparison, Key};

/// A cheap, copyable view of a node that can hand out views of its children.
pub(crate) trait Subtree: Copy {
    type Key: Key;

    fn key(self) -> Self::Key;
    fn left(self) -> Option<Self>;
    fn right(self) -> Option<Self>;
}

/// Finds the node holding `key`, if there is one.
pub(crate) fn find<S: Subtree>(
    root: Option<S>,
    key: S::Key,
    compare: Comparator<S::Key>,
) -> Option<S> {
    let mut node = root;
    while let Some(n) = node {
        node = match compare(&key, &n.key()) {
            Comparison::Less => n.left(),
            Comparison::Equal => return Some(n),
            Comparison::Greater => n.right(),
        };
    }
    None
}

/// The leftmost node of the subtree.
pub(crate) fn leftmost<S: Subtree>(root: S) -> S {
    let mut node = root;
    while let Some(left) = node.left() {
        node = left;
    }
    node
}

/// The rightmost node of the subtree.
pub(crate) fn rightmost<S: Subtree>(root: S) -> S {
    let mut node = root;
    while let Some(right) = node.right() {
        node = right;
    }
    node
}

/// Number of edges on the longest root to leaf path. A single node has a height of 0 and an
/// empty tree has no height at all.
pub(crate) fn height<S: Subtree>(root: Option<S>) -> Option<usize> {
    let mut level = vec![root?];
    let mut height = 0;
    loop {
        let next: Vec<S> = level
            .iter()
            .flat_map(|n| n.left().into_iter().chain(n.right()))
            .collect();
        if next.is_empty() {
            return Some(height);
        }
        height += 1;
        level = next;
    }
}

/// Visits left subtree, node, right subtree.
pub(crate) fn in_order<S: Subtree>(root: Option<S>, mut visit: impl FnMut(S)) {
    let mut stack = Vec::new();
    let mut node = root;
    loop {
        while let Some(n) = node {
            stack.push(n);
            node = n.left();
        }
        match stack.pop() {
            Some(n) => {
                visit(n);
                node = n.right();
            }
            None => return,
        }
    }
}

/// Visits node, left subtree, right subtree.
pub(crate) fn pre_order<S: Subtree>(root: Option<S>, mut visit: impl FnMut(S)) {
    let mut stack: Vec<S> = root.into_iter().collect();
    while let Some(n) = stack.pop() {
        visit(n);
        stack.extend(n.right());
        stack.extend(n.left());
    }
}

/// Visits left subtree, right subtree, node.
pub(crate) fn post_order<S: Subtree>(root: Option<S>, mut visit: impl FnMut(S)) {
    // Node, right, left reversed is left, right, node.
    let mut stack: Vec<S> = root.into_iter().collect();
    let mut reversed = Vec::new();
    while let Some(n) = stack.pop() {
        reversed.push(n);
        stack.extend(n.left());
        stack.extend(n.right());
    }
    for n in reversed.into_iter().rev() {
        visit(n);
    }
}
