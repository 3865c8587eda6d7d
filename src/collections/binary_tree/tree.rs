use std::borrow::Borrow;
use std::cmp::Ordering;
use std::iter::FusedIterator;

use crate::collections::contiguous::Vector;

/// A node of a boxed binary search tree, as seen by the searches shared between tree maps.
pub(crate) trait TreeNode {
    type Key;
    type Value;

    fn key(&self) -> &Self::Key;

    fn value(&self) -> &Self::Value;

    fn left(&self) -> Option<&Self>;

    fn right(&self) -> Option<&Self>;

    fn entry(&self) -> (&Self::Key, &Self::Value) {
        (self.key(), self.value())
    }

    fn children(&self) -> (Option<&Self>, Option<&Self>) {
        (self.left(), self.right())
    }
}

pub(crate) fn search<'a, N, Q>(mut node: Option<&'a N>, key: &Q) -> Option<&'a N>
where
    N: TreeNode,
    N::Key: Borrow<Q>,
    Q: Ord + ?Sized,
{
    while let Some(current) = node {
        node = match key.cmp(current.key().borrow()) {
            Ordering::Less => current.left(),
            Ordering::Greater => current.right(),
            Ordering::Equal => return Some(current),
        };
    }
    None
}

pub(crate) fn first<N: TreeNode>(mut node: &N) -> &N {
    while let Some(left) = node.left() {
        node = left;
    }
    node
}

pub(crate) fn last<N: TreeNode>(mut node: &N) -> &N {
    while let Some(right) = node.right() {
        node = right;
    }
    node
}

/// Finds the node with the greatest key below `key`, or equal to it when `inclusive`.
pub(crate) fn below<'a, N, Q>(mut node: Option<&'a N>, key: &Q, inclusive: bool) -> Option<&'a N>
where
    N: TreeNode,
    N::Key: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut best = None;
    while let Some(current) = node {
        match key.cmp(current.key().borrow()) {
            Ordering::Equal if inclusive => return Some(current),
            Ordering::Greater => {
                best = Some(current);
                node = current.right();
            },
            _ => node = current.left(),
        }
    }
    best
}

/// Finds the node with the least key above `key`, or equal to it when `inclusive`.
pub(crate) fn above<'a, N, Q>(mut node: Option<&'a N>, key: &Q, inclusive: bool) -> Option<&'a N>
where
    N: TreeNode,
    N::Key: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut best = None;
    while let Some(current) = node {
        match key.cmp(current.key().borrow()) {
            Ordering::Equal if inclusive => return Some(current),
            Ordering::Less => {
                best = Some(current);
                node = current.left();
            },
            _ => node = current.right(),
        }
    }
    best
}

/// Renders a subtree sideways, with left children above their parent and right children below.
///
/// `children` and `label` abstract over how nodes are stored, so that both boxed and
/// arena-backed trees can share the layout.
pub(crate) fn draw<N: Copy>(
    node: Option<N>,
    children: &impl Fn(N) -> (Option<N>, Option<N>),
    label: &impl Fn(N) -> String,
) -> String {
    let Some(node) = node else {
        return String::from("-");
    };

    let (left, right) = children(node);
    let mut out = String::new();
    for line in draw(left, children, label).lines() {
        out.push_str("┌    ");
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&label(node));
    for line in draw(right, children, label).lines() {
        out.push('\n');
        out.push_str("└    ");
        out.push_str(line);
    }
    out
}

/// A borrowed in-order traversal of a boxed tree, from both ends at once.
///
/// Each end keeps a stack of the ancestors it still has to visit. The remaining length stops the
/// two ends from crossing.
pub(crate) struct InOrder<'a, N> {
    front: Vector<&'a N>,
    back: Vector<&'a N>,
    len: usize,
}

impl<'a, N: TreeNode> InOrder<'a, N> {
    pub fn new(root: Option<&'a N>, len: usize) -> InOrder<'a, N> {
        let mut iter = InOrder {
            front: Vector::new(),
            back: Vector::new(),
            len,
        };
        iter.descend_left(root);
        iter.descend_right(root);
        iter
    }

    fn descend_left(&mut self, mut node: Option<&'a N>) {
        while let Some(current) = node {
            self.front.push(current);
            node = current.left();
        }
    }

    fn descend_right(&mut self, mut node: Option<&'a N>) {
        while let Some(current) = node {
            self.back.push(current);
            node = current.right();
        }
    }
}

impl<'a, N: TreeNode> Iterator for InOrder<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.front.pop()?;
        self.descend_left(node.right());
        self.len -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<N: TreeNode> DoubleEndedIterator for InOrder<'_, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.back.pop()?;
        self.descend_right(node.left());
        self.len -= 1;
        Some(node)
    }
}

impl<N: TreeNode> ExactSizeIterator for InOrder<'_, N> {}

impl<N: TreeNode> FusedIterator for InOrder<'_, N> {}

impl<N> Clone for InOrder<'_, N> {
    fn clone(&self) -> Self {
        InOrder {
            front: self.front.clone(),
            back: self.back.clone(),
            len: self.len,
        }
    }
}
