use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

use derive_more::IsVariant;

use crate::collections::binary_tree::tree::{self, TreeNode};

/// The color of the link from a node's parent down to the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum Color {
    Red,
    Black,
}

impl Color {
    const fn flipped(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Branch<K, V>(pub Option<Box<Node<K, V>>>);

#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    pub left: Branch<K, V>,
    pub right: Branch<K, V>,
    pub key: K,
    pub value: V,
    pub color: Color,
}

impl<K, V> Node<K, V> {
    /// New nodes always join the tree with a red link.
    pub fn new(key: K, value: V) -> Node<K, V> {
        Node {
            left: Branch(None),
            right: Branch(None),
            key,
            value,
            color: Color::Red,
        }
    }
}

impl<K, V> TreeNode for Node<K, V> {
    type Key = K;
    type Value = V;

    fn key(&self) -> &K {
        &self.key
    }

    fn value(&self) -> &V {
        &self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.0.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.0.as_deref()
    }
}

impl<K, V> Branch<K, V> {
    pub fn node(&self) -> Option<&Node<K, V>> {
        self.0.as_deref()
    }

    /// Empty branches count as black.
    pub fn is_red(&self) -> bool {
        self.node().is_some_and(|node| node.color.is_red())
    }

    fn left_is_red(&self) -> bool {
        self.node().is_some_and(|node| node.left.is_red())
    }

    fn right_is_red(&self) -> bool {
        self.node().is_some_and(|node| node.right.is_red())
    }

    fn left_left_is_red(&self) -> bool {
        self.node().is_some_and(|node| node.left.left_is_red())
    }

    fn right_left_is_red(&self) -> bool {
        self.node().is_some_and(|node| node.right.left_is_red())
    }

    fn rotate_left(&mut self) {
        let Some(mut node) = self.0.take() else {
            return;
        };
        let Some(mut pivot) = node.right.0.take() else {
            self.0 = Some(node);
            return;
        };

        node.right = mem::replace(&mut pivot.left, Branch(None));
        pivot.color = node.color;
        node.color = Color::Red;
        pivot.left = Branch(Some(node));
        self.0 = Some(pivot);
    }

    fn rotate_right(&mut self) {
        let Some(mut node) = self.0.take() else {
            return;
        };
        let Some(mut pivot) = node.left.0.take() else {
            self.0 = Some(node);
            return;
        };

        node.left = mem::replace(&mut pivot.right, Branch(None));
        pivot.color = node.color;
        node.color = Color::Red;
        pivot.right = Branch(Some(node));
        self.0 = Some(pivot);
    }

    fn flip_colors(&mut self) {
        let Some(node) = &mut self.0 else {
            return;
        };
        node.color = node.color.flipped();
        for child in [&mut node.left, &mut node.right] {
            if let Some(child) = &mut child.0 {
                child.color = child.color.flipped();
            }
        }
    }

    /// Restores the left-leaning shape on the way back up from an insertion: a lone right-leaning
    /// red link is rotated left, two red links in a row are rotated right and a node with two red
    /// links pushes the red up to its parent.
    fn balance(&mut self) {
        if self.right_is_red() && !self.left_is_red() {
            self.rotate_left();
        }
        if self.left_is_red() && self.left_left_is_red() {
            self.rotate_right();
        }
        if self.left_is_red() && self.right_is_red() {
            self.flip_colors();
        }
    }

    /// Like [`balance`](Branch::balance), but a removal can leave a right-leaning red link beside a
    /// red left link as well.
    fn fix_up(&mut self) {
        if self.right_is_red() {
            self.rotate_left();
        }
        self.balance();
    }

    /// Makes sure the left child or one of its children is red before descending to the left.
    fn move_red_left(&mut self) {
        self.flip_colors();
        if self.right_left_is_red() {
            if let Some(node) = &mut self.0 {
                node.right.rotate_right();
            }
            self.rotate_left();
            self.flip_colors();
        }
    }

    /// Makes sure the right child or one of its children is red before descending to the right.
    fn move_red_right(&mut self) {
        self.flip_colors();
        if self.left_left_is_red() {
            self.rotate_right();
            self.flip_colors();
        }
    }

    /// Colors the root red when both of its children are black, so that a removal always has a red
    /// link to work with.
    fn redden_root(&mut self) {
        if let Some(root) = &mut self.0 {
            if !root.left.is_red() && !root.right.is_red() {
                root.color = Color::Red;
            }
        }
    }

    fn blacken_root(&mut self) {
        if let Some(root) = &mut self.0 {
            root.color = Color::Black;
        }
    }

    pub fn take_first(&mut self) -> Option<(K, V)> {
        self.0.as_ref()?;
        self.redden_root();
        let removed = self.delete_min();
        self.blacken_root();
        removed
    }

    pub fn take_last(&mut self) -> Option<(K, V)> {
        self.0.as_ref()?;
        self.redden_root();
        let removed = self.delete_max();
        self.blacken_root();
        removed
    }

    fn delete_min(&mut self) -> Option<(K, V)> {
        if self.0.as_ref()?.left.0.is_none() {
            let Node { key, value, right, .. } = *self.0.take()?;
            self.0 = right.0;
            return Some((key, value));
        }

        if !self.left_is_red() && !self.left_left_is_red() {
            self.move_red_left();
        }
        let removed = self.0.as_mut()?.left.delete_min();
        self.fix_up();
        removed
    }

    fn delete_max(&mut self) -> Option<(K, V)> {
        if self.left_is_red() {
            self.rotate_right();
        }
        if self.0.as_ref()?.right.0.is_none() {
            let Node { key, value, left, .. } = *self.0.take()?;
            self.0 = left.0;
            return Some((key, value));
        }

        if !self.right_is_red() && !self.right_left_is_red() {
            self.move_red_right();
        }
        let removed = self.0.as_mut()?.right.delete_max();
        self.fix_up();
        removed
    }
}

impl<K: Ord, V> Branch<K, V> {
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let old = self.put(key, value);
        self.blacken_root();
        old
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        let old = match &mut self.0 {
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => node.left.put(key, value),
                Ordering::Greater => node.right.put(key, value),
                Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
            },
            None => {
                self.0 = Some(Box::new(Node::new(key, value)));
                return None;
            },
        };
        self.balance();
        old
    }

    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        // The descent reshapes the tree as it goes, so it may only start once the key is known to
        // be present.
        tree::search(self.node(), key)?;
        self.redden_root();
        let removed = self.delete(key);
        self.blacken_root();
        removed
    }

    fn delete<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if key.cmp(self.0.as_ref()?.key.borrow()).is_lt() {
            if !self.left_is_red() && !self.left_left_is_red() {
                self.move_red_left();
            }
            let removed = self.0.as_mut()?.left.delete(key);
            self.fix_up();
            return removed;
        }

        if self.left_is_red() {
            self.rotate_right();
        }
        let node = self.0.as_ref()?;
        if key.cmp(node.key.borrow()).is_eq() && node.right.0.is_none() {
            let Node { key, value, left, .. } = *self.0.take()?;
            self.0 = left.0;
            return Some((key, value));
        }

        if !self.right_is_red() && !self.right_left_is_red() {
            self.move_red_right();
        }
        let node = self.0.as_mut()?;
        let removed = if key.cmp(node.key.borrow()).is_eq() {
            let (key, value) = node.right.delete_min()?;
            Some((mem::replace(&mut node.key, key), mem::replace(&mut node.value, value)))
        } else {
            node.right.delete(key)
        };
        self.fix_up();
        removed
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = self.0.as_mut()?;
        match key.cmp(node.key.borrow()) {
            Ordering::Less => node.left.get_mut(key),
            Ordering::Greater => node.right.get_mut(key),
            Ordering::Equal => Some(&mut node.value),
        }
    }
}
