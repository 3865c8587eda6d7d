use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

use crate::collections::binary_tree::tree::TreeNode;

#[derive(Debug, Clone)]
pub(crate) struct Branch<K, V>(pub Option<Box<Node<K, V>>>);

#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    pub left: Branch<K, V>,
    pub right: Branch<K, V>,
    pub key: K,
    pub value: V,
    /// The number of nodes on the longest path from this node down to a leaf, including itself.
    pub height: i32,
}

impl<K, V> Node<K, V> {
    pub fn new(key: K, value: V) -> Node<K, V> {
        Node {
            left: Branch(None),
            right: Branch(None),
            key,
            value,
            height: 1,
        }
    }

    pub fn update_height(&mut self) {
        self.height = 1 + self.left.height().max(self.right.height());
    }

    pub fn balance_factor(&self) -> i32 {
        self.left.height() - self.right.height()
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
    pub fn height(&self) -> i32 {
        self.0.as_ref().map_or(0, |node| node.height)
    }

    pub fn balance_factor(&self) -> i32 {
        self.0.as_ref().map_or(0, |node| node.balance_factor())
    }

    pub fn node(&self) -> Option<&Node<K, V>> {
        self.0.as_deref()
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
        node.update_height();
        pivot.left = Branch(Some(node));
        pivot.update_height();
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
        node.update_height();
        pivot.right = Branch(Some(node));
        pivot.update_height();
        self.0 = Some(pivot);
    }

    /// Recomputes the height of this subtree's root and rotates it back into balance if its
    /// children's heights differ by more than one.
    fn balance(&mut self) {
        let Some(node) = &mut self.0 else {
            return;
        };
        node.update_height();

        let factor = node.balance_factor();
        if factor > 1 {
            if node.left.balance_factor() < 0 {
                node.left.rotate_left();
            }
            self.rotate_right();
        } else if factor < -1 {
            if node.right.balance_factor() > 0 {
                node.right.rotate_right();
            }
            self.rotate_left();
        }
    }
}

impl<K: Ord, V> Branch<K, V> {
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let old = match &mut self.0 {
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => node.left.insert(key, value),
                Ordering::Greater => node.right.insert(key, value),
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
        let removed = match &mut self.0 {
            Some(node) => match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left.remove_entry(key)?,
                Ordering::Greater => node.right.remove_entry(key)?,
                Ordering::Equal => self.remove_root()?,
            },
            None => return None,
        };
        self.balance();
        Some(removed)
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

impl<K, V> Branch<K, V> {
    pub fn take_first(&mut self) -> Option<(K, V)> {
        let removed = match &mut self.0 {
            Some(node) if node.left.0.is_some() => node.left.take_first()?,
            Some(_) => self.remove_root()?,
            None => return None,
        };
        self.balance();
        Some(removed)
    }

    pub fn take_last(&mut self) -> Option<(K, V)> {
        let removed = match &mut self.0 {
            Some(node) if node.right.0.is_some() => node.right.take_last()?,
            Some(_) => self.remove_root()?,
            None => return None,
        };
        self.balance();
        Some(removed)
    }

    /// Removes the root of this subtree. A root with two children swaps in its in-order
    /// successor, which is removed from the right subtree instead.
    fn remove_root(&mut self) -> Option<(K, V)> {
        let mut node = self.0.take()?;

        match (node.left.0.take(), node.right.0.take()) {
            (None, right) => self.0 = right,
            (left, None) => self.0 = left,
            (left, right) => {
                node.left = Branch(left);
                node.right = Branch(right);
                let (key, value) = node.right.take_first()?;
                let entry = (
                    mem::replace(&mut node.key, key),
                    mem::replace(&mut node.value, value),
                );
                self.0 = Some(node);
                self.balance();
                return Some(entry);
            },
        }

        let Node { key, value, .. } = *node;
        Some((key, value))
    }
}
