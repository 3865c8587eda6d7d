use crate::collections::arena::Arena;

#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    pub key: K,
    pub value: V,
    pub parent: Option<usize>,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl<K, V> Node<K, V> {
    pub const fn new(key: K, value: V, parent: Option<usize>) -> Node<K, V> {
        Node {
            key,
            value,
            parent,
            left: None,
            right: None,
        }
    }
}

pub(crate) fn min<K, V>(nodes: &Arena<Node<K, V>>, mut id: usize) -> usize {
    while let Some(left) = nodes[id].left {
        id = left;
    }
    id
}

pub(crate) fn max<K, V>(nodes: &Arena<Node<K, V>>, mut id: usize) -> usize {
    while let Some(right) = nodes[id].right {
        id = right;
    }
    id
}

/// Returns the node following `id` in key order, climbing through parent links when `id` has no
/// right subtree.
pub(crate) fn successor<K, V>(nodes: &Arena<Node<K, V>>, mut id: usize) -> Option<usize> {
    if let Some(right) = nodes[id].right {
        return Some(min(nodes, right));
    }
    while let Some(parent) = nodes[id].parent {
        if nodes[parent].left == Some(id) {
            return Some(parent);
        }
        id = parent;
    }
    None
}

pub(crate) fn predecessor<K, V>(nodes: &Arena<Node<K, V>>, mut id: usize) -> Option<usize> {
    if let Some(left) = nodes[id].left {
        return Some(max(nodes, left));
    }
    while let Some(parent) = nodes[id].parent {
        if nodes[parent].right == Some(id) {
            return Some(parent);
        }
        id = parent;
    }
    None
}
