use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, IntoIter, Iter, Keys, Node, Values};
use crate::collections::binary_tree::cursor::{Cursor, Sealed, TreeNavigation};
use crate::collections::binary_tree::tree::{self, TreeNode};
use crate::collections::traits::{Container, OrderedMap};
use crate::util::error::EmptyContainer;
use crate::util::fmt::DebugRaw;
use crate::util::mod_count::ModCount;

/// An ordered map backed by an AVL tree, a binary search tree which keeps the heights of every
/// node's two subtrees within one of each other.
///
/// Each node stores the height of its subtree. After an insertion or removal, every node on the
/// path back to the root recomputes its height and, if it has become unbalanced, is restored with
/// one or two rotations.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the AvlTreeMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `get`, `contains_key` | `O(log n)` |
/// | `insert`, `remove` | `O(log n)` |
/// | `floor_key`, `ceiling_key`, `lower_key`, `higher_key` | `O(log n)` |
/// | `first_key`, `last_key` | `O(log n)` |
/// | `contains_value` | `O(n)` |
///
/// # Examples
/// ```
/// # use scratch_collections::collections::binary_tree::AvlTreeMap;
/// let mut map = AvlTreeMap::new();
/// map.insert(3, "three");
/// map.insert(1, "one");
/// map.insert(2, "two");
///
/// assert_eq!(map.get(&2), Some(&"two"));
/// assert_eq!(map.to_string(), "{1=one, 2=two, 3=three}");
/// ```
pub struct AvlTreeMap<K, V> {
    pub(crate) root: Branch<K, V>,
    pub(crate) len: usize,
    pub(crate) mods: ModCount,
}

impl<K, V> AvlTreeMap<K, V> {
    pub const fn new() -> AvlTreeMap<K, V> {
        AvlTreeMap {
            root: Branch(None),
            len: 0,
            mods: ModCount::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.root = Branch(None);
        self.len = 0;
        self.mods.bump();
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.node(), self.len)
    }

    /// Returns an iterator over the keys of the map, in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over the values of the map, in ascending order of their keys.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    pub fn first_entry(&self) -> Option<(&K, &V)> {
        self.root.node().map(|root| tree::first(root).entry())
    }

    pub fn last_entry(&self) -> Option<(&K, &V)> {
        self.root.node().map(|root| tree::last(root).entry())
    }

    /// Returns the least key in the map.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the map is empty.
    pub fn first_key(&self) -> Result<&K, EmptyContainer> {
        self.first_entry().map(|(key, _)| key).ok_or(EmptyContainer)
    }

    /// Returns the greatest key in the map.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the map is empty.
    pub fn last_key(&self) -> Result<&K, EmptyContainer> {
        self.last_entry().map(|(key, _)| key).ok_or(EmptyContainer)
    }

    /// Removes and returns the entry with the least key.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let entry = self.root.take_first()?;
        self.len -= 1;
        self.mods.bump();
        Some(entry)
    }

    /// Removes and returns the entry with the greatest key.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let entry = self.root.take_last()?;
        self.len -= 1;
        self.mods.bump();
        Some(entry)
    }

    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|other| other == value)
    }

    pub(crate) fn root_key(&self) -> Option<&K> {
        self.root.node().map(|root| &root.key)
    }
}

impl<K: Ord, V> AvlTreeMap<K, V> {
    /// Associates `value` with `key`, returning the value previously associated with it. An
    /// existing key keeps its place in the tree and only has its value replaced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let old = self.root.insert(key, value);
        if old.is_none() {
            self.len += 1;
            self.mods.bump();
        }
        old
    }

    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let entry = self.root.remove_entry(key)?;
        self.len -= 1;
        self.mods.bump();
        Some(entry)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::search(self.root.node(), key).map(Node::entry)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_entry(key).map(|(_, value)| value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.get_mut(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Returns the greatest key less than or equal to `key`.
    pub fn floor_key<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::below(self.root.node(), key, true).map(Node::key)
    }

    /// Returns the least key greater than or equal to `key`.
    pub fn ceiling_key<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::above(self.root.node(), key, true).map(Node::key)
    }

    /// Returns the greatest key strictly less than `key`.
    pub fn lower_key<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::below(self.root.node(), key, false).map(Node::key)
    }

    /// Returns the least key strictly greater than `key`.
    pub fn higher_key<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::above(self.root.node(), key, false).map(Node::key)
    }

    /// Returns a new map holding clones of every entry with a key strictly less than `to`.
    pub fn head_map<Q>(&self, to: &Q) -> AvlTreeMap<K, V>
    where
        K: Borrow<Q> + Clone,
        V: Clone,
        Q: Ord + ?Sized,
    {
        self.iter()
            .take_while(|&(key, _)| <K as Borrow<Q>>::borrow(key) < to)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Returns a new map holding clones of every entry with a key greater than or equal to
    /// `from`.
    pub fn tail_map<Q>(&self, from: &Q) -> AvlTreeMap<K, V>
    where
        K: Borrow<Q> + Clone,
        V: Clone,
        Q: Ord + ?Sized,
    {
        self.iter()
            .skip_while(|&(key, _)| <K as Borrow<Q>>::borrow(key) < from)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    pub fn cursor(&self) -> Cursor<K>
    where
        K: Clone,
    {
        Cursor::new(self.mods.get())
    }
}

impl<K: Ord, V> Container<K> for AvlTreeMap<K, V> {
    fn len(&self) -> usize {
        AvlTreeMap::len(self)
    }

    fn clear(&mut self) {
        AvlTreeMap::clear(self)
    }

    fn contains(&self, item: &K) -> bool {
        self.contains_key(item)
    }
}

impl<K: Ord, V> OrderedMap<K, V> for AvlTreeMap<K, V> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        AvlTreeMap::get(self, key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        AvlTreeMap::remove(self, key)
    }

    fn first_key(&self) -> Result<&K, EmptyContainer> {
        AvlTreeMap::first_key(self)
    }

    fn last_key(&self) -> Result<&K, EmptyContainer> {
        AvlTreeMap::last_key(self)
    }

    fn floor_key(&mut self, key: &K) -> Option<&K> {
        AvlTreeMap::floor_key(self, key)
    }

    fn ceiling_key(&mut self, key: &K) -> Option<&K> {
        AvlTreeMap::ceiling_key(self, key)
    }

    fn lower_key(&mut self, key: &K) -> Option<&K> {
        AvlTreeMap::lower_key(self, key)
    }

    fn higher_key(&mut self, key: &K) -> Option<&K> {
        AvlTreeMap::higher_key(self, key)
    }
}

impl<K, V> Sealed for AvlTreeMap<K, V> {}

impl<K: Ord, V> TreeNavigation<K, V> for AvlTreeMap<K, V> {
    fn next_entry(&self, key: Option<&K>) -> Option<(&K, &V)> {
        match key {
            Some(key) => tree::above(self.root.node(), key, false).map(Node::entry),
            None => self.first_entry(),
        }
    }

    fn mod_count(&self) -> u64 {
        self.mods.get()
    }

    fn remove_at_cursor(&mut self, key: &K) -> Option<(K, V)> {
        self.remove_entry(key)
    }
}

impl<K, V> Default for AvlTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Extend<(K, V)> for AvlTreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AvlTreeMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Clone, V: Clone> Clone for AvlTreeMap<K, V> {
    fn clone(&self) -> Self {
        AvlTreeMap {
            root: self.root.clone(),
            len: self.len,
            mods: ModCount::new(),
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for AvlTreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for AvlTreeMap<K, V> {}

impl<K, V> IntoIterator for AvlTreeMap<K, V> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<K: Debug, V: Debug> Debug for AvlTreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let nodes = tree::draw(
            self.root.node(),
            &Node::children,
            &|node: &Node<K, V>| format!("({:?}: {:?}) h={}", node.key, node.value, node.height),
        );

        f.debug_struct("AvlTreeMap")
            .field("nodes", &DebugRaw(format!("\n{nodes}\n")))
            .field("len", &self.len)
            .finish()
    }
}

impl<K: Display, V: Display> Display for AvlTreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        crate::util::fmt::write_map(f, self.iter())
    }
}
