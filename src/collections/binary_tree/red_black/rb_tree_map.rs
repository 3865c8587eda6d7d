use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, IntoIter, Iter, Keys, Node, Values};
use crate::collections::binary_tree::cursor::{Cursor, Sealed, TreeNavigation};
use crate::collections::binary_tree::tree::{self, TreeNode};
use crate::collections::traits::{Container, OrderedMap};
use crate::util::error::EmptyContainer;
use crate::util::fmt::DebugRaw;
use crate::util::mod_count::ModCount;

/// An ordered map backed by a left-leaning red-black tree.
///
/// Every link in the tree is either red or black. Red links only ever lean left and never follow
/// one another, and every path from the root down to an empty branch crosses the same number of
/// black links, which keeps the tree within twice the height of a perfectly balanced one.
/// Insertions rebalance on the way back up, while removals borrow red links on the way down so
/// that the node removed is never the only thing holding a path's black count together.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the RbTreeMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `get`, `contains_key` | `O(log n)` |
/// | `insert`, `remove` | `O(log n)` |
/// | `floor_key`, `ceiling_key`, `lower_key`, `higher_key` | `O(log n)` |
/// | `first_key`, `last_key`, `pop_first`, `pop_last` | `O(log n)` |
/// | `contains_value` | `O(n)` |
///
/// # Examples
/// ```
/// # use scratch_collections::collections::binary_tree::RbTreeMap;
/// let mut map: RbTreeMap<&str, u32> = RbTreeMap::new();
/// map.insert("b", 2);
/// map.insert("a", 1);
/// map.insert("c", 3);
///
/// assert_eq!(map.remove("b"), Some(2));
/// assert_eq!(map.ceiling_key("b"), Some(&"c"));
/// assert_eq!(map.to_string(), "{a=1, c=3}");
/// ```
pub struct RbTreeMap<K, V> {
    pub(crate) root: Branch<K, V>,
    pub(crate) len: usize,
    pub(crate) mods: ModCount,
}

impl<K, V> RbTreeMap<K, V> {
    pub const fn new() -> RbTreeMap<K, V> {
        RbTreeMap {
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

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

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

impl<K: Ord, V> RbTreeMap<K, V> {
    /// Associates `value` with `key`, returning the value previously associated with it.
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
    pub fn head_map<Q>(&self, to: &Q) -> RbTreeMap<K, V>
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
    pub fn tail_map<Q>(&self, from: &Q) -> RbTreeMap<K, V>
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

impl<K: Ord, V> Container<K> for RbTreeMap<K, V> {
    fn len(&self) -> usize {
        RbTreeMap::len(self)
    }

    fn clear(&mut self) {
        RbTreeMap::clear(self)
    }

    fn contains(&self, item: &K) -> bool {
        self.contains_key(item)
    }
}

impl<K: Ord, V> OrderedMap<K, V> for RbTreeMap<K, V> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        RbTreeMap::get(self, key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        RbTreeMap::remove(self, key)
    }

    fn first_key(&self) -> Result<&K, EmptyContainer> {
        RbTreeMap::first_key(self)
    }

    fn last_key(&self) -> Result<&K, EmptyContainer> {
        RbTreeMap::last_key(self)
    }

    fn floor_key(&mut self, key: &K) -> Option<&K> {
        RbTreeMap::floor_key(self, key)
    }

    fn ceiling_key(&mut self, key: &K) -> Option<&K> {
        RbTreeMap::ceiling_key(self, key)
    }

    fn lower_key(&mut self, key: &K) -> Option<&K> {
        RbTreeMap::lower_key(self, key)
    }

    fn higher_key(&mut self, key: &K) -> Option<&K> {
        RbTreeMap::higher_key(self, key)
    }
}

impl<K, V> Sealed for RbTreeMap<K, V> {}

impl<K: Ord, V> TreeNavigation<K, V> for RbTreeMap<K, V> {
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

impl<K, V> Default for RbTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Extend<(K, V)> for RbTreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for RbTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = RbTreeMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Clone, V: Clone> Clone for RbTreeMap<K, V> {
    fn clone(&self) -> Self {
        RbTreeMap {
            root: self.root.clone(),
            len: self.len,
            mods: ModCount::new(),
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for RbTreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for RbTreeMap<K, V> {}

impl<K, V> IntoIterator for RbTreeMap<K, V> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<K: Debug, V: Debug> Debug for RbTreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let nodes = tree::draw(
            self.root.node(),
            &Node::children,
            &|node: &Node<K, V>| format!("({:?}: {:?}) {:?}", node.key, node.value, node.color),
        );

        f.debug_struct("RbTreeMap")
            .field("nodes", &DebugRaw(format!("\n{nodes}\n")))
            .field("len", &self.len)
            .finish()
    }
}

impl<K: Display, V: Display> Display for RbTreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        crate::util::fmt::write_map(f, self.iter())
    }
}
