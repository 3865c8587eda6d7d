use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use super::{IntoIter, Iter, Keys, Node, Values, max, min};
use crate::collections::arena::Arena;
use crate::collections::binary_tree::cursor::{Cursor, Sealed, TreeNavigation};
use crate::collections::binary_tree::tree;
use crate::collections::traits::{Container, OrderedMap};
use crate::util::error::EmptyContainer;
use crate::util::fmt::{DebugRaw, write_map};
use crate::util::mod_count::ModCount;

/// An ordered map backed by a splay tree, a binary search tree which moves every node it accesses
/// up to the root.
///
/// No balance information is stored. Instead each lookup, insertion, removal and navigation ends by
/// splaying the node it reached to the root through a series of rotations, which keeps recently
/// used keys near the top and gives every operation an amortized `O(log n)` cost. Because of this,
/// lookups take `&mut self`: they never change the contents of the map, only its shape.
///
/// Nodes live in an arena and refer to their parents and children by index.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the SplayTreeMap.
///
/// All bounds are amortized, a single operation can take `O(n)` time.
///
/// | Method | Complexity |
/// |-|-|
/// | `get`, `get_mut` | `O(log n)` |
/// | `insert`, `remove` | `O(log n)` |
/// | `floor_key`, `ceiling_key`, `lower_key`, `higher_key` | `O(log n)` |
/// | `pop_first`, `pop_last` | `O(log n)` |
///
/// # Examples
/// ```
/// # use scratch_collections::collections::binary_tree::SplayTreeMap;
/// let mut map = SplayTreeMap::new();
/// map.insert(1, 'a');
/// map.insert(2, 'b');
/// map.insert(3, 'c');
///
/// assert_eq!(map.get(&1), Some(&'a'));
/// assert_eq!(map.higher_entry(&1), Some((&2, &'b')));
/// ```
pub struct SplayTreeMap<K, V> {
    pub(crate) nodes: Arena<Node<K, V>>,
    pub(crate) root: Option<usize>,
    pub(crate) mods: ModCount,
}

impl<K, V> SplayTreeMap<K, V> {
    pub const fn new() -> SplayTreeMap<K, V> {
        SplayTreeMap {
            nodes: Arena::new(),
            root: None,
            mods: ModCount::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.mods.bump();
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.nodes, self.root, self.len())
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns the entry with the least key, without restructuring the tree.
    pub fn first_entry(&self) -> Option<(&K, &V)> {
        self.root.map(|root| self.entry(min(&self.nodes, root)))
    }

    /// Returns the entry with the greatest key, without restructuring the tree.
    pub fn last_entry(&self) -> Option<(&K, &V)> {
        self.root.map(|root| self.entry(max(&self.nodes, root)))
    }

    /// # Errors
    /// Returns [`EmptyContainer`] if the map is empty.
    pub fn first_key(&self) -> Result<&K, EmptyContainer> {
        self.first_entry().map(|(key, _)| key).ok_or(EmptyContainer)
    }

    /// # Errors
    /// Returns [`EmptyContainer`] if the map is empty.
    pub fn last_key(&self) -> Result<&K, EmptyContainer> {
        self.last_entry().map(|(key, _)| key).ok_or(EmptyContainer)
    }

    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let id = min(&self.nodes, self.root?);
        self.splay(id);
        self.remove_root(id)
    }

    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let id = max(&self.nodes, self.root?);
        self.splay(id);
        self.remove_root(id)
    }

    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|other| other == value)
    }

    pub(crate) fn root_key(&self) -> Option<&K> {
        self.root.map(|root| &self.nodes[root].key)
    }

    fn entry(&self, id: usize) -> (&K, &V) {
        let node = &self.nodes[id];
        (&node.key, &node.value)
    }

    /// Rotates `id` above its parent, keeping the in-order sequence intact.
    fn rotate(&mut self, id: usize) {
        let Some(parent) = self.nodes[id].parent else {
            return;
        };
        let grandparent = self.nodes[parent].parent;

        if self.nodes[parent].left == Some(id) {
            let inner = self.nodes[id].right;
            self.nodes[parent].left = inner;
            self.nodes[id].right = Some(parent);
            if let Some(inner) = inner {
                self.nodes[inner].parent = Some(parent);
            }
        } else {
            let inner = self.nodes[id].left;
            self.nodes[parent].right = inner;
            self.nodes[id].left = Some(parent);
            if let Some(inner) = inner {
                self.nodes[inner].parent = Some(parent);
            }
        }

        self.nodes[parent].parent = Some(id);
        self.nodes[id].parent = grandparent;
        match grandparent {
            Some(grandparent) if self.nodes[grandparent].left == Some(parent) => {
                self.nodes[grandparent].left = Some(id);
            },
            Some(grandparent) => self.nodes[grandparent].right = Some(id),
            None => self.root = Some(id),
        }
    }

    /// Moves `id` to the root of its tree.
    ///
    /// A node whose parent is the root takes a single rotation (zig). Otherwise, a node on the same
    /// side of its parent as the parent is of the grandparent first rotates the parent, then itself
    /// (zig-zig), while a node on the opposite side rotates itself twice (zig-zag).
    fn splay(&mut self, id: usize) {
        while let Some(parent) = self.nodes[id].parent {
            match self.nodes[parent].parent {
                None => self.rotate(id),
                Some(grandparent) => {
                    let parent_is_left = self.nodes[grandparent].left == Some(parent);
                    let node_is_left = self.nodes[parent].left == Some(id);
                    if parent_is_left == node_is_left {
                        self.rotate(parent);
                    } else {
                        self.rotate(id);
                    }
                    self.rotate(id);
                },
            }
        }
    }

    /// Removes `id`, which must be the root, joining its subtrees by splaying the greatest node on
    /// the left up to take its place.
    fn remove_root(&mut self, id: usize) -> Option<(K, V)> {
        let Node {
            key,
            value,
            left,
            right,
            ..
        } = self.nodes.remove(id)?;

        if let Some(right) = right {
            self.nodes[right].parent = None;
        }
        self.root = match left {
            Some(left) => {
                self.nodes[left].parent = None;
                self.root = Some(left);

                let joint = max(&self.nodes, left);
                self.splay(joint);
                self.nodes[joint].right = right;
                if let Some(right) = right {
                    self.nodes[right].parent = Some(joint);
                }
                Some(joint)
            },
            None => right,
        };

        self.mods.bump();
        Some((key, value))
    }
}

impl<K: Ord, V> SplayTreeMap<K, V> {
    /// Associates `value` with `key`, returning the value previously associated with it. Either
    /// way, the entry ends up at the root.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut parent = None;
        let mut next = self.root;
        let mut is_left = false;

        while let Some(id) = next {
            let node = &self.nodes[id];
            parent = Some(id);
            match key.cmp(&node.key) {
                Ordering::Less => {
                    is_left = true;
                    next = node.left;
                },
                Ordering::Greater => {
                    is_left = false;
                    next = node.right;
                },
                Ordering::Equal => {
                    let old = mem::replace(&mut self.nodes[id].value, value);
                    self.splay(id);
                    return Some(old);
                },
            }
        }

        let id = self.nodes.insert(Node::new(key, value, parent));
        match parent {
            Some(parent) if is_left => self.nodes[parent].left = Some(id),
            Some(parent) => self.nodes[parent].right = Some(id),
            None => self.root = Some(id),
        }
        self.splay(id);
        self.mods.bump();
        None
    }

    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.access(key)?;
        self.remove_root(id)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    pub fn get_entry<Q>(&mut self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.access(key)?;
        Some(self.entry(id))
    }

    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.access(key)?;
        Some(&self.nodes[id].value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.access(key)?;
        Some(&mut self.nodes[id].value)
    }

    /// Returns true if the map contains `key`. Unlike [`get`](SplayTreeMap::get), this leaves the
    /// tree as it is.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.locate(key).is_ok()
    }

    /// Returns the entry with the greatest key less than or equal to `key`.
    pub fn floor_entry<Q>(&mut self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.navigate_and_splay(key, true, true)?;
        Some(self.entry(id))
    }

    /// Returns the entry with the least key greater than or equal to `key`.
    pub fn ceiling_entry<Q>(&mut self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.navigate_and_splay(key, false, true)?;
        Some(self.entry(id))
    }

    /// Returns the entry with the greatest key strictly less than `key`.
    pub fn lower_entry<Q>(&mut self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.navigate_and_splay(key, true, false)?;
        Some(self.entry(id))
    }

    /// Returns the entry with the least key strictly greater than `key`.
    pub fn higher_entry<Q>(&mut self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.navigate_and_splay(key, false, false)?;
        Some(self.entry(id))
    }

    pub fn floor_key<Q>(&mut self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.floor_entry(key).map(|(key, _)| key)
    }

    pub fn ceiling_key<Q>(&mut self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.ceiling_entry(key).map(|(key, _)| key)
    }

    pub fn lower_key<Q>(&mut self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.lower_entry(key).map(|(key, _)| key)
    }

    pub fn higher_key<Q>(&mut self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.higher_entry(key).map(|(key, _)| key)
    }

    /// Returns a new map holding clones of every entry with a key strictly less than `to`.
    pub fn head_map<Q>(&self, to: &Q) -> SplayTreeMap<K, V>
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
    pub fn tail_map<Q>(&self, from: &Q) -> SplayTreeMap<K, V>
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

    /// Searches for `key`, returning [`Ok`] with its node, or [`Err`] with the last node visited
    /// on the way down.
    fn locate<Q>(&self, key: &Q) -> Result<usize, Option<usize>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut last = None;
        let mut next = self.root;

        while let Some(id) = next {
            last = Some(id);
            let node = &self.nodes[id];
            next = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Ok(id),
            };
        }
        Err(last)
    }

    /// Splays the node holding `key` to the root, or the last node visited when it is missing.
    fn access<Q>(&mut self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.locate(key) {
            Ok(id) => {
                self.splay(id);
                Some(id)
            },
            Err(last) => {
                if let Some(last) = last {
                    self.splay(last);
                }
                None
            },
        }
    }

    /// Finds the closest node `below` (or above) `key`, returning it along with the last node
    /// visited.
    fn navigate<Q>(&self, key: &Q, below: bool, inclusive: bool) -> (Option<usize>, Option<usize>)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut best = None;
        let mut last = None;
        let mut next = self.root;

        while let Some(id) = next {
            last = Some(id);
            let node = &self.nodes[id];
            next = match key.cmp(node.key.borrow()) {
                Ordering::Equal if inclusive => return (Some(id), last),
                Ordering::Greater if below => {
                    best = Some(id);
                    node.right
                },
                Ordering::Less if !below => {
                    best = Some(id);
                    node.left
                },
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal if below => node.left,
                Ordering::Equal => node.right,
            };
        }
        (best, last)
    }

    fn navigate_and_splay<Q>(&mut self, key: &Q, below: bool, inclusive: bool) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (best, last) = self.navigate(key, below, inclusive);
        if let Some(id) = best.or(last) {
            self.splay(id);
        }
        best
    }
}

impl<K: Ord, V> Container<K> for SplayTreeMap<K, V> {
    fn len(&self) -> usize {
        SplayTreeMap::len(self)
    }

    fn clear(&mut self) {
        SplayTreeMap::clear(self)
    }

    fn contains(&self, item: &K) -> bool {
        self.contains_key(item)
    }
}

impl<K: Ord, V> OrderedMap<K, V> for SplayTreeMap<K, V> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        SplayTreeMap::get(self, key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        SplayTreeMap::remove(self, key)
    }

    fn first_key(&self) -> Result<&K, EmptyContainer> {
        SplayTreeMap::first_key(self)
    }

    fn last_key(&self) -> Result<&K, EmptyContainer> {
        SplayTreeMap::last_key(self)
    }

    fn floor_key(&mut self, key: &K) -> Option<&K> {
        SplayTreeMap::floor_key(self, key)
    }

    fn ceiling_key(&mut self, key: &K) -> Option<&K> {
        SplayTreeMap::ceiling_key(self, key)
    }

    fn lower_key(&mut self, key: &K) -> Option<&K> {
        SplayTreeMap::lower_key(self, key)
    }

    fn higher_key(&mut self, key: &K) -> Option<&K> {
        SplayTreeMap::higher_key(self, key)
    }
}

impl<K, V> Sealed for SplayTreeMap<K, V> {}

impl<K: Ord, V> TreeNavigation<K, V> for SplayTreeMap<K, V> {
    fn next_entry(&self, key: Option<&K>) -> Option<(&K, &V)> {
        match key {
            Some(key) => self.navigate(key, false, false).0.map(|id| self.entry(id)),
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

impl<K, V> Default for SplayTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Extend<(K, V)> for SplayTreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SplayTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = SplayTreeMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Clone, V: Clone> Clone for SplayTreeMap<K, V> {
    fn clone(&self) -> Self {
        SplayTreeMap {
            nodes: self.nodes.clone(),
            root: self.root,
            mods: ModCount::new(),
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for SplayTreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for SplayTreeMap<K, V> {}

impl<K, V> IntoIterator for SplayTreeMap<K, V> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<K: Debug, V: Debug> Debug for SplayTreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let nodes = tree::draw(
            self.root,
            &|id: usize| (self.nodes[id].left, self.nodes[id].right),
            &|id: usize| format!("({:?}: {:?})", self.nodes[id].key, self.nodes[id].value),
        );

        f.debug_struct("SplayTreeMap")
            .field("nodes", &DebugRaw(format!("\n{nodes}\n")))
            .field("len", &self.len())
            .finish()
    }
}

impl<K: Display, V: Display> Display for SplayTreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_map(f, self.iter())
    }
}
