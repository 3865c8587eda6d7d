use super::Container;
use crate::util::error::EmptyContainer;

/// A map with keys kept in ascending order.
///
/// Lookups take `&mut self` because some implementors (namely
/// [`SplayTreeMap`](crate::collections::binary_tree::SplayTreeMap)) restructure themselves on
/// every access. The contents are never changed by a lookup.
pub trait OrderedMap<K: Ord, V>: Container<K> {
    /// Associates `value` with `key`, returning the value previously associated with it.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    fn get(&mut self, key: &K) -> Option<&V>;

    fn remove(&mut self, key: &K) -> Option<V>;

    fn first_key(&self) -> Result<&K, EmptyContainer>;

    fn last_key(&self) -> Result<&K, EmptyContainer>;

    /// Returns the greatest key less than or equal to `key`.
    fn floor_key(&mut self, key: &K) -> Option<&K>;

    /// Returns the least key greater than or equal to `key`.
    fn ceiling_key(&mut self, key: &K) -> Option<&K>;

    /// Returns the greatest key strictly less than `key`.
    fn lower_key(&mut self, key: &K) -> Option<&K>;

    /// Returns the least key strictly greater than `key`.
    fn higher_key(&mut self, key: &K) -> Option<&K>;
}
