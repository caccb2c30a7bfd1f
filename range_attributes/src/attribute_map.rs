// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::{AttributeKey, AttributeValue};

/// A set of attributes, containing at most one value per key.
///
/// Insertion order is not significant: two maps holding the same key/value pairs are equal.
#[derive(Clone)]
pub struct AttributeMap<K = AttributeKey, V = AttributeValue>(HashMap<K, V>);

impl<K, V> AttributeMap<K, V> {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Returns the number of attributes in this map.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if this map has no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the attributes, in no particular order.
    pub fn iter(&self) -> hashbrown::hash_map::Iter<'_, K, V> {
        self.0.iter()
    }

    /// Iterate over the keys, in no particular order.
    pub fn keys(&self) -> hashbrown::hash_map::Keys<'_, K, V> {
        self.0.keys()
    }

    /// Remove every attribute, retaining allocated storage.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<K: Eq + Hash, V> AttributeMap<K, V> {
    /// Set `key` to `value`, returning the value it replaced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.0.insert(key, value)
    }

    /// Remove `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.0.remove(key)
    }

    /// Returns the value for `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.0.get(key)
    }

    /// Returns `true` if `key` is set.
    pub fn contains_key(&self, key: &K) -> bool {
        self.0.contains_key(key)
    }

    /// Copy every attribute of `other` into this map, overwriting values for shared keys.
    pub fn merge_from(&mut self, other: &Self)
    where
        K: Clone,
        V: Clone,
    {
        self.0
            .extend(other.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

impl<K, V> Default for AttributeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AttributeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for AttributeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K: Eq + Hash, V: Eq> Eq for AttributeMap<K, V> {}

impl<K: Eq + Hash, V> Extend<(K, V)> for AttributeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for AttributeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<K, V> IntoIterator for AttributeMap<K, V> {
    type Item = (K, V);
    type IntoIter = hashbrown::hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a AttributeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = hashbrown::hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
