/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::borrow::Borrow;

use alloc::collections::btree_map::{self, BTreeMap};

pub type Iter<'a, K, V> = btree_map::Iter<'a, K, V>;

/// Map with deterministic, key-sorted iteration order.
///
/// Serializing a table must be reproducible between runs, so a hash map
/// backing is not an option here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<K, V>
where
    K: Ord,
{
    inner: BTreeMap<K, V>,
}

impl<K, V> OrderedMap<K, V>
where
    K: Ord,
{
    pub const fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.inner.insert(key, value)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.inner.get(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, K, V> {
        self.inner.iter()
    }
}

impl<K, V> Default for OrderedMap<K, V>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V>
where
    K: Ord,
{
    type Item = (&'a K, &'a V);
    type IntoIter = btree_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
