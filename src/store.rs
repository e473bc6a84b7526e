//! Linear-scan associative container
//!
//! Entries live in a flat slot array. The live region is always `[0, len)`
//! and every slot past it is a tombstone. Removal moves the last live entry
//! into the hole, so the order of surviving keys can change after a remove.

use std::borrow::Borrow;
use std::fmt;

use crate::consts::DEFAULT_CAPACITY;
use crate::error::StoreError;

/// A key/value pair held in one slot
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Unique-key map backed by a doubling slot array
#[derive(Debug)]
pub struct KeyValueStore<K, V> {
    /// `None` marks a tombstone
    slots: Vec<Option<Entry<K, V>>>,
    len: usize,
}

impl<K, V> KeyValueStore<K, V> {
    /// Create an empty store with [`DEFAULT_CAPACITY`] slots
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty store with at least one slot
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(capacity.max(1), || None);
        Self { slots, len: 0 }
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots currently allocated
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Walk the live entries in slot order.
    ///
    /// Each call starts a fresh traversal from slot 0.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.slots[..self.len].iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Double the slot array, keeping every entry where it is
    fn expand(&mut self) {
        let capacity = self.slots.len() * 2;
        self.slots.resize_with(capacity, || None);
        log::trace!("store grew to {} slots", capacity);
    }
}

impl<K: PartialEq, V> KeyValueStore<K, V> {
    /// Associate `value` with `key`.
    ///
    /// An existing key keeps its slot and gets the new value. A new key is
    /// appended after the live region, growing the slot array when full.
    /// `None` is the absent-key marker and is rejected.
    pub fn set(&mut self, key: impl Into<Option<K>>, value: V) -> Result<(), StoreError> {
        let key = key.into().ok_or(StoreError::InvalidKey)?;
        self.insert(key, value);
        Ok(())
    }

    fn insert(&mut self, key: K, value: V) {
        if let Ok(index) = self.find(&key) {
            self.slots[index] = Some(Entry { key, value });
            return;
        }
        if self.len == self.slots.len() {
            self.expand();
        }
        self.slots[self.len] = Some(Entry { key, value });
        self.len += 1;
    }

    /// Slot index of `key`.
    ///
    /// The scan never looks past the live region, and it stops early on a
    /// tombstone.
    pub fn find<Q>(&self, key: &Q) -> Result<usize, StoreError>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        for (index, slot) in self.slots[..self.len].iter().enumerate() {
            match slot {
                None => break,
                Some(entry) if entry.key.borrow() == key => return Ok(index),
                Some(_) => {}
            }
        }
        Err(StoreError::KeyNotFound)
    }

    pub fn get<Q>(&self, key: &Q) -> Result<&V, StoreError>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let index = self.find(key)?;
        self.slots[index]
            .as_ref()
            .map(|entry| &entry.value)
            .ok_or(StoreError::KeyNotFound)
    }

    pub fn has_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.find(key).is_ok()
    }

    /// Swap-delete `key`, returning its value.
    ///
    /// The last live entry moves into the vacated slot and its old slot
    /// becomes a tombstone. Removing an absent key does nothing.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let index = self.find(key).ok()?;
        let last = self.len - 1;
        self.slots.swap(index, last);
        self.len = last;
        self.slots[last].take().map(|entry| entry.value)
    }
}

impl<K, V> Default for KeyValueStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for KeyValueStore<K, V> {
    /// Copies the live entries into fresh storage of the same capacity
    fn clone(&self) -> Self {
        let mut slots: Vec<Option<Entry<K, V>>> = self.slots[..self.len].to_vec();
        slots.resize_with(self.slots.len(), || None);
        Self {
            slots,
            len: self.len,
        }
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for KeyValueStore<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (key, value) in iter {
            store.insert(key, value);
        }
        store
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for KeyValueStore<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        write!(f, "}}")
    }
}

/// Iterator over the live entries of a [`KeyValueStore`]
pub struct Iter<'a, K, V> {
    inner: std::slice::Iter<'a, Option<Entry<K, V>>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .and_then(Option::as_ref)
            .map(|entry| (&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> IntoIterator for &'a KeyValueStore<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
