use super::*;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Owning handle-keyed table.
///
/// The table is the sole owner of its values. A value is dropped exactly
/// once: when [`put`](Self::put) replaces it, or when the table itself is
/// dropped. References handed out by [`get`](Self::get) and
/// [`get_or_create`](Self::get_or_create) borrow the table, so they cannot
/// outlive a later overwrite of the same key.
#[derive(Debug, Clone)]
pub struct Lookup<K, T>
where
    K: Handle,
{
    inner: HashMap<K, T>,
}

impl<K, T> Default for Lookup<K, T>
where
    K: Handle,
{
    fn default() -> Self {
        Self {
            inner: HashMap::default(),
        }
    }
}

impl<K, T> Lookup<K, T>
where
    K: Handle,
{
    pub fn new() -> Self {
        Self::default()
    }
    /// Stored value, never constructing on a miss.
    pub fn get(&self, key: K) -> Option<&T> {
        self.inner.get(&key)
    }
    pub fn get_mut(&mut self, key: K) -> Option<&mut T> {
        self.inner.get_mut(&key)
    }
    /// Insert or replace. A replaced value is dropped before the new one
    /// takes its slot.
    pub fn put(&mut self, key: K, value: T) {
        match self.inner.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(mut slot) => {
                log::trace!("replacing owned value at {:?}", key);
                *slot.get_mut() = value;
            }
        }
    }
    pub fn exists(&self, key: K) -> bool {
        self.inner.contains_key(&key)
    }
    pub fn len(&self) -> usize {
        self.inner.len()
    }
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (K, &T)> + '_ {
        self.cursor()
    }
    pub fn cursor(&self) -> Cursor<'_, K, T> {
        Cursor::new(&self.inner)
    }
    /// Stored value, or the result of `f` inserted under `key` first.
    pub(crate) fn get_or_insert_with<F>(&mut self, key: K, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.inner.entry(key).or_insert_with(f)
    }
}

impl<K, T> Lookup<K, T>
where
    K: Handle,
    T: Default,
{
    /// Stored value, or a fresh `T::default()` inserted under `key` first.
    pub fn get_or_create(&mut self, key: K) -> &mut T {
        self.get_or_insert_with(key, T::default)
    }
}

impl<'a, K, T> IntoIterator for &'a Lookup<K, T>
where
    K: Handle,
{
    type Item = (K, &'a T);
    type IntoIter = Cursor<'a, K, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

impl<K, T> FromIterator<(K, T)> for Lookup<K, T>
where
    K: Handle,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
    {
        let mut lookup = Self::default();
        for (key, value) in iter {
            lookup.put(key, value);
        }
        lookup
    }
}
