use super::*;
use crate::INT_INT_LOOKUP_MISS;
use crate::INT_LOOKUP_MISS;
use std::collections::HashMap;

/// Handle to integer table. Misses read as [`INT_LOOKUP_MISS`].
#[derive(Debug, Clone)]
pub struct IntLookup<K>
where
    K: Handle,
{
    inner: HashMap<K, i32>,
}

/// Integer to integer table. Misses read as [`INT_INT_LOOKUP_MISS`].
#[derive(Debug, Clone, Default)]
pub struct IntIntLookup {
    inner: HashMap<i32, i32>,
}

impl<K> Default for IntLookup<K>
where
    K: Handle,
{
    fn default() -> Self {
        Self {
            inner: HashMap::default(),
        }
    }
}

impl<K> IntLookup<K>
where
    K: Handle,
{
    pub fn new() -> Self {
        Self::default()
    }
    /// Stored value, or `0` when absent.
    pub fn get(&self, key: K) -> i32 {
        self.find(key).unwrap_or(INT_LOOKUP_MISS)
    }
    pub fn find(&self, key: K) -> Option<i32> {
        self.inner.get(&key).copied()
    }
    pub fn put(&mut self, key: K, value: i32) {
        self.inner.insert(key, value);
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
    pub fn iter(&self) -> impl Iterator<Item = (K, i32)> + '_ {
        self.cursor().map(|(k, v)| (k, *v))
    }
    pub fn cursor(&self) -> Cursor<'_, K, i32> {
        Cursor::new(&self.inner)
    }
}

impl IntIntLookup {
    pub fn new() -> Self {
        Self::default()
    }
    /// Stored value, or `-1` when absent.
    pub fn get(&self, key: i32) -> i32 {
        self.find(key).unwrap_or(INT_INT_LOOKUP_MISS)
    }
    pub fn find(&self, key: i32) -> Option<i32> {
        self.inner.get(&key).copied()
    }
    pub fn put(&mut self, key: i32, value: i32) {
        self.inner.insert(key, value);
    }
    pub fn exists(&self, key: i32) -> bool {
        self.inner.contains_key(&key)
    }
    pub fn len(&self) -> usize {
        self.inner.len()
    }
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cursor().map(|(k, v)| (k, *v))
    }
    pub fn cursor(&self) -> Cursor<'_, i32, i32> {
        Cursor::new(&self.inner)
    }
}

impl<K> FromIterator<(K, i32)> for IntLookup<K>
where
    K: Handle,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, i32)>,
    {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(i32, i32)> for IntIntLookup {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}
