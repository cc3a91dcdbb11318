use super::*;
use std::collections::HashMap;

/// Non-owning handle-keyed table.
///
/// Stores shared references whose referents belong to the caller. Dropping
/// or overwriting an entry never drops the referent; the `'a` bound makes
/// every referent outlive the table.
#[derive(Debug, Clone)]
pub struct LookupRef<'a, K, T>
where
    K: Handle,
{
    inner: HashMap<K, &'a T>,
}

impl<K, T> Default for LookupRef<'_, K, T>
where
    K: Handle,
{
    fn default() -> Self {
        Self {
            inner: HashMap::default(),
        }
    }
}

impl<'a, K, T> LookupRef<'a, K, T>
where
    K: Handle,
{
    pub fn new() -> Self {
        Self::default()
    }
    pub fn get(&self, key: K) -> Option<&'a T> {
        self.inner.get(&key).copied()
    }
    pub fn put(&mut self, key: K, value: &'a T) {
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
    pub fn iter(&self) -> impl Iterator<Item = (K, &'a T)> + '_ {
        self.cursor().map(|(k, v)| (k, *v))
    }
    pub fn cursor(&self) -> Cursor<'_, K, &'a T> {
        Cursor::new(&self.inner)
    }
}

impl<'s, 'a, K, T> IntoIterator for &'s LookupRef<'a, K, T>
where
    K: Handle,
{
    type Item = (K, &'s &'a T);
    type IntoIter = Cursor<'s, K, &'a T>;
    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

impl<'a, K, T> FromIterator<(K, &'a T)> for LookupRef<'a, K, T>
where
    K: Handle,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, &'a T)>,
    {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}
