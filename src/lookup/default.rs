use super::*;

/// Value-copy table with a default for every handle.
///
/// Reads are memoizing: [`get`](Self::get) on an absent handle first stores
/// a clone of the default under that handle and then returns a clone of
/// the stored value. Later reads of the same handle see that pinned copy,
/// so `get` needs `&mut self` even though callers use it as a read.
/// [`peek`](Self::peek) is the side-effect free variant.
#[derive(Debug, Clone)]
pub struct DefaultLookup<K, T>
where
    K: Handle,
    T: Clone,
{
    lookup: Lookup<K, T>,
    default: T,
}

impl<K, T> Default for DefaultLookup<K, T>
where
    K: Handle,
    T: Clone + Default,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<K, T> DefaultLookup<K, T>
where
    K: Handle,
    T: Clone,
{
    pub fn new(default: T) -> Self {
        Self {
            lookup: Lookup::default(),
            default,
        }
    }
    pub fn default_value(&self) -> &T {
        &self.default
    }
    /// Stored value, materializing the default on first read.
    pub fn get(&mut self, key: K) -> T {
        let ref default = self.default;
        self.lookup
            .get_or_insert_with(key, || {
                log::trace!("materializing default at {:?}", key);
                default.clone()
            })
            .clone()
    }
    /// Stored value, or the default without storing it.
    pub fn peek(&self, key: K) -> T {
        self.lookup
            .get(key)
            .unwrap_or(&self.default)
            .clone()
    }
    pub fn put(&mut self, key: K, value: T) {
        self.lookup.put(key, value);
    }
    /// True for handles that were `put` or already read through `get`.
    pub fn exists(&self, key: K) -> bool {
        self.lookup.exists(key)
    }
    pub fn len(&self) -> usize {
        self.lookup.len()
    }
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (K, T)> + '_ {
        self.lookup.iter().map(|(k, v)| (k, v.clone()))
    }
    pub fn cursor(&self) -> Cursor<'_, K, T> {
        self.lookup.cursor()
    }
}
