use super::*;
use std::collections::HashMap;
use std::collections::hash_map::Iter;

/// Resettable walk over the entries of a table.
///
/// Yields `(handle, &value)` pairs for every entry present when the walk
/// started. [`reset`](Self::reset) rewinds to the first entry, so one cursor
/// can replay the table any number of times. The borrow on the table rules
/// out structural changes while a cursor is alive.
pub struct Cursor<'a, K, V>
where
    K: Handle,
{
    map: &'a HashMap<K, V>,
    iter: Iter<'a, K, V>,
}

impl<'a, K, V> Cursor<'a, K, V>
where
    K: Handle,
{
    pub(crate) fn new(map: &'a HashMap<K, V>) -> Self {
        Self {
            map,
            iter: map.iter(),
        }
    }
    /// Rewind to the first entry.
    pub fn reset(&mut self) {
        self.iter = self.map.iter();
    }
}

impl<'a, K, V> Iterator for Cursor<'a, K, V>
where
    K: Handle,
{
    type Item = (K, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(k, v)| (*k, v))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<K, V> Clone for Cursor<'_, K, V>
where
    K: Handle,
{
    fn clone(&self) -> Self {
        Self {
            map: self.map,
            iter: self.iter.clone(),
        }
    }
}

impl<K, V> ExactSizeIterator for Cursor<'_, K, V> where K: Handle {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_replays_everything() {
        let map = (0..5usize).map(|k| (k, k * 10)).collect::<HashMap<_, _>>();
        let mut cursor = Cursor::new(&map);
        let first = cursor.by_ref().take(2).collect::<Vec<_>>();
        assert_eq!(first.len(), 2);
        assert_eq!(cursor.len(), 3);
        cursor.reset();
        let mut all = cursor.map(|(k, v)| (k, *v)).collect::<Vec<_>>();
        all.sort();
        assert_eq!(all, vec![(0, 0), (1, 10), (2, 20), (3, 30), (4, 40)]);
    }

    #[test]
    fn empty_is_finite() {
        let map = HashMap::<u32, ()>::new();
        let mut cursor = Cursor::new(&map);
        assert!(cursor.next().is_none());
        cursor.reset();
        assert!(cursor.next().is_none());
    }
}
