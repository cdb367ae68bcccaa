use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Keyed record storage behind the access-layer clients.
///
/// Lists come back ordered by key so every aggregation over them is
/// deterministic.
pub trait RecordStore<K, V>: Send + Sync {
    fn get(&self, key: &K) -> Option<V>;
    /// Replace the record under `key`, or insert it. Returns the previous value.
    fn upsert(&self, key: K, value: V) -> Option<V>;
    fn list(&self) -> Vec<V>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Drop every record (reseeding support).
    fn clear(&self);
}

impl<K, V, S> RecordStore<K, V> for Arc<S>
where
    S: RecordStore<K, V> + ?Sized,
{
    fn get(&self, key: &K) -> Option<V> {
        (**self).get(key)
    }

    fn upsert(&self, key: K, value: V) -> Option<V> {
        (**self).upsert(key, value)
    }

    fn list(&self) -> Vec<V> {
        (**self).list()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// In-memory record store for tests, samples, and the default binary.
///
/// A poisoned lock is recovered: reads and writes keep using the map a
/// panicking writer left behind.
#[derive(Debug)]
pub struct InMemoryRecordStore<K, V> {
    inner: RwLock<BTreeMap<K, V>>,
}

impl<K: Ord, V> InMemoryRecordStore<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<K: Ord, V> Default for InMemoryRecordStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for InMemoryRecordStore<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: RwLock::new(iter.into_iter().collect()),
        }
    }
}

impl<K, V> RecordStore<K, V> for InMemoryRecordStore<K, V>
where
    K: Ord + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, key: &K) -> Option<V> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn upsert(&self, key: K, value: V) -> Option<V> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, value)
    }

    fn list(&self) -> Vec<V> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn clear(&self) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_replaces_by_key() {
        let store = InMemoryRecordStore::<String, u32>::new();
        assert_eq!(store.upsert("a".to_string(), 1), None);
        assert_eq!(store.upsert("a".to_string(), 2), Some(1));
        assert_eq!(store.get(&"a".to_string()), Some(2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn list_is_key_ordered() {
        let store: InMemoryRecordStore<String, u32> =
            [("b".to_string(), 2), ("a".to_string(), 1)].into_iter().collect();
        assert_eq!(store.list(), vec![1, 2]);
    }

    #[test]
    fn shared_handle_sees_writes() {
        let store = Arc::new(InMemoryRecordStore::<u8, u8>::new());
        let handle = store.clone();
        handle.upsert(1, 10);
        assert_eq!(store.get(&1), Some(10));
        store.clear();
        assert!(handle.is_empty());
    }

    #[test]
    fn poisoned_lock_keeps_serving_records() {
        let store = Arc::new(InMemoryRecordStore::<u8, u32>::new());
        store.upsert(1, 10);

        let writer = store.clone();
        let panicked = std::thread::spawn(move || {
            let _guard = writer.inner.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(panicked.is_err());
        assert!(store.inner.is_poisoned());

        assert_eq!(store.upsert(2, 20), None);
        assert_eq!(store.list(), vec![10, 20]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&2), Some(20));

        store.clear();
        assert!(store.is_empty());
    }
}
