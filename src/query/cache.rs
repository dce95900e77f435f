use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::query::key::QueryKey;

struct Entry {
    value: Arc<dyn Any + Send + Sync>,
    fetched_at: Instant,
    invalidated: bool,
}

impl Entry {
    fn is_fresh(&self, stale_after: Duration) -> bool {
        !self.invalidated && self.fetched_at.elapsed() < stale_after
    }
}

/// Last successful result per key.
///
/// Values are stored type-erased; a lookup with the wrong type is a miss.
pub struct QueryCache {
    entries: HashMap<QueryKey, Entry>,
    stale_after: Duration,
}

impl QueryCache {
    pub fn new(stale_after: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stale_after,
        }
    }

    /// Value for `key` if it is still fresh.
    pub fn get_fresh<T>(&self, key: &QueryKey) -> Option<T>
    where
        T: Clone + 'static,
    {
        self.entries
            .get(key)
            .filter(|entry| entry.is_fresh(self.stale_after))
            .and_then(|entry| entry.value.downcast_ref::<T>())
            .cloned()
    }

    /// Value for `key` regardless of freshness.
    pub fn get<T>(&self, key: &QueryKey) -> Option<T>
    where
        T: Clone + 'static,
    {
        self.entries
            .get(key)
            .and_then(|entry| entry.value.downcast_ref::<T>())
            .cloned()
    }

    pub fn insert<T>(&mut self, key: QueryKey, value: T)
    where
        T: Send + Sync + 'static,
    {
        self.entries.insert(
            key,
            Entry {
                value: Arc::new(value),
                fetched_at: Instant::now(),
                invalidated: false,
            },
        );
    }

    /// Marks every entry under `prefix` stale and returns the affected keys.
    pub fn invalidate(&mut self, prefix: &QueryKey) -> Vec<QueryKey> {
        let mut touched = Vec::new();
        for (key, entry) in self.entries.iter_mut() {
            if key.starts_with(prefix) {
                entry.invalidated = true;
                touched.push(key.clone());
            }
        }
        touched
    }

    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.entries
            .get(key)
            .map_or(true, |entry| !entry.is_fresh(self.stale_after))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_entries_hit_until_invalidated() {
        let mut cache = QueryCache::new(Duration::from_secs(60));
        let key = QueryKey::new("admin-users");
        cache.insert(key.clone(), vec!["a".to_string()]);

        assert_eq!(cache.get_fresh::<Vec<String>>(&key), Some(vec!["a".to_string()]));
        assert!(!cache.is_stale(&key));

        let touched = cache.invalidate(&QueryKey::new("admin-users"));
        assert_eq!(touched, vec![key.clone()]);
        assert!(cache.is_stale(&key));
        assert_eq!(cache.get_fresh::<Vec<String>>(&key), None);
        assert_eq!(cache.get::<Vec<String>>(&key), Some(vec!["a".to_string()]));
    }

    #[test]
    fn wrong_type_is_a_miss() {
        let mut cache = QueryCache::new(Duration::from_secs(60));
        let key = QueryKey::new("admin-schemes");
        cache.insert(key.clone(), 7_u32);
        assert_eq!(cache.get_fresh::<String>(&key), None);
        assert_eq!(cache.get_fresh::<u32>(&key), Some(7));
    }

    #[test]
    fn zero_window_is_always_stale() {
        let mut cache = QueryCache::new(Duration::ZERO);
        let key = QueryKey::new("admin-products");
        cache.insert(key.clone(), 1_u8);
        assert!(cache.is_stale(&key));
        assert!(cache.is_stale(&QueryKey::new("missing")));
    }

    #[test]
    fn invalidation_leaves_other_roots_alone() {
        let mut cache = QueryCache::new(Duration::from_secs(60));
        cache.insert(QueryKey::new("admin-orders-gold").with(0), 1_u8);
        cache.insert(QueryKey::new("admin-orders-gold").with(50), 2_u8);
        cache.insert(QueryKey::new("admin-orders-silver").with(0), 3_u8);

        let mut touched = cache.invalidate(&QueryKey::new("admin-orders-gold"));
        touched.sort_by(|a, b| a.segments().cmp(b.segments()));
        assert_eq!(touched.len(), 2);
        assert!(!cache.is_stale(&QueryKey::new("admin-orders-silver").with(0)));
    }
}
