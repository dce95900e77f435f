//! Shared read cache with invalidate-on-success mutations.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use crate::api::ApiResult;
use crate::query::cache::QueryCache;
use crate::query::key::QueryKey;

#[derive(Clone)]
pub struct QueryClient {
    cache: Arc<RwLock<QueryCache>>,
}

impl QueryClient {
    pub fn new(stale_after: Duration) -> Self {
        Self {
            cache: Arc::new(RwLock::new(QueryCache::new(stale_after))),
        }
    }

    /// Cached value when fresh, otherwise one network attempt.
    ///
    /// Failures are returned as-is and never cached.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> ApiResult<T>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        let cached = self.cache.read().get_fresh::<T>(&key);
        if let Some(hit) = cached {
            tracing::trace!(%key, "query cache hit");
            return Ok(hit);
        }
        self.refetch(key, fetcher).await
    }

    /// Always goes to the network; used by explicit retries.
    pub async fn refetch<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> ApiResult<T>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        match fetcher().await {
            Ok(value) => {
                self.cache.write().insert(key, value.clone());
                Ok(value)
            }
            Err(err) => {
                tracing::debug!(%key, error = %err, "query failed");
                Err(err)
            }
        }
    }

    /// Marks every key under any of `prefixes` stale.
    pub fn invalidate(&self, prefixes: &[QueryKey]) -> Vec<QueryKey> {
        let mut cache = self.cache.write();
        let mut touched: Vec<QueryKey> = Vec::new();
        for prefix in prefixes {
            for key in cache.invalidate(prefix) {
                if !touched.contains(&key) {
                    touched.push(key);
                }
            }
        }
        touched
    }

    /// Runs a write and, only when it succeeds, invalidates `invalidates`.
    pub async fn mutate<T, F, Fut>(&self, invalidates: &[QueryKey], op: F) -> ApiResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        let outcome = op().await?;
        let touched = self.invalidate(invalidates);
        tracing::debug!(invalidated = touched.len(), "mutation settled");
        Ok(outcome)
    }

    /// Last cached value, stale or not.
    #[cfg(test)]
    pub fn peek<T>(&self, key: &QueryKey) -> Option<T>
    where
        T: Clone + 'static,
    {
        self.cache.read().get(key)
    }

    #[cfg(test)]
    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.cache.read().is_stale(key)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::api::ApiError;

    fn client() -> QueryClient {
        QueryClient::new(Duration::from_secs(60))
    }

    #[tokio::test]
    async fn fresh_value_skips_the_network() {
        let client = client();
        let calls = AtomicUsize::new(0);
        let counter = &calls;
        let key = QueryKey::new("admin-users");

        for _ in 0..3 {
            let value = client
                .fetch(key.clone(), move || async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(42_u32)
                })
                .await
                .unwrap();
            assert_eq!(value, 42);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failures_are_not_retried_or_cached() {
        let client = client();
        let calls = AtomicUsize::new(0);
        let counter = &calls;
        let key = QueryKey::new("admin-products");

        let result: ApiResult<u32> = client
            .fetch(key.clone(), move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(ApiError::Unauthorized)
            })
            .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(client.peek::<u32>(&key), None);
    }

    #[tokio::test]
    async fn mutation_invalidates_only_on_success() {
        let client = client();
        let key = QueryKey::new("admin-schemes");
        client.fetch(key.clone(), || async { Ok(1_u8) }).await.unwrap();

        let failed: ApiResult<()> = client
            .mutate(&[QueryKey::new("admin-schemes")], || async {
                Err(ApiError::Rejected {
                    message: "nope".to_string(),
                })
            })
            .await;
        assert!(failed.is_err());
        assert!(!client.is_stale(&key));

        client
            .mutate(&[QueryKey::new("admin-schemes")], || async { Ok(()) })
            .await
            .unwrap();
        assert!(client.is_stale(&key));

        let calls = AtomicUsize::new(0);
        let counter = &calls;
        client
            .fetch(key.clone(), move || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(2_u8)
            })
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn invalidate_dedupes_overlapping_prefixes() {
        let client = client();
        client
            .cache
            .write()
            .insert(QueryKey::new("admin-orders-gold").with(0), 1_u8);
        let touched = client.invalidate(&[
            QueryKey::new("admin-orders-gold"),
            QueryKey::new("admin-orders-gold").with(0),
        ]);
        assert_eq!(touched.len(), 1);
    }
}
