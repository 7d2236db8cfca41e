use crate::error::Result;
use crate::models::Coordinates;
use crate::services::directions::{DirectionsLeg, DirectionsProvider};
use async_trait::async_trait;
use moka::future::Cache;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Caching decorator over any [`DirectionsProvider`], backed by moka with
/// TTL and bounded capacity. All methods are `&self`; no locking needed.
///
/// Only successful legs are cached. Provider failures pass through so the
/// composer's fallback logic sees them every time.
pub struct CachedDirections {
    inner: Arc<dyn DirectionsProvider>,
    legs: Cache<String, Arc<DirectionsLeg>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CachedDirections {
    pub fn new(inner: Arc<dyn DirectionsProvider>, ttl_seconds: u64, max_capacity: u64) -> Self {
        let legs = Cache::builder()
            .time_to_live(Duration::from_secs(ttl_seconds))
            .max_capacity(max_capacity)
            .build();

        CachedDirections {
            inner,
            legs,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let hit_rate = if hits + misses > 0 {
            (hits as f64 / (hits + misses) as f64) * 100.0
        } else {
            0.0
        };
        CacheStats {
            hits,
            misses,
            hit_rate,
        }
    }
}

/// Cache key for a leg: endpoint coordinates rounded to 4 decimal places
/// (~10 m), so requests between effectively identical points share an entry.
fn leg_cache_key(from: &Coordinates, to: &Coordinates) -> String {
    let from = from.round(4);
    let to = to.round(4);
    format!("leg:{:.4},{:.4}:{:.4},{:.4}", from.lat, from.lng, to.lat, to.lng)
}

#[async_trait]
impl DirectionsProvider for CachedDirections {
    async fn walking_directions(
        &self,
        from: Coordinates,
        to: Coordinates,
    ) -> Result<DirectionsLeg> {
        let key = leg_cache_key(&from, &to);

        if let Some(leg) = self.legs.get(&key).await {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::debug!("Directions cache hit: {}", key);
            return Ok((*leg).clone());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::debug!("Directions cache miss: {}", key);

        let leg = self.inner.walking_directions(from, to).await?;
        self.legs.insert(key, Arc::new(leg.clone())).await;
        Ok(leg)
    }
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
}
