//! Two-tier response cache: a fixed-capacity Tier-1 LRU per renderer
//! variant, and an optional Tier-2 external key-value store consulted
//! first on reads.
//!
//! Thread safety: Tier-1 is a mutex-protected `lru::LruCache`; Tier-2
//! implementations are expected to be thread-safe by contract (the `redis`
//! crate's blocking `Client` is). Single-flight is not implemented — callers
//! may race to render the same key under contention; cache puts are
//! idempotent so this has no correctness consequence (§5).

mod kv;
mod tier1;

use std::sync::Mutex;
use std::time::Duration;

pub use kv::{CacheError, NoopKv, TileKv};
#[cfg(feature = "redis-backend")]
pub use kv::RedisKv;
pub use tier1::Tier1Lru;

use chart_model::TileKey;
use sha1::{Digest, Sha1};

/// Outcome of a cache lookup, mirrored onto the `X-Tile-Cache` response
/// header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
    Stale,
}

impl CacheStatus {
    pub fn as_header_value(self) -> &'static str {
        match self {
            CacheStatus::Hit => "hit",
            CacheStatus::Miss => "miss",
            CacheStatus::Stale => "stale",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CachedResponse {
    pub bytes: Vec<u8>,
    pub etag: String,
    pub media_type: String,
}

impl CachedResponse {
    pub fn new(bytes: Vec<u8>, media_type: impl Into<String>) -> Self {
        let etag = compute_etag(&bytes);
        Self { bytes, etag, media_type: media_type.into() }
    }
}

/// SHA-1 over the response bytes, as a lowercase hex strong ETag.
pub fn compute_etag(bytes: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    format!("\"{:x}\"", digest)
}

/// Composes Tier-1 (always present) with an optional Tier-2 KV.
pub struct ResponseCache {
    tier1: Mutex<Tier1Lru>,
    tier2: Option<Box<dyn TileKv>>,
    tier2_ttl: Option<Duration>,
}

impl ResponseCache {
    pub fn new(tier1_capacity: usize) -> Self {
        Self { tier1: Mutex::new(Tier1Lru::new(tier1_capacity)), tier2: None, tier2_ttl: None }
    }

    pub fn with_tier2(mut self, kv: Box<dyn TileKv>, ttl: Option<Duration>) -> Self {
        self.tier2 = Some(kv);
        self.tier2_ttl = ttl;
        self
    }

    /// Look up a tile, consulting Tier-2 first when present. A Tier-2 read
    /// failure degrades silently to Tier-1-only (per §7, C7 hides KV faults
    /// from callers).
    pub fn get(&self, key: &TileKey) -> Option<CachedResponse> {
        let cache_key = key.to_cache_string();

        if let Some(tier2) = &self.tier2 {
            match tier2.get(&cache_key) {
                Ok(Some(bytes)) => return Some(bytes_to_response(bytes)),
                Ok(None) => {}
                Err(e) => log::warn!(target: "chart_cache", "tier2 get failed, degrading to tier1: {e}"),
            }
        }

        let mut tier1 = self.tier1.lock().expect("tier1 mutex poisoned");
        tier1.get(&cache_key).cloned()
    }

    /// Insert a freshly rendered tile into both tiers.
    pub fn put(&self, key: &TileKey, response: CachedResponse) {
        let cache_key = key.to_cache_string();

        if let Some(tier2) = &self.tier2 {
            if let Err(e) = tier2.put(&cache_key, &response.bytes, self.tier2_ttl) {
                log::warn!(target: "chart_cache", "tier2 put failed, continuing tier1-only: {e}");
            }
        }

        let mut tier1 = self.tier1.lock().expect("tier1 mutex poisoned");
        tier1.put(cache_key, response);
    }
}

fn bytes_to_response(bytes: Vec<u8>) -> CachedResponse {
    let etag = compute_etag(&bytes);
    CachedResponse { bytes, etag, media_type: "application/octet-stream".to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_model::ContourConfig;

    fn key() -> TileKey {
        TileKey::new("mvt", "ds1", 5, 3, 3, ContourConfig::default())
    }

    #[test]
    fn miss_then_hit() {
        let cache = ResponseCache::new(16);
        assert!(cache.get(&key()).is_none());
        cache.put(&key(), CachedResponse::new(vec![1, 2, 3], "application/x-protobuf"));
        let hit = cache.get(&key()).expect("should hit after put");
        assert_eq!(hit.bytes, vec![1, 2, 3]);
    }

    #[test]
    fn etag_equal_iff_bytes_equal() {
        let a = compute_etag(b"hello");
        let b = compute_etag(b"hello");
        let c = compute_etag(b"world");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
