//! Tier-2 external key-value store trait, with a no-op default and an
//! optional Redis-backed implementation.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("external cache I/O error: {0}")]
    Io(String),
}

pub trait TileKv: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;
    fn put(&self, key: &str, val: &[u8], ttl: Option<Duration>) -> Result<(), CacheError>;
}

/// Used when no external KV is configured — the core compiles and runs
/// without one (§9's "optional dependencies get a no-op implementation").
pub struct NoopKv;

impl TileKv for NoopKv {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(None)
    }

    fn put(&self, _key: &str, _val: &[u8], _ttl: Option<Duration>) -> Result<(), CacheError> {
        Ok(())
    }
}

#[cfg(feature = "redis-backend")]
pub struct RedisKv {
    client: redis::Client,
}

#[cfg(feature = "redis-backend")]
impl RedisKv {
    pub fn connect(url: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(url).map_err(|e| CacheError::Io(e.to_string()))?;
        Ok(Self { client })
    }
}

#[cfg(feature = "redis-backend")]
impl TileKv for RedisKv {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        use redis::Commands;
        let mut conn = self.client.get_connection().map_err(|e| CacheError::Io(e.to_string()))?;
        conn.get(key).map_err(|e| CacheError::Io(e.to_string()))
    }

    fn put(&self, key: &str, val: &[u8], ttl: Option<Duration>) -> Result<(), CacheError> {
        use redis::Commands;
        let mut conn = self.client.get_connection().map_err(|e| CacheError::Io(e.to_string()))?;
        match ttl {
            Some(ttl) => conn
                .set_ex::<_, _, ()>(key, val, ttl.as_secs())
                .map_err(|e| CacheError::Io(e.to_string())),
            None => conn.set::<_, _, ()>(key, val).map_err(|e| CacheError::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_always_misses() {
        let kv = NoopKv;
        assert_eq!(kv.get("x").unwrap(), None);
        assert!(kv.put("x", b"y", None).is_ok());
    }
}
