//! Fixed-capacity in-process LRU, one instance per renderer variant.

use lru::LruCache;
use std::num::NonZeroUsize;

use crate::CachedResponse;

pub struct Tier1Lru {
    cache: LruCache<String, CachedResponse>,
}

impl Tier1Lru {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self { cache: LruCache::new(capacity) }
    }

    pub fn get(&mut self, key: &str) -> Option<&CachedResponse> {
        self.cache.get(key)
    }

    pub fn put(&mut self, key: String, value: CachedResponse) {
        self.cache.put(key, value);
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_least_recently_used() {
        let mut lru = Tier1Lru::new(2);
        lru.put("a".into(), CachedResponse::new(vec![1], "x"));
        lru.put("b".into(), CachedResponse::new(vec![2], "x"));
        lru.get("a");
        lru.put("c".into(), CachedResponse::new(vec![3], "x"));
        assert!(lru.get("b").is_none());
        assert!(lru.get("a").is_some());
        assert!(lru.get("c").is_some());
    }
}
