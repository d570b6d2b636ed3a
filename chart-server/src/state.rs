//! Shared application state: one embedded registry connection, the
//! response cache, the feature source, and the metrics registry — created
//! once at startup and handed to every request as an `Arc`.

use std::sync::Mutex;

use chart_cache::ResponseCache;
use chart_catalogue::dict;
use chart_metrics::Metrics;
use chart_registry::Registry;
use chart_sources::FeatureSource;

use crate::config::ServerConfig;

pub struct AppState {
    pub config: ServerConfig,
    pub registry: Registry,
    pub cache: ResponseCache,
    pub metrics: Metrics,
    pub source: Mutex<Box<dyn FeatureSource + Send>>,
}

impl AppState {
    pub fn new(config: ServerConfig, registry: Registry, source: Box<dyn FeatureSource + Send>) -> Self {
        let cache = ResponseCache::new(config.mbtiles_cache_size);
        #[cfg(feature = "redis-backend")]
        let cache = match &config.redis_url {
            Some(url) => match chart_cache::RedisKv::connect(url) {
                Ok(kv) => {
                    let ttl = config.redis_ttl_secs.map(std::time::Duration::from_secs);
                    cache.with_tier2(Box::new(kv), ttl)
                }
                Err(e) => {
                    log::warn!(target: "chart_server", "failed connecting to Redis tier2, continuing tier1-only: {e}");
                    cache
                }
            },
            None => cache,
        };

        Self { config, registry, cache, metrics: Metrics::new(), source: Mutex::new(source) }
    }

    /// Lazily (re)populates and reads back the CM93 object-class dictionary.
    pub fn dictionary_json(&self) -> serde_json::Value {
        if let Err(e) = self.registry.populate_dictionary() {
            log::warn!(target: "chart_server", "failed populating dictionary: {e}");
        }
        match self.registry.load_dictionary() {
            Ok(dict) => serde_json::json!({
                "objectClasses": dict.object_classes,
                "attributeClasses": dict.attribute_classes,
                "metadata": dict.metadata,
            }),
            Err(e) => {
                log::warn!(target: "chart_server", "failed loading dictionary: {e}");
                serde_json::json!({ "objectClasses": [], "attributeClasses": [], "metadata": [] })
            }
        }
    }

    pub fn objl_code(&self, objl: &str) -> Option<u16> {
        dict::code_for(objl)
    }
}
