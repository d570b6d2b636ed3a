//! Server configuration sourced from environment variables, per the
//! original implementation's flag surface.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub db_path: PathBuf,
    pub data_dir: PathBuf,
    pub enc_dir: PathBuf,
    pub mbtiles_path: Option<PathBuf>,
    pub mbtiles_cache_size: usize,
    pub geo_lru_size: usize,
    pub geo_webp: bool,
    pub raster_mvp: bool,
    pub import_api_enabled: bool,
    pub osm_use_community: bool,
    pub opencm_cm93_cli: Option<String>,
    pub redis_url: Option<String>,
    pub redis_ttl_secs: Option<u64>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:8080"),
            db_path: PathBuf::from(env_or("REGISTRY_DB", "charts.sqlite")),
            data_dir: PathBuf::from(env_or("DATA_DIR", "./data")),
            enc_dir: PathBuf::from(env_or("ENC_DIR", "./data/enc")),
            mbtiles_path: std::env::var("MBTILES_PATH").ok().map(PathBuf::from),
            mbtiles_cache_size: env_parse("MBTILES_CACHE_SIZE", 256),
            geo_lru_size: env_parse("GEO_LRU_SIZE", 64),
            geo_webp: env_flag("GEO_WEBP"),
            raster_mvp: env_flag("RASTER_MVP"),
            import_api_enabled: env_flag("IMPORT_API_ENABLED"),
            osm_use_community: env_flag("OSM_USE_COMMUNITY"),
            opencm_cm93_cli: std::env::var("OPENCN_CM93_CLI").ok(),
            redis_url: std::env::var("REDIS_URL").ok(),
            redis_ttl_secs: std::env::var("REDIS_TTL").ok().and_then(|s| s.parse().ok()),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key).ok().and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn env_flag(key: &str) -> bool {
    matches!(std::env::var(key).as_deref(), Ok("1") | Ok("true") | Ok("yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        std::env::remove_var("GEO_WEBP");
        let cfg = ServerConfig::from_env();
        assert!(!cfg.geo_webp);
        assert_eq!(cfg.mbtiles_cache_size, 256);
    }
}
