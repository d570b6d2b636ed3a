//! HTTP entry point: loads `ServerConfig` from the environment, opens the
//! dataset registry, picks a feature source, and serves the route table on
//! a `rouille` worker pool sized to the host's parallelism.

use std::num::NonZeroUsize;

use chart_registry::Registry;
use chart_server::config::ServerConfig;
use chart_server::routes;
use chart_server::state::AppState;
use chart_sources::{FeatureSource, MbtilesSource, SqlSource, StubSource};

fn main() {
    env_logger::init();

    let config = ServerConfig::from_env();
    let registry = match Registry::open(&config.db_path) {
        Ok(r) => r,
        Err(e) => {
            log::error!(target: "chart_server", "failed to open registry at {}: {e}", config.db_path.display());
            std::process::exit(1);
        }
    };

    if let Err(e) = registry.populate_dictionary() {
        log::warn!(target: "chart_server", "failed to populate dictionary at startup: {e}");
    }

    let source = pick_source(&config);
    let bind_addr = config.bind_addr.clone();
    let pool_size = std::thread::available_parallelism().ok().map(NonZeroUsize::get);
    let state = AppState::new(config, registry, source);

    log::info!(target: "chart_server", "listening on {bind_addr}");
    rouille::start_server_with_pool(bind_addr, pool_size, move |request| routes::handle(request, &state));
}

/// Chooses a feature source: an explicit MBTiles file if configured, else a
/// SQL-backed source reading registry-ingested datasets directly, falling
/// back to the deterministic synthetic stub when neither is wired up (so
/// the server still answers tile requests against an empty dataset).
fn pick_source(config: &ServerConfig) -> Box<dyn FeatureSource + Send> {
    if config.mbtiles_path.is_some() {
        return Box::new(MbtilesSource::new());
    }
    if config.enc_dir.exists() {
        return Box::new(SqlSource::new());
    }
    Box::new(StubSource::new())
}
