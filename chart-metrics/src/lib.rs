//! Prometheus collectors for tile rendering, over a private
//! `CollectorRegistry` (not the process-wide default) so reimporting this
//! module never registers duplicate collectors.

use prometheus::{Counter, CounterVec, Encoder, Gauge, GaugeVec, HistogramVec, Opts, Registry, TextEncoder};

pub struct Metrics {
    registry: Registry,
    pub tile_render_seconds: HistogramVec,
    pub tile_bytes_total: CounterVec,
    pub tile_size_bytes: GaugeVec,
    pub process_resident_memory_bytes: Gauge,
    pub cache_hits_total: Counter,
    pub geotiff_cache_hits: Counter,
    pub geotiff_errors: Counter,
}

/// Tile-kind label values named in the route table: the renderer variant a
/// request was served by.
pub const KINDS: &[&str] = &["cm93-core", "cm93-label", "enc", "geotiff", "tile"];

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let tile_render_seconds = HistogramVec::new(
            prometheus::HistogramOpts::new("tile_render_seconds", "Latency for tile rendering in seconds"),
            &["kind"],
        )
        .expect("valid histogram opts");
        let tile_bytes_total = CounterVec::new(
            Opts::new("tile_bytes_total", "Total bytes returned for tiles"),
            &["kind"],
        )
        .expect("valid counter opts");
        let tile_size_bytes = GaugeVec::new(
            Opts::new("tile_size_bytes", "Size in bytes of the last response for this kind"),
            &["kind"],
        )
        .expect("valid gauge opts");
        let process_resident_memory_bytes =
            Gauge::new("process_resident_memory_bytes", "Resident memory size in bytes").expect("valid gauge opts");
        let cache_hits_total = Counter::new("cache_hits_total", "Total response cache hits").expect("valid counter opts");
        let geotiff_cache_hits =
            Counter::new("geotiff_cache_hits", "GeoTIFF raster cache hits").expect("valid counter opts");
        let geotiff_errors = Counter::new("geotiff_errors", "GeoTIFF raster rendering errors").expect("valid counter opts");

        registry.register(Box::new(tile_render_seconds.clone())).expect("register tile_render_seconds");
        registry.register(Box::new(tile_bytes_total.clone())).expect("register tile_bytes_total");
        registry.register(Box::new(tile_size_bytes.clone())).expect("register tile_size_bytes");
        registry
            .register(Box::new(process_resident_memory_bytes.clone()))
            .expect("register process_resident_memory_bytes");
        registry.register(Box::new(cache_hits_total.clone())).expect("register cache_hits_total");
        registry.register(Box::new(geotiff_cache_hits.clone())).expect("register geotiff_cache_hits");
        registry.register(Box::new(geotiff_errors.clone())).expect("register geotiff_errors");

        Self {
            registry,
            tile_render_seconds,
            tile_bytes_total,
            tile_size_bytes,
            process_resident_memory_bytes,
            cache_hits_total,
            geotiff_cache_hits,
            geotiff_errors,
        }
    }

    /// Records one completed render: latency, byte count, and last-size
    /// gauge for `kind`.
    pub fn observe_render(&self, kind: &str, seconds: f64, bytes: usize) {
        self.tile_render_seconds.with_label_values(&[kind]).observe(seconds);
        self.tile_bytes_total.with_label_values(&[kind]).inc_by(bytes as f64);
        self.tile_size_bytes.with_label_values(&[kind]).set(bytes as f64);
    }

    /// Render the registry's collectors in Prometheus text exposition
    /// format, suitable for the `/metrics` route body.
    pub fn gather(&self) -> String {
        let families = self.registry.gather();
        let encoder = TextEncoder::new();
        let mut buf = Vec::new();
        if let Err(e) = encoder.encode(&families, &mut buf) {
            log::warn!(target: "chart_metrics", "failed encoding metrics: {e}");
            return String::new();
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observe_render_updates_all_three_collectors() {
        let metrics = Metrics::new();
        metrics.observe_render("enc", 0.01, 2048);
        let text = metrics.gather();
        assert!(text.contains("tile_render_seconds"));
        assert!(text.contains("tile_bytes_total"));
        assert!(text.contains("tile_size_bytes"));
    }

    #[test]
    fn fresh_instance_has_zeroed_counters() {
        let metrics = Metrics::new();
        assert_eq!(metrics.cache_hits_total.get(), 0.0);
        assert_eq!(metrics.geotiff_errors.get(), 0.0);
    }

    #[test]
    fn reconstructing_metrics_does_not_panic_on_duplicate_registration() {
        let _first = Metrics::new();
        let _second = Metrics::new();
    }
}
