//! Metrics recording implementation using Prometheus.

use prometheus::{
    CounterVec, Encoder, Histogram, HistogramOpts, Opts, Registry, TextEncoder,
    register_counter_vec_with_registry, register_histogram_with_registry,
};
use std::sync::Arc;

/// Trait for recording application metrics.
pub trait MetricsRecorder: Clone + Send + Sync + 'static {
    /// Records a login form submission with its outcome.
    fn record_login_attempt(&self, result: &str);

    /// Records a form that failed validation.
    fn record_validation_failure(&self, form: &str);

    /// Records one catalog load against the remote API.
    fn record_fetch(&self, result: &str, duration_secs: f64);
}

/// Prometheus metrics collector.
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,

    // Session metrics
    login_attempts_total: CounterVec,
    validation_failures_total: CounterVec,

    // Remote API metrics
    fetch_total: CounterVec,
    fetch_duration_seconds: Histogram,
}

impl Metrics {
    /// Creates a new metrics instance with a Prometheus registry.
    pub fn new() -> Self {
        let registry = Arc::new(Registry::new());

        let login_attempts_total = register_counter_vec_with_registry!(
            Opts::new("login_attempts_total", "Total number of login submissions"),
            &["result"],
            registry.clone()
        )
        .expect("Failed to register login_attempts_total");

        let validation_failures_total = register_counter_vec_with_registry!(
            Opts::new(
                "validation_failures_total",
                "Form submissions rejected by validation"
            ),
            &["form"],
            registry.clone()
        )
        .expect("Failed to register validation_failures_total");

        let fetch_total = register_counter_vec_with_registry!(
            Opts::new("pokeapi_fetch_total", "Catalog loads from the remote API"),
            &["result"],
            registry.clone()
        )
        .expect("Failed to register pokeapi_fetch_total");

        let fetch_duration_seconds = register_histogram_with_registry!(
            HistogramOpts::new(
                "pokeapi_fetch_duration_seconds",
                "Duration of a full listing plus detail fan-out in seconds"
            )
            .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
            registry.clone()
        )
        .expect("Failed to register pokeapi_fetch_duration_seconds");

        Metrics {
            registry,
            login_attempts_total,
            validation_failures_total,
            fetch_total,
            fetch_duration_seconds,
        }
    }

    /// Renders all metrics in Prometheus text format.
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .expect("Failed to encode metrics");
        String::from_utf8(buffer).expect("Metrics encoding produced invalid UTF-8")
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder for Metrics {
    fn record_login_attempt(&self, result: &str) {
        self.login_attempts_total.with_label_values(&[result]).inc();
    }

    fn record_validation_failure(&self, form: &str) {
        self.validation_failures_total
            .with_label_values(&[form])
            .inc();
    }

    fn record_fetch(&self, result: &str, duration_secs: f64) {
        self.fetch_total.with_label_values(&[result]).inc();
        self.fetch_duration_seconds.observe(duration_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_includes_recorded_series() {
        let metrics = Metrics::new();
        metrics.record_login_attempt("success");
        metrics.record_validation_failure("signup");
        metrics.record_fetch("error", 0.2);

        let text = metrics.render();
        assert!(text.contains(r#"login_attempts_total{result="success"} 1"#));
        assert!(text.contains(r#"validation_failures_total{form="signup"} 1"#));
        assert!(text.contains(r#"pokeapi_fetch_total{result="error"} 1"#));
        assert!(text.contains("pokeapi_fetch_duration_seconds_count 1"));
    }

    #[test]
    fn test_instances_do_not_share_a_registry() {
        let first = Metrics::new();
        let second = Metrics::new();
        first.record_login_attempt("success");
        assert!(!second.render().contains(r#"result="success"} 1"#));
    }
}
