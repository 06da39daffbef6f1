//! Metrics collection for seqfill
//!
//! Prometheus counters and a duration histogram for sequence generation,
//! registered in a crate-local registry.

use crate::core::Result;
use once_cell::sync::Lazy;
use prometheus::{
    register_histogram_with_registry, register_int_counter_with_registry, Histogram, IntCounter,
    Registry,
};
use std::time::Instant;

/// Global metrics registry
static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// Counters and timings for fill operations
pub struct Metrics {
    /// Total number of successful fills
    pub fills: IntCounter,
    /// Total number of fills rejected before writing
    pub fill_failures: IntCounter,
    /// Total number of elements written
    pub elements_written: IntCounter,
    /// Histogram of fill durations in seconds
    pub fill_duration: Histogram,
}

impl Metrics {
    /// Create new metrics instance
    fn new(registry: &Registry) -> Result<Self> {
        Ok(Self {
            fills: register_int_counter_with_registry!(
                "seqfill_fills_total",
                "Total number of successful sequence fills",
                registry
            )?,
            fill_failures: register_int_counter_with_registry!(
                "seqfill_fill_failures_total",
                "Total number of sequence fills that failed",
                registry
            )?,
            elements_written: register_int_counter_with_registry!(
                "seqfill_elements_written_total",
                "Total number of sequence elements written",
                registry
            )?,
            fill_duration: register_histogram_with_registry!(
                "seqfill_fill_duration_seconds",
                "Duration of sequence fills in seconds",
                vec![0.000_001, 0.000_01, 0.000_1, 0.001, 0.01, 0.1, 1.0],
                registry
            )?,
        })
    }

    /// Get the global metrics instance
    pub fn global() -> &'static Metrics {
        static INSTANCE: Lazy<Metrics> = Lazy::new(|| {
            Metrics::new(&REGISTRY).expect("Failed to initialize metrics")
        });
        &INSTANCE
    }

    /// Record the outcome of one fill
    pub fn record_fill(&self, elements: usize, ok: bool) {
        if ok {
            self.fills.inc();
            self.elements_written.inc_by(elements as u64);
        } else {
            self.fill_failures.inc();
        }
    }
}

/// Timer for measuring operation duration with automatic histogram recording
pub struct Timer {
    start: Instant,
    histogram: Histogram,
}

impl Timer {
    /// Start a new timer
    pub fn start(histogram: Histogram) -> Self {
        Self {
            start: Instant::now(),
            histogram,
        }
    }

    /// Record the elapsed time and consume the timer
    pub fn finish(self) {
        self.histogram.observe(self.start.elapsed().as_secs_f64());
    }
}

/// Time an expression and record its duration in a histogram
///
/// # Examples
/// ```
/// use seqfill::system::metrics::Metrics;
/// use seqfill::time_operation;
///
/// let metrics = Metrics::global();
/// let values = time_operation!(metrics.fill_duration, seqfill::sequence::<u32>(8));
/// assert_eq!(values.unwrap().len(), 8);
/// ```
#[macro_export]
macro_rules! time_operation {
    ($metric:expr, $body:expr) => {{
        let timer = $crate::system::metrics::Timer::start($metric.clone());
        let result = $body;
        timer.finish();
        result
    }};
}

/// Initialize the metrics registry by creating the global metrics instance
pub fn init_registry() {
    let _ = Metrics::global();
}

/// Get the Prometheus registry holding every seqfill metric
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Collect all metrics in the Prometheus text exposition format
pub fn collect_metrics() -> Result<String> {
    let encoder = prometheus::TextEncoder::new();
    let metric_families = registry().gather();
    Ok(encoder.encode_to_string(&metric_families)?)
}
