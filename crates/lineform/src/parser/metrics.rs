use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use super::model::LogFormat;

/// Per-format parse counters for the run loop.
///
/// Lock-free atomics so a shared reference can be bumped on the hot path
/// without synchronization. Counting lives out here; the engine itself
/// carries no instrumentation.
#[derive(Debug, Default)]
pub struct ParseMetrics {
    standard: AtomicU64,
    iso8601: AtomicU64,
    json_lite: AtomicU64,
    simple: AtomicU64,
    unknown: AtomicU64,
    rejected: AtomicU64,
}

impl ParseMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one successfully normalized line.
    pub fn record(&self, format: LogFormat) {
        let counter = match format {
            LogFormat::Standard => &self.standard,
            LogFormat::Iso8601 => &self.iso8601,
            LogFormat::JsonLite => &self.json_lite,
            LogFormat::Simple => &self.simple,
            LogFormat::Unknown => &self.unknown,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one line rejected for a timestamp conversion failure.
    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let standard = self.standard.load(Ordering::Relaxed);
        let iso8601 = self.iso8601.load(Ordering::Relaxed);
        let json_lite = self.json_lite.load(Ordering::Relaxed);
        let simple = self.simple.load(Ordering::Relaxed);
        let unknown = self.unknown.load(Ordering::Relaxed);
        let rejected = self.rejected.load(Ordering::Relaxed);
        MetricsSnapshot {
            standard,
            iso8601,
            json_lite,
            simple,
            unknown,
            rejected,
            total: standard + iso8601 + json_lite + simple + unknown + rejected,
        }
    }
}

/// Point-in-time view of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub standard: u64,
    pub iso8601: u64,
    pub json_lite: u64,
    pub simple: u64,
    pub unknown: u64,
    pub rejected: u64,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_by_format() {
        let metrics = ParseMetrics::new();
        metrics.record(LogFormat::Standard);
        metrics.record(LogFormat::Standard);
        metrics.record(LogFormat::Simple);
        metrics.record(LogFormat::Unknown);
        metrics.record_rejected();

        let snap = metrics.snapshot();
        assert_eq!(snap.standard, 2);
        assert_eq!(snap.iso8601, 0);
        assert_eq!(snap.simple, 1);
        assert_eq!(snap.unknown, 1);
        assert_eq!(snap.rejected, 1);
        assert_eq!(snap.total, 5);
    }

    #[test]
    fn test_concurrent_updates() {
        let metrics = std::sync::Arc::new(ParseMetrics::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let metrics = std::sync::Arc::clone(&metrics);
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        metrics.record(LogFormat::Iso8601);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(metrics.snapshot().iso8601, 4000);
    }

    #[test]
    fn test_snapshot_serializes() {
        let metrics = ParseMetrics::new();
        metrics.record(LogFormat::JsonLite);
        let json = serde_json::to_string(&metrics.snapshot()).unwrap();
        assert!(json.contains(r#""json_lite":1"#));
        assert!(json.contains(r#""total":1"#));
    }
}
