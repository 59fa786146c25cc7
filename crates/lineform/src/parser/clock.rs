use chrono::{DateTime, Utc};

/// Time source injected into the dispatch engine at construction.
///
/// Formats that carry no timestamp of their own, and the UNKNOWN fallback,
/// stamp records with this clock instead of reading ambient global time.
/// Parsing stays deterministic under test with a fixed implementation.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed time source for tests.
#[cfg(test)]
pub(crate) struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
