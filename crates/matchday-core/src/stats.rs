//! A minimal in-process statistics collector.
//!
//! Real runs usually hand the workflows a richer external collector; this
//! one keeps per-name counters behind a mutex and is what the scenario
//! tests assert against.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::client::StatsCollector;

/// Per-name success/failure tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallStats {
    pub successes: u64,
    pub failures: u64,
}

/// Counts successes and failures per logical call name.
#[derive(Debug, Default)]
pub struct CountingCollector {
    inner: Mutex<HashMap<String, CallStats>>,
}

impl CountingCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tallies for one logical name. Zeroes if the name was never seen.
    pub fn stats_for(&self, name: &str) -> CallStats {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.get(name).copied().unwrap_or_default()
    }

    /// Snapshot of every name seen so far.
    pub fn snapshot(&self) -> HashMap<String, CallStats> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.clone()
    }

    /// Total failures across all names.
    pub fn total_failures(&self) -> u64 {
        self.snapshot().values().map(|s| s.failures).sum()
    }
}

impl StatsCollector for CountingCollector {
    fn success(&self, name: &str) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.entry(name.to_string()).or_default().successes += 1;
    }

    fn failure(&self, name: &str, reason: &str) {
        tracing::debug!("[Stats] {} recorded failure: {}", name, reason);
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.entry(name.to_string()).or_default().failures += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_per_name() {
        let collector = CountingCollector::new();
        collector.success("POST /teams");
        collector.success("POST /teams");
        collector.failure("POST /teams", "Team creation failed: 500");
        collector.success("POST /tournaments");

        assert_eq!(
            collector.stats_for("POST /teams"),
            CallStats {
                successes: 2,
                failures: 1
            }
        );
        assert_eq!(collector.stats_for("POST /tournaments").successes, 1);
        assert_eq!(collector.stats_for("never seen"), CallStats::default());
        assert_eq!(collector.total_failures(), 1);
    }
}
