use std::sync::atomic::{AtomicU64, Ordering};

/// Counters updated by the loader
#[derive(Debug, Default)]
pub struct LoadStats {
    requests: AtomicU64,
    invalid_references: AtomicU64,
    resident_hits: AtomicU64,
    async_requests: AtomicU64,
    async_resolved: AtomicU64,
    async_failed: AtomicU64,
}

/// Point-in-time copy of [`LoadStats`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadStatsSnapshot {
    pub requests: u64,
    pub invalid_references: u64,
    pub resident_hits: u64,
    pub async_requests: u64,
    pub async_resolved: u64,
    pub async_failed: u64,
}

impl LoadStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_invalid_reference(&self) {
        self.invalid_references.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_resident_hit(&self) {
        self.resident_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_async_request(&self) {
        self.async_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_async_outcome(&self, resolved: bool) {
        if resolved {
            self.async_resolved.fetch_add(1, Ordering::Relaxed);
        } else {
            self.async_failed.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn snapshot(&self) -> LoadStatsSnapshot {
        LoadStatsSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            invalid_references: self.invalid_references.load(Ordering::Relaxed),
            resident_hits: self.resident_hits.load(Ordering::Relaxed),
            async_requests: self.async_requests.load(Ordering::Relaxed),
            async_resolved: self.async_resolved.load(Ordering::Relaxed),
            async_failed: self.async_failed.load(Ordering::Relaxed),
        }
    }
}

impl LoadStatsSnapshot {
    /// Async requests submitted but not yet completed
    pub fn in_flight(&self) -> u64 {
        self.async_requests
            .saturating_sub(self.async_resolved + self.async_failed)
    }

    /// Share of requests served without a load (0.0 to 1.0)
    pub fn resident_hit_ratio(&self) -> f32 {
        if self.requests == 0 {
            0.0
        } else {
            self.resident_hits as f32 / self.requests as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_ratio() {
        let stats = LoadStats::new();
        assert_eq!(stats.snapshot().resident_hit_ratio(), 0.0);

        for _ in 0..4 {
            stats.record_request();
        }
        stats.record_resident_hit();
        assert!((stats.snapshot().resident_hit_ratio() - 0.25).abs() < 0.01);
    }

    #[test]
    fn test_in_flight() {
        let stats = LoadStats::new();
        stats.record_async_request();
        stats.record_async_request();
        stats.record_async_outcome(false);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.async_failed, 1);
        assert_eq!(snapshot.in_flight(), 1);
    }
}
