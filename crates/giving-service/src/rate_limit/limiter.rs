//! Per-key trailing-window rate limiter.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use dashmap::DashMap;
use tokio::time::Instant;
use tracing::debug;

/// Number of tracked keys above which stale keys are swept before a check.
const SWEEP_THRESHOLD: usize = 1000;

/// Accepted request instants for one key, with the window they were checked against.
#[derive(Debug, Default)]
struct KeyWindow {
    span: Duration,
    hits: Vec<Instant>,
}

impl KeyWindow {
    fn prune(&mut self, now: Instant) {
        let span = self.span;
        self.hits.retain(|t| now.saturating_duration_since(*t) < span);
    }
}

/// In-memory limiter allowing at most `max_requests` per key within any
/// trailing window.
///
/// Each key keeps the instants of its accepted requests. Expired instants
/// are dropped lazily on the next check for that key; denied requests are
/// never recorded, so a saturated key recovers as soon as its oldest
/// accepted request leaves the window.
#[derive(Debug)]
pub struct RateLimiter {
    /// Key → accepted request instants, oldest first.
    windows: DashMap<String, KeyWindow>,
    /// Tracked-key count that triggers the next sweep.
    sweep_at: AtomicUsize,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self {
            windows: DashMap::new(),
            sweep_at: AtomicUsize::new(SWEEP_THRESHOLD),
        }
    }
}

impl RateLimiter {
    /// Creates an empty limiter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks and, if allowed, counts a request for `key` at the current instant.
    pub fn is_allowed(&self, key: &str, max_requests: u32, window: Duration) -> bool {
        self.is_allowed_at(key, max_requests, window, Instant::now())
    }

    /// Checks and, if allowed, counts a request for `key` at `now`.
    ///
    /// The filter-then-append sequence runs under the key's map entry lock,
    /// so concurrent callers for one key never exceed `max_requests`.
    pub fn is_allowed_at(&self, key: &str, max_requests: u32, window: Duration, now: Instant) -> bool {
        self.maybe_sweep(now);

        let mut entry = self.windows.entry(key.to_string()).or_default();
        entry.span = window;
        entry.prune(now);

        if entry.hits.len() >= max_requests as usize {
            debug!(key, max_requests, window_ms = window.as_millis() as u64, "Rate limit reached");
            return false;
        }

        entry.hits.push(now);
        true
    }

    /// Forgets every request recorded for `key`.
    pub fn reset(&self, key: &str) {
        if self.windows.remove(key).is_some() {
            debug!(key, "Rate limit window reset");
        }
    }

    /// Number of keys currently tracked.
    pub fn tracked_keys(&self) -> usize {
        self.windows.len()
    }

    /// Sweeps once the key count passes the current threshold, then moves
    /// the threshold to twice the surviving count so that live keys are not
    /// rescanned on every call.
    fn maybe_sweep(&self, now: Instant) {
        let threshold = self.sweep_at.load(Ordering::Acquire);
        if self.windows.len() <= threshold {
            return;
        }
        // One sweeper at a time; others skip while the threshold is parked.
        if self
            .sweep_at
            .compare_exchange(threshold, usize::MAX, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return;
        }

        let before = self.windows.len();
        self.windows.retain(|_, window| {
            window.prune(now);
            !window.hits.is_empty()
        });
        let remaining = self.windows.len();
        self.sweep_at.store(
            SWEEP_THRESHOLD.max(remaining.saturating_mul(2)),
            Ordering::Release,
        );
        debug!(
            removed = before.saturating_sub(remaining),
            remaining, "Swept idle rate limit keys"
        );
    }
}
