//! Call throttling and retry backoff for the judge
//!
//! The limiter is an owned value rather than process-wide state: whoever
//! holds the invoker holds the last-call timestamp. The pipeline is
//! sequential, so no lock is needed. A concurrent caller would have to put
//! the limiter behind a `Mutex` (or feed a single consumer) so that reads and
//! writes of the timestamp are serialized.

use std::thread;
use std::time::{Duration, Instant};
use tracing::info;

/// Default minimum interval between judge calls (3 seconds)
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_secs(3);

/// Default number of attempts per judge call
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Enforces a minimum interval between consecutive calls
#[derive(Debug, Clone)]
pub struct RateLimiter {
    min_interval: Duration,
    last_call: Option<Instant>,
}

impl RateLimiter {
    /// Create a limiter that has not seen any call yet
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: None,
        }
    }

    /// Configured minimum interval
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Time of the most recent call, if any
    pub fn last_call(&self) -> Option<Instant> {
        self.last_call
    }

    /// How long a call issued at `now` would have to wait
    pub fn wait_time(&self, now: Instant) -> Duration {
        match self.last_call {
            None => Duration::ZERO,
            Some(last) => self
                .min_interval
                .saturating_sub(now.saturating_duration_since(last)),
        }
    }

    /// Block until a call is allowed, then record the call time
    ///
    /// Returns how long the caller was made to wait.
    pub fn acquire(&mut self) -> Duration {
        let wait = self.wait_time(Instant::now());
        if !wait.is_zero() {
            info!(
                "Rate limiting: waiting {:.2} seconds before next judge call",
                wait.as_secs_f64()
            );
            thread::sleep(wait);
        }
        self.last_call = Some(Instant::now());
        wait
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}

/// Bounded exponential backoff for transient failures
///
/// The wait after failed attempt `n` (1-based) is
/// `multiplier * 2^(n-1)`, clamped to `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,

    /// Base multiplier
    pub multiplier: Duration,

    /// Floor for any single wait
    pub min: Duration,

    /// Ceiling for any single wait
    pub max: Duration,
}

impl RetryPolicy {
    /// Wait before retrying after failed attempt `attempt` (1-based)
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exp = 2u32.saturating_pow(attempt.saturating_sub(1));
        let raw = self.multiplier.saturating_mul(exp);
        raw.clamp(self.min, self.max)
    }

    /// A policy that never retries
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            multiplier: Duration::from_secs(1),
            min: Duration::from_secs(2),
            max: Duration::from_secs(20),
        }
    }
}
