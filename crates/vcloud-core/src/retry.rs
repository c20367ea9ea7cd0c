//! Retry policy for lookups that may observe propagation lag.
//!
//! A resource can be enumerable in its VDC before its detail record is fetchable. Lookups that
//! hit that window are repeated a bounded number of times before giving up.

use std::time::Duration;

/// Default number of lookup attempts (the first try included)
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default delay between attempts in milliseconds (retry immediately)
pub const DEFAULT_RETRY_DELAY_MS: u64 = 0;

/// Upper bound accepted for configured attempts
pub const MAX_ALLOWED_ATTEMPTS: u32 = 10;

/// Bounded retry policy for "not yet present" outcomes.
///
/// Only transient absence is retried. Hard failures are never retried by this policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first; zero behaves as one
    pub max_attempts: u32,

    /// Fixed delay between attempts
    pub delay: Duration,
}

impl RetryPolicy {
    /// Create a new retry policy with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        }
    }

    /// A policy that tries exactly once.
    #[must_use]
    pub const fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            delay: Duration::from_millis(0),
        }
    }

    /// Set the total number of attempts. Zero is treated as one.
    #[must_use]
    pub const fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = if attempts == 0 { 1 } else { attempts };
        self
    }

    /// Set the delay between attempts.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Delay to wait after `attempt` (1-based) before the next one.
    ///
    /// Returns `None` after the final attempt.
    #[must_use]
    pub const fn delay_after(&self, attempt: u32) -> Option<Duration> {
        if attempt >= self.max_attempts {
            None
        } else {
            Some(self.delay)
        }
    }

    /// Check if more than one attempt is made.
    #[must_use]
    pub const fn has_retries(&self) -> bool {
        self.max_attempts > 1
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}
