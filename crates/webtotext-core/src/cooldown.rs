//! Request cooldown gate
//!
//! Enforces a minimum interval between accepted crawl requests. Unlike a
//! throttle that sleeps until it may proceed, this gate rejects early
//! attempts outright and reports the remaining wait to the user.

use std::time::{Duration, Instant};

use crate::error::{Result, WebtotextError};

/// Minimum interval between accepted crawl requests
pub const COOLDOWN: Duration = Duration::from_millis(5000);

/// Cooldown gate tracking the last accepted request
///
/// On rejection the recorded timestamp is left untouched, so hammering
/// the trigger does not extend the wait. On acceptance the timestamp is
/// recorded immediately, before any network I/O begins, so overlapping
/// rapid attempts cannot both pass.
#[derive(Debug)]
pub struct Cooldown {
    interval: Duration,
    last_accepted: Option<Instant>,
}

impl Cooldown {
    /// Create a cooldown gate with the standard 5 s interval
    pub fn new() -> Self {
        Self::with_interval(COOLDOWN)
    }

    /// Create a cooldown gate with a custom interval
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            last_accepted: None,
        }
    }

    /// Attempt to pass the gate now
    ///
    /// # Errors
    /// `Cooldown { wait_secs }` when the interval has not elapsed, with
    /// the remaining wait rounded up to whole seconds.
    pub fn try_acquire(&mut self) -> Result<()> {
        self.try_acquire_at(Instant::now())
    }

    /// Attempt to pass the gate at an explicit instant
    ///
    /// Split out from [`try_acquire`](Self::try_acquire) so the timing
    /// contract is testable without sleeping.
    pub fn try_acquire_at(&mut self, now: Instant) -> Result<()> {
        if let Some(last) = self.last_accepted {
            let elapsed = now.saturating_duration_since(last);
            if elapsed < self.interval {
                let remaining = self.interval - elapsed;
                return Err(WebtotextError::Cooldown {
                    wait_secs: remaining.as_millis().div_ceil(1000) as u64,
                });
            }
        }

        self.last_accepted = Some(now);
        Ok(())
    }

    /// Get the configured minimum interval
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for Cooldown {
    fn default() -> Self {
        Self::new()
    }
}
