//! Deadline-bounded polling.
//!
//! Both the entry gate and the connection commands spin on a condition until
//! a wall-clock deadline passes. The deadline is fixed once at entry and the
//! clock and delay come from the [`Platform`], so tests can drive time
//! forward without sleeping.

use super::Platform;

/// An absolute point on the platform's monotonic millisecond clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    expires_at_ms: u64,
}

impl Deadline {
    /// A deadline `timeout_ms` after `now_ms`.
    pub const fn after(now_ms: u64, timeout_ms: u32) -> Self {
        Self {
            expires_at_ms: now_ms.saturating_add(timeout_ms as u64),
        }
    }

    /// Returns `true` once `now_ms` has reached the deadline.
    pub const fn expired(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at_ms
    }

    /// Milliseconds left before expiry, zero once expired.
    pub const fn remaining(&self, now_ms: u64) -> u64 {
        self.expires_at_ms.saturating_sub(now_ms)
    }
}

/// How a bounded poll ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The condition held before the deadline.
    Reached,
    /// The deadline passed first.
    TimedOut,
}

#[cfg(feature = "defmt")]
impl defmt::Format for WaitOutcome {
    fn format(&self, f: defmt::Formatter) {
        match self {
            WaitOutcome::Reached => defmt::write!(f, "Reached"),
            WaitOutcome::TimedOut => defmt::write!(f, "TimedOut"),
        }
    }
}

/// Call `attempt` every `interval_ms` until it returns `Ok(true)` or
/// `timeout_ms` has elapsed.
///
/// The deadline is checked before every attempt, so the call returns no later
/// than one `interval_ms` past the deadline. Errors from `attempt` abort the
/// poll and are returned unchanged.
pub fn poll_until<P, E, F>(
    platform: &mut P,
    timeout_ms: u32,
    interval_ms: u32,
    mut attempt: F,
) -> Result<WaitOutcome, E>
where
    P: Platform,
    F: FnMut() -> Result<bool, E>,
{
    let deadline = Deadline::after(platform.now_ms(), timeout_ms);

    while !deadline.expired(platform.now_ms()) {
        if attempt()? {
            return Ok(WaitOutcome::Reached);
        }
        platform.delay_ms(interval_ms);
    }

    Ok(WaitOutcome::TimedOut)
}
