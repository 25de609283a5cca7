//! Single-slot debounce timer.
//!
//! The filter controller coalesces rapid input changes into one filter pass
//! through a fixed delay window. The timer here is deliberately a single
//! slot owned by its instance: arming overwrites any previous deadline, so
//! there is never more than one pending fire, and cancellation discards the
//! pending fire entirely. There is no ambient or global timer service; the
//! host event loop drives the timer by polling.

use std::time::{Duration, Instant};

/// The default coalescing window between an input change and the filter
/// pass it triggers.
pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(250);

/// A cancellable one-shot timer with a single deadline slot.
///
/// Hosts drive the timer explicitly: arm it when an input change arrives,
/// then call [`fire_due`](Self::fire_due) from the event loop. The
/// `*_at` style of passing `now` keeps behavior deterministic under test.
///
/// # Example
///
/// ```
/// use std::time::{Duration, Instant};
/// use siftable_core::DebounceTimer;
///
/// let mut timer = DebounceTimer::new(Duration::from_millis(250));
/// let t0 = Instant::now();
///
/// timer.arm(t0);
/// assert!(!timer.fire_due(t0)); // window still open
/// assert!(timer.fire_due(t0 + Duration::from_millis(250)));
/// assert!(!timer.is_armed()); // consumed
/// ```
#[derive(Debug)]
pub struct DebounceTimer {
    /// The coalescing window applied on each arm.
    delay: Duration,
    /// The pending deadline, if armed.
    deadline: Option<Instant>,
}

impl DebounceTimer {
    /// Create a disarmed timer with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// The coalescing window applied on each arm.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm the timer to fire `delay` after `now`.
    ///
    /// Any previously pending deadline is overwritten, so a burst of arms
    /// within the window collapses to the last one.
    pub fn arm(&mut self, now: Instant) {
        let rearmed = self.deadline.is_some();
        self.deadline = Some(now + self.delay);
        tracing::trace!(
            target: "siftable_core::timer",
            delay_ms = self.delay.as_millis() as u64,
            rearmed,
            "timer armed"
        );
    }

    /// Clear the pending deadline without firing it.
    ///
    /// Returns `true` if a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        let was_armed = self.deadline.take().is_some();
        if was_armed {
            tracing::trace!(target: "siftable_core::timer", "timer cancelled");
        }
        was_armed
    }

    /// Whether a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// The duration until the pending deadline, if any.
    ///
    /// Returns `Duration::ZERO` for a deadline that is already due. Hosts
    /// can use this to schedule their next wakeup.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|deadline| {
            if deadline > now {
                deadline - now
            } else {
                Duration::ZERO
            }
        })
    }

    /// Consume the deadline if it is due.
    ///
    /// Returns `true` exactly once per armed deadline: when it fires, the
    /// slot is cleared.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                tracing::trace!(target: "siftable_core::timer", "timer fired");
                true
            }
            _ => false,
        }
    }
}

impl Default for DebounceTimer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_DELAY)
    }
}
