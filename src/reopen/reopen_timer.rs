use std::time::{Duration, Instant};

use crate::backend::HostId;

/// Negative delays are treated as zero
pub fn clamp_delay(delay_ms: i64) -> Duration {
    Duration::from_millis(delay_ms.max(0).unsigned_abs())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReopenTimer {
    pub host: HostId,
    pub deadline: Instant,
    /// A session opened after this timer was armed
    pub superseded: bool,
}

#[derive(Debug, Default)]
pub struct ReopenScheduler {
    /// True while an armed timer has neither fired nor been superseded
    scheduled: bool,
    timer: Option<ReopenTimer>,
}

impl ReopenScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    pub fn timer(&self) -> Option<ReopenTimer> {
        self.timer
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.map(|t| t.deadline)
    }

    /// Arm the timer for `host`; returns false if one is already scheduled
    pub fn schedule(&mut self, host: HostId, delay_ms: i64, now: Instant) -> bool {
        if self.scheduled {
            log::trace!("Reopen already scheduled, ignoring request for {}", host);
            return false;
        }
        let delay = clamp_delay(delay_ms);
        self.scheduled = true;
        self.timer = Some(ReopenTimer {
            host,
            deadline: now + delay,
            superseded: false,
        });
        log::debug!("Reopen for {} scheduled in {:?}", host, delay);
        true
    }

    /// A new session opened; a timer still in flight becomes stale
    ///
    /// The timer keeps its slot and still fires, but as a no-op. A later
    /// `schedule` replaces it.
    pub fn supersede(&mut self) {
        self.scheduled = false;
        if let Some(timer) = self.timer.as_mut() {
            timer.superseded = true;
        }
    }

    /// Take the timer if its deadline has passed, clearing the flag
    pub fn take_due(&mut self, now: Instant) -> Option<ReopenTimer> {
        match self.timer {
            Some(timer) if timer.deadline <= now => {
                self.timer = None;
                self.scheduled = false;
                Some(timer)
            }
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.scheduled = false;
        self.timer = None;
    }
}

#[cfg(test)]
#[path = "reopen_timer_tests.rs"]
mod reopen_timer_tests;
