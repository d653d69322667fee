//! Reopen scheduler
//!
//! A single-shot delayed callback, owned as a deadline and fired from the
//! dispatch loop. Stale fires are not cancelled: whoever fires the timer
//! re-checks live state first.

mod reopen_timer;

pub use reopen_timer::{ReopenScheduler, ReopenTimer, clamp_delay};
