//! Seam between the coordinator and the host UI framework
//!
//! The coordinator only ever holds handles. Every lookup goes through
//! [`TooltipBackend`], and a handle that no longer resolves (host removed
//! from the UI tree, session torn down) reads as `None`.

use std::fmt;

use crate::geometry::{LocalHit, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HostId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u32);

impl fmt::Display for HostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h{}", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

/// What a host has configured as its tooltip
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TooltipContent {
    /// Raw value that the framework shows with its own timing
    Plain(String),
    /// Addressable session that can be opened programmatically
    Session(SessionId),
}

/// Surface the hit tester is asked about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Host(HostId),
    Tooltip(SessionId),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Host(host) => write!(f, "host {}", host),
            Target::Tooltip(session) => write!(f, "tooltip {}", session),
        }
    }
}

/// Host framework operations the coordinator depends on
///
/// Requests are fire-and-forget: the framework reports what actually
/// happened through later notifications (see [`crate::event::FrameworkEvent`]).
pub trait TooltipBackend {
    /// Top-level windows that currently exist
    fn top_level_windows(&self) -> Vec<WindowId>;

    /// Resolve `target` and express `pointer` (in `window` space) in its
    /// local coordinates
    fn locate(&self, target: Target, window: WindowId, pointer: Point) -> Option<LocalHit>;

    /// Configured initial show delay in milliseconds, `None` when unset
    fn show_delay_ms(&self, host: HostId) -> Option<i64>;

    fn tooltip_content(&self, host: HostId) -> Option<TooltipContent>;

    /// Wrap the host's plain content into a session and attach it in place
    /// of the raw value
    fn promote_content(&mut self, host: HostId) -> Option<SessionId>;

    fn is_open(&self, session: SessionId) -> bool;

    /// Place `session` against `placement` and open it
    fn request_open(&mut self, session: SessionId, placement: HostId);

    fn request_close(&mut self, session: SessionId);
}
