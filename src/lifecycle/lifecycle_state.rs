use std::time::{Duration, Instant};

use crate::backend::{HostId, SessionId, Target, TooltipBackend};
use crate::event::PointerSample;
use crate::hit_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Open,
    ClosedPendingReopen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedSession {
    pub session: SessionId,
    pub host: HostId,
    pub opened_at: Instant,
}

/// What a pointer move did to the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Nothing to evaluate
    Ignored,
    /// Session opened too recently to be judged
    WithinGrace,
    /// Pointer is still over the host or the tooltip
    Retained,
    /// Pointer left both surfaces; close was requested and the host recorded
    ClosedByLeave(HostId),
    /// Pointer is back over the recorded host while nothing is open
    ReenteredPending(HostId),
}

#[derive(Debug, Default)]
pub struct LifecycleTracker {
    current: Option<TrackedSession>,
    pending_reopen: Option<HostId>,
    pointer: Option<PointerSample>,
}

impl LifecycleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match (self.current, self.pending_reopen) {
            (Some(_), _) => Phase::Open,
            (None, Some(_)) => Phase::ClosedPendingReopen,
            (None, None) => Phase::Closed,
        }
    }

    pub fn current(&self) -> Option<&TrackedSession> {
        self.current.as_ref()
    }

    pub fn pending_reopen(&self) -> Option<HostId> {
        self.pending_reopen
    }

    pub fn pointer(&self) -> Option<PointerSample> {
        self.pointer
    }

    /// A session opened; it becomes current whatever was tracked before
    pub fn on_opened(&mut self, session: SessionId, host: HostId, now: Instant) {
        if let Some(previous) = self.current {
            if previous.session != session {
                log::debug!("Session {} supersedes {}", session, previous.session);
            }
        }
        if let Some(pending) = self.pending_reopen.take() {
            log::debug!("Dropping pending reopen for {}", pending);
        }
        self.current = Some(TrackedSession {
            session,
            host,
            opened_at: now,
        });
        log::debug!("Tracking session {} on {}", session, host);
    }

    /// A session closed; returns true if it was the tracked one
    ///
    /// The pending-reopen record is left alone: only a close caused by the
    /// pointer leaving sets or clears it.
    pub fn on_closed(&mut self, session: SessionId) -> bool {
        match self.current {
            Some(tracked) if tracked.session == session => {
                self.current = None;
                log::debug!("Session {} closed", session);
                true
            }
            _ => false,
        }
    }

    pub fn on_pointer<B: TooltipBackend + ?Sized>(
        &mut self,
        sample: PointerSample,
        now: Instant,
        grace: Duration,
        margin: f64,
        backend: &mut B,
    ) -> PointerOutcome {
        self.pointer = Some(sample);

        if let Some(tracked) = self.current {
            return self.evaluate_open(tracked, sample, now, grace, margin, backend);
        }

        match self.pending_reopen {
            Some(host) if self.pointer_inside(Target::Host(host), margin, &*backend) => {
                PointerOutcome::ReenteredPending(host)
            }
            _ => PointerOutcome::Ignored,
        }
    }

    fn evaluate_open<B: TooltipBackend + ?Sized>(
        &mut self,
        tracked: TrackedSession,
        sample: PointerSample,
        now: Instant,
        grace: Duration,
        margin: f64,
        backend: &mut B,
    ) -> PointerOutcome {
        if now.saturating_duration_since(tracked.opened_at) < grace {
            return PointerOutcome::WithinGrace;
        }
        // Close already under way; wait for the notification
        if !backend.is_open(tracked.session) {
            return PointerOutcome::Ignored;
        }

        let over_host = hit_test::hit(
            backend.locate(Target::Host(tracked.host), sample.window, sample.position),
            margin,
        );
        if over_host {
            return PointerOutcome::Retained;
        }
        let over_tooltip = hit_test::hit(
            backend.locate(
                Target::Tooltip(tracked.session),
                sample.window,
                sample.position,
            ),
            margin,
        );
        if over_tooltip {
            return PointerOutcome::Retained;
        }

        log::debug!(
            "Pointer left {} and its tooltip, closing {}",
            tracked.host,
            tracked.session
        );
        self.pending_reopen = Some(tracked.host);
        backend.request_close(tracked.session);
        PointerOutcome::ClosedByLeave(tracked.host)
    }

    /// Whether the last known pointer position is inside `target`
    ///
    /// No pointer sample, or a target that no longer resolves, reads as
    /// outside.
    pub fn pointer_inside<B: TooltipBackend + ?Sized>(
        &self,
        target: Target,
        margin: f64,
        backend: &B,
    ) -> bool {
        let Some(sample) = self.pointer else {
            return false;
        };
        let inside = hit_test::hit(
            backend.locate(target, sample.window, sample.position),
            margin,
        );
        log::trace!("Pointer inside {}: {}", target, inside);
        inside
    }

    /// Consume the pending-reopen record
    pub fn take_pending(&mut self) -> Option<HostId> {
        self.pending_reopen.take()
    }

    pub fn reset(&mut self) {
        self.current = None;
        self.pending_reopen = None;
        self.pointer = None;
    }
}

#[cfg(test)]
#[path = "lifecycle_state_tests.rs"]
mod lifecycle_state_tests;
