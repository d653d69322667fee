//! Tooltip coordinator
//!
//! The context object that owns one instance of the tooltip lifecycle: the
//! event tap, the lifecycle tracker and the reopen scheduler. Every method
//! is expected to run on the host framework's dispatch loop; nothing here
//! blocks or spawns.

use std::time::Instant;

use crate::activator::{self, Activation};
use crate::backend::{HostId, SessionId, Target, TooltipBackend};
use crate::config::TooltipConfig;
use crate::event::{FrameworkEvent, PointerSample};
use crate::lifecycle::{LifecycleTracker, Phase, PointerOutcome};
use crate::reopen::ReopenScheduler;
use crate::tap::{EventTap, Routed};

/// Result of a reopen timer firing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReopenOutcome {
    /// A session opened after the timer was armed
    Superseded,
    /// Nothing left to reopen
    NothingPending,
    /// Pointer is no longer over the host, or the host is gone
    PointerAway(HostId),
    Activated(HostId, Activation),
}

#[derive(Debug)]
pub struct TooltipCoordinator {
    config: TooltipConfig,
    tap: EventTap,
    tracker: LifecycleTracker,
    scheduler: ReopenScheduler,
}

impl Default for TooltipCoordinator {
    fn default() -> Self {
        Self::new(TooltipConfig::default())
    }
}

impl TooltipCoordinator {
    pub fn new(config: TooltipConfig) -> Self {
        Self {
            config,
            tap: EventTap::new(),
            tracker: LifecycleTracker::new(),
            scheduler: ReopenScheduler::new(),
        }
    }

    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// Subscribe to the backend's notifications
    ///
    /// Only the first call installs anything; later calls return false.
    pub fn initialize<B: TooltipBackend + ?Sized>(&mut self, backend: &B) -> bool {
        self.tap.install(backend.top_level_windows())
    }

    /// Drop all subscriptions and forget every tracked session, record and
    /// timer. Returns false if not initialized.
    pub fn shutdown(&mut self) -> bool {
        if !self.tap.uninstall() {
            return false;
        }
        self.tracker.reset();
        self.scheduler.reset();
        true
    }

    pub fn is_initialized(&self) -> bool {
        self.tap.is_installed()
    }

    pub fn phase(&self) -> Phase {
        self.tracker.phase()
    }

    pub fn current_session(&self) -> Option<SessionId> {
        self.tracker.current().map(|t| t.session)
    }

    pub fn current_host(&self) -> Option<HostId> {
        self.tracker.current().map(|t| t.host)
    }

    pub fn pending_reopen(&self) -> Option<HostId> {
        self.tracker.pending_reopen()
    }

    pub fn is_reopen_scheduled(&self) -> bool {
        self.scheduler.is_scheduled()
    }

    pub fn pointer(&self) -> Option<PointerSample> {
        self.tracker.pointer()
    }

    /// When [`tick`](Self::tick) next needs to run
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Close the tracked tooltip through the framework's normal close path
    ///
    /// The resulting close notification is handled like any framework close,
    /// so no reopen is recorded. Returns false when nothing was open.
    pub fn close_current<B: TooltipBackend + ?Sized>(&mut self, backend: &mut B) -> bool {
        let Some(tracked) = self.tracker.current().copied() else {
            return false;
        };
        if !backend.is_open(tracked.session) {
            return false;
        }
        log::debug!("Force-closing {}", tracked.session);
        backend.request_close(tracked.session);
        true
    }

    pub fn handle_event<B: TooltipBackend + ?Sized>(
        &mut self,
        event: FrameworkEvent,
        backend: &mut B,
        now: Instant,
    ) {
        let Some(routed) = self.tap.route(event) else {
            return;
        };

        match routed {
            Routed::Opened { session, host } => {
                self.tracker.on_opened(session, host, now);
                self.scheduler.supersede();
            }
            Routed::Closed { session } => {
                self.tracker.on_closed(session);
            }
            Routed::Pointer(sample) => {
                let outcome = self.tracker.on_pointer(
                    sample,
                    now,
                    self.config.grace_window(),
                    self.config.margin(),
                    backend,
                );
                if let PointerOutcome::ReenteredPending(host) = outcome {
                    let delay_ms = backend
                        .show_delay_ms(host)
                        .unwrap_or_else(|| self.default_delay_ms());
                    self.scheduler.schedule(host, delay_ms, now);
                }
            }
        }
    }

    /// Fire the reopen timer if it is due
    ///
    /// Live state is re-checked here rather than cancelling timers when it
    /// changes. A superseded timer leaves the pending record alone, since
    /// that record may belong to a later close-on-leave. Any other fire
    /// consumes it.
    pub fn tick<B: TooltipBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        now: Instant,
    ) -> Option<ReopenOutcome> {
        let timer = self.scheduler.take_due(now)?;
        log::debug!("Reopen timer for {} fired", timer.host);

        if timer.superseded || self.tracker.current().is_some() {
            log::debug!("Reopen timer for {} is stale", timer.host);
            return Some(ReopenOutcome::Superseded);
        }
        let Some(host) = self.tracker.take_pending() else {
            return Some(ReopenOutcome::NothingPending);
        };
        if !self
            .tracker
            .pointer_inside(Target::Host(host), self.config.margin(), &*backend)
        {
            log::debug!("Pointer no longer over {}, not reopening", host);
            return Some(ReopenOutcome::PointerAway(host));
        }

        let activation = activator::open_tooltip(backend, host);
        log::debug!("Reopen of {}: {:?}", host, activation);
        Some(ReopenOutcome::Activated(host, activation))
    }

    fn default_delay_ms(&self) -> i64 {
        i64::try_from(self.config.default_show_delay_ms).unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod coordinator_tests;
