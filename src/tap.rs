//! Event tap
//!
//! Process-scope subscription to tooltip open/close notifications plus one
//! pointer-move subscription per top-level window. Installation is
//! idempotent, and nothing is routed while uninstalled.

use std::collections::BTreeSet;

use crate::backend::{HostId, SessionId, WindowId};
use crate::event::{FrameworkEvent, PointerSample};

/// A notification that passed the tap and should drive the tracker
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Routed {
    Opened { session: SessionId, host: HostId },
    Closed { session: SessionId },
    Pointer(PointerSample),
}

#[derive(Debug, Default)]
pub struct EventTap {
    installed: bool,
    windows: BTreeSet<WindowId>,
}

impl EventTap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to `windows`; returns false if already installed
    pub fn install(&mut self, windows: impl IntoIterator<Item = WindowId>) -> bool {
        if self.installed {
            return false;
        }
        self.installed = true;
        self.windows.extend(windows);
        log::debug!("Event tap installed for {} window(s)", self.windows.len());
        true
    }

    /// Drop every subscription; returns false if nothing was installed
    pub fn uninstall(&mut self) -> bool {
        if !self.installed {
            return false;
        }
        self.installed = false;
        self.windows.clear();
        log::debug!("Event tap uninstalled");
        true
    }

    pub fn is_installed(&self) -> bool {
        self.installed
    }

    pub fn is_subscribed(&self, window: WindowId) -> bool {
        self.windows.contains(&window)
    }

    pub fn route(&mut self, event: FrameworkEvent) -> Option<Routed> {
        if !self.installed {
            return None;
        }

        match event {
            FrameworkEvent::TooltipOpened { session, host } => Some(Routed::Opened { session, host }),
            FrameworkEvent::TooltipClosed { session } => Some(Routed::Closed { session }),
            FrameworkEvent::PointerMoved { window, position } => {
                if self.windows.contains(&window) {
                    Some(Routed::Pointer(PointerSample { window, position }))
                } else {
                    log::trace!("Dropping pointer move from unsubscribed window {}", window);
                    None
                }
            }
            FrameworkEvent::WindowOpened(window) => {
                if self.windows.insert(window) {
                    log::debug!("Subscribed to pointer moves in {}", window);
                }
                None
            }
            FrameworkEvent::WindowClosed(window) => {
                if self.windows.remove(&window) {
                    log::debug!("Unsubscribed from pointer moves in {}", window);
                }
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "tap_tests.rs"]
mod tap_tests;
