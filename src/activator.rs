//! Tooltip activator
//!
//! Opens a host's tooltip programmatically. Plain content is promoted to an
//! addressable session first, since only a session can be opened on demand.

use crate::backend::{HostId, SessionId, TooltipBackend, TooltipContent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Host has no tooltip configured (or no longer resolves)
    NoContent,
    /// Framework declined to wrap the plain content
    PromotionFailed,
    AlreadyOpen(SessionId),
    Requested(SessionId),
}

pub fn open_tooltip<B: TooltipBackend + ?Sized>(backend: &mut B, host: HostId) -> Activation {
    let session = match backend.tooltip_content(host) {
        None => {
            log::debug!("{} has no tooltip content", host);
            return Activation::NoContent;
        }
        Some(TooltipContent::Session(session)) => session,
        Some(TooltipContent::Plain(_)) => match backend.promote_content(host) {
            Some(session) => {
                log::debug!("Promoted content of {} to session {}", host, session);
                session
            }
            None => {
                log::debug!("Could not promote content of {}", host);
                return Activation::PromotionFailed;
            }
        },
    };

    if backend.is_open(session) {
        return Activation::AlreadyOpen(session);
    }

    backend.request_open(session, host);
    Activation::Requested(session)
}

#[cfg(test)]
#[path = "activator_tests.rs"]
mod activator_tests;
