//! hovertip: hover tooltip lifecycle coordination
//!
//! Overrides a host framework's default tooltip timing. A tooltip closes as
//! soon as the pointer leaves both its host and the tooltip itself (after a
//! short grace window), and re-opens after the host's show delay when the
//! pointer comes back, including on disabled hosts whose native hover
//! tracking never fires again.
//!
//! The host framework is reached only through [`TooltipBackend`]; the
//! in-memory [`stage::Stage`] implements it for headless use.

pub mod activator;
pub mod backend;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod event;
pub mod geometry;
pub mod lifecycle;
pub mod reopen;
pub mod stage;
pub mod tap;

#[cfg(test)]
mod test_utils;

pub use backend::{HostId, SessionId, Target, TooltipBackend, TooltipContent, WindowId};
pub use config::{Config, TooltipConfig};
pub use coordinator::{ReopenOutcome, TooltipCoordinator};
pub use error::HovertipError;
pub use event::FrameworkEvent;
pub use lifecycle::Phase;
