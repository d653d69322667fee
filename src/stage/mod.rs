//! Stage: an in-memory host framework
//!
//! Implements [`crate::backend::TooltipBackend`] over hosts laid out as
//! terminal-cell rectangles. Drives the demo binary and the coordinator
//! tests. Its native tooltip timing reproduces the defects the coordinator
//! corrects: tooltips never close on their own, and disabled hosts are
//! shown natively at most once.

mod stage_host;
mod stage_state;

pub use stage_host::{StageHost, StageSession};
pub use stage_state::Stage;
