//! Lifecycle tracker
//!
//! Follows the single tracked tooltip session through
//! Closed -> Open -> Closed (pending reopen) and decides, on every pointer
//! move, whether the session should be closed or a reopen requested.

mod lifecycle_state;

pub use lifecycle_state::{LifecycleTracker, Phase, PointerOutcome, TrackedSession};
