//! Notifications delivered by the host framework's dispatch loop

use crate::backend::{HostId, SessionId, WindowId};
use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameworkEvent {
    TooltipOpened { session: SessionId, host: HostId },
    TooltipClosed { session: SessionId },
    /// Pointer position in the coordinate space of `window`
    PointerMoved { window: WindowId, position: Point },
    WindowOpened(WindowId),
    WindowClosed(WindowId),
}

/// Pointer position as last reported by a subscribed window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub window: WindowId,
    pub position: Point,
}
