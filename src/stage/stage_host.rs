use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use crate::backend::{HostId, SessionId, TooltipContent, WindowId};

/// A UI element that can own a tooltip
#[derive(Debug, Clone)]
pub struct StageHost {
    pub id: HostId,
    pub window: WindowId,
    pub label: String,
    pub rect: Rect,
    pub enabled: bool,
    pub visible: bool,
    /// `None` leaves the framework default in effect
    pub show_delay_ms: Option<i64>,
    pub content: Option<TooltipContent>,
    /// Native hover tracking still fires once for a disabled host
    pub show_on_disabled: bool,
    pub(super) shown_natively: bool,
}

impl StageHost {
    pub(super) fn new(id: HostId, window: WindowId, label: &str, rect: Rect) -> Self {
        Self {
            id,
            window,
            label: label.to_string(),
            rect,
            enabled: true,
            visible: true,
            show_delay_ms: None,
            content: None,
            show_on_disabled: false,
            shown_natively: false,
        }
    }

    /// Whether the framework's own hover tracking would react to this host
    pub(super) fn tracks_native_hover(&self) -> bool {
        if !self.visible || self.content.is_none() {
            return false;
        }
        self.enabled || (self.show_on_disabled && !self.shown_natively)
    }
}

/// A tooltip instance created by promoting a host's plain content
#[derive(Debug, Clone)]
pub struct StageSession {
    pub id: SessionId,
    pub owner: HostId,
    pub text: String,
    pub open: bool,
    pub placement: Option<HostId>,
    pub rect: Option<Rect>,
}

impl StageSession {
    pub(super) fn new(id: SessionId, owner: HostId, text: String) -> Self {
        Self {
            id,
            owner,
            text,
            open: false,
            placement: None,
            rect: None,
        }
    }

    /// Bordered box directly below `anchor`, wide enough for the text
    pub fn placement_rect(&self, anchor: Rect) -> Rect {
        let text_width = u16::try_from(self.text.width()).unwrap_or(u16::MAX);
        Rect {
            x: anchor.x,
            y: anchor.y.saturating_add(anchor.height),
            width: text_width.saturating_add(4),
            height: 3,
        }
    }
}
