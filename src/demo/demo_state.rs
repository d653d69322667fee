use std::time::Instant;

use hovertip::backend::{HostId, WindowId};
use hovertip::config::TooltipConfig;
use hovertip::geometry::Point;
use hovertip::stage::Stage;
use hovertip::{ReopenOutcome, TooltipCoordinator};
use ratatui::crossterm::event::{KeyCode, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// label, tooltip, enabled, show delay
const BUTTONS: [(&str, &str, bool, Option<i64>); 4] = [
    ("Save", "Write the buffer to disk", true, Some(300)),
    ("Export", "Export is unavailable in read-only mode", false, Some(300)),
    ("Delete", "Nothing selected", false, None),
    ("Help", "Open the manual", true, None),
];

const BUTTON_WIDTH: u16 = 12;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 4;
const BUTTON_ROW: u16 = 3;

pub struct DemoApp {
    pub stage: Stage,
    pub coordinator: TooltipCoordinator,
    pub window: WindowId,
    pub buttons: Vec<HostId>,
    pub last_reopen: Option<ReopenOutcome>,
    should_quit: bool,
}

impl DemoApp {
    pub fn new(config: TooltipConfig, now: Instant) -> Self {
        let mut stage = Stage::with_default_show_delay(config.default_show_delay_ms);
        let window = stage.add_window();

        let mut buttons = Vec::with_capacity(BUTTONS.len());
        let mut x = 2;
        for (label, tip, enabled, delay) in BUTTONS {
            let rect = Rect::new(x, BUTTON_ROW, BUTTON_WIDTH, BUTTON_HEIGHT);
            let host = stage.add_tipped_host(window, label, rect, tip);
            if let Some(h) = stage.host_mut(host) {
                h.enabled = enabled;
                h.show_on_disabled = !enabled;
                h.show_delay_ms = delay;
            }
            buttons.push(host);
            x += BUTTON_WIDTH + BUTTON_GAP;
        }

        let mut coordinator = TooltipCoordinator::new(config);
        coordinator.initialize(&stage);
        stage.pump(&mut coordinator, now);

        Self {
            stage,
            coordinator,
            window,
            buttons,
            last_reopen: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') => {
                self.coordinator.close_current(&mut self.stage);
                self.stage.pump(&mut self.coordinator, Instant::now());
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if !matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
            return;
        }
        let position = Point::new(f64::from(mouse.column), f64::from(mouse.row));
        self.stage.move_pointer(self.window, position, now);
        self.stage.pump(&mut self.coordinator, now);
    }

    /// Run native tooltip timing and the reopen timer
    pub fn tick(&mut self, now: Instant) {
        self.stage.advance(now);
        self.stage.pump(&mut self.coordinator, now);
        if let Some(outcome) = self.coordinator.tick(&mut self.stage, now) {
            self.last_reopen = Some(outcome);
        }
        self.stage.pump(&mut self.coordinator, now);
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.stage.next_deadline(), self.coordinator.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn shutdown(&mut self) {
        self.coordinator.shutdown();
    }
}

#[cfg(test)]
#[path = "demo_state_tests.rs"]
mod demo_state_tests;
