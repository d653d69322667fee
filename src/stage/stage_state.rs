use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};

use super::stage_host::{StageHost, StageSession};
use crate::backend::{HostId, SessionId, Target, TooltipBackend, TooltipContent, WindowId};
use crate::config::DEFAULT_SHOW_DELAY_MS;
use crate::coordinator::TooltipCoordinator;
use crate::event::{FrameworkEvent, PointerSample};
use crate::geometry::{LocalHit, Point, hit_in_rect};
use crate::reopen::clamp_delay;

/// Native hover over `host`; `deadline` is `None` once the tooltip was shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NativeHover {
    host: HostId,
    deadline: Option<Instant>,
}

#[derive(Debug)]
pub struct Stage {
    windows: BTreeSet<WindowId>,
    hosts: BTreeMap<HostId, StageHost>,
    sessions: BTreeMap<SessionId, StageSession>,
    next_window: u32,
    next_host: u64,
    next_session: u64,
    events: VecDeque<FrameworkEvent>,
    requests: Vec<String>,
    pointer: Option<PointerSample>,
    hover: Option<NativeHover>,
    default_show_delay_ms: u64,
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage {
    pub fn new() -> Self {
        Self::with_default_show_delay(DEFAULT_SHOW_DELAY_MS)
    }

    pub fn with_default_show_delay(default_show_delay_ms: u64) -> Self {
        Self {
            windows: BTreeSet::new(),
            hosts: BTreeMap::new(),
            sessions: BTreeMap::new(),
            next_window: 1,
            next_host: 1,
            next_session: 1,
            events: VecDeque::new(),
            requests: Vec::new(),
            pointer: None,
            hover: None,
            default_show_delay_ms,
        }
    }

    pub fn add_window(&mut self) -> WindowId {
        let id = WindowId(self.next_window);
        self.next_window += 1;
        self.windows.insert(id);
        self.events.push_back(FrameworkEvent::WindowOpened(id));
        id
    }

    /// Close a window along with every host it contains
    pub fn close_window(&mut self, window: WindowId) {
        if !self.windows.remove(&window) {
            return;
        }
        let doomed: Vec<HostId> = self
            .hosts
            .values()
            .filter(|h| h.window == window)
            .map(|h| h.id)
            .collect();
        for host in doomed {
            self.remove_host(host);
        }
        self.events.push_back(FrameworkEvent::WindowClosed(window));
    }

    pub fn add_host(&mut self, window: WindowId, label: &str, rect: Rect) -> HostId {
        let id = HostId(self.next_host);
        self.next_host += 1;
        self.hosts.insert(id, StageHost::new(id, window, label, rect));
        id
    }

    /// Add a host with plain tooltip text
    pub fn add_tipped_host(
        &mut self,
        window: WindowId,
        label: &str,
        rect: Rect,
        tip: &str,
    ) -> HostId {
        let id = self.add_host(window, label, rect);
        if let Some(host) = self.hosts.get_mut(&id) {
            host.content = Some(TooltipContent::Plain(tip.to_string()));
        }
        id
    }

    pub fn host(&self, id: HostId) -> Option<&StageHost> {
        self.hosts.get(&id)
    }

    pub fn host_mut(&mut self, id: HostId) -> Option<&mut StageHost> {
        self.hosts.get_mut(&id)
    }

    pub fn hosts(&self) -> impl Iterator<Item = &StageHost> {
        self.hosts.values()
    }

    /// Remove a host from the UI tree; its open tooltip closes with it
    pub fn remove_host(&mut self, id: HostId) {
        if self.hosts.remove(&id).is_none() {
            return;
        }
        let owned: Vec<SessionId> = self
            .sessions
            .values()
            .filter(|s| s.owner == id)
            .map(|s| s.id)
            .collect();
        for session in owned {
            self.close_session(session);
            self.sessions.remove(&session);
        }
        if self.hover.is_some_and(|h| h.host == id) {
            self.hover = None;
        }
    }

    pub fn session(&self, id: SessionId) -> Option<&StageSession> {
        self.sessions.get(&id)
    }

    pub fn open_sessions(&self) -> impl Iterator<Item = &StageSession> {
        self.sessions.values().filter(|s| s.open)
    }

    /// Outbound requests received from the coordinator, in order
    pub fn requests(&self) -> &[String] {
        &self.requests
    }

    pub fn take_requests(&mut self) -> Vec<String> {
        std::mem::take(&mut self.requests)
    }

    pub fn poll_event(&mut self) -> Option<FrameworkEvent> {
        self.events.pop_front()
    }

    /// Deliver every queued notification to `coordinator`
    pub fn pump(&mut self, coordinator: &mut TooltipCoordinator, now: Instant) {
        while let Some(event) = self.poll_event() {
            coordinator.handle_event(event, self, now);
        }
    }

    pub fn pointer(&self) -> Option<PointerSample> {
        self.pointer
    }

    /// Deliver a pointer move and update native hover tracking
    pub fn move_pointer(&mut self, window: WindowId, position: Point, now: Instant) {
        self.pointer = Some(PointerSample { window, position });
        self.events.push_back(FrameworkEvent::PointerMoved { window, position });

        let under = self.native_hover_target(window, position);
        match (self.hover, under) {
            (Some(current), Some(host)) if current.host == host => {}
            (_, Some(host)) => {
                let delay = self.effective_delay(host);
                self.hover = Some(NativeHover {
                    host,
                    deadline: Some(now + delay),
                });
            }
            (_, None) => self.hover = None,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.hover.and_then(|h| h.deadline)
    }

    /// Run native tooltip timing up to `now`
    pub fn advance(&mut self, now: Instant) {
        let Some(hover) = self.hover else {
            return;
        };
        match hover.deadline {
            Some(deadline) if deadline <= now => {}
            _ => return,
        }
        self.hover = Some(NativeHover {
            deadline: None,
            ..hover
        });

        let Some(session) = self.promote(hover.host) else {
            return;
        };
        if let Some(host) = self.hosts.get_mut(&hover.host) {
            host.shown_natively = true;
        }
        if !self.is_open(session) {
            self.open_session(session, hover.host);
        }
    }

    fn native_hover_target(&self, window: WindowId, position: Point) -> Option<HostId> {
        let cell = cell_of(position)?;
        self.hosts
            .values()
            .filter(|h| h.window == window && h.tracks_native_hover())
            .find(|h| h.rect.contains(cell))
            .map(|h| h.id)
    }

    fn effective_delay(&self, host: HostId) -> Duration {
        let ms = self
            .hosts
            .get(&host)
            .and_then(|h| h.show_delay_ms)
            .unwrap_or(i64::try_from(self.default_show_delay_ms).unwrap_or(i64::MAX));
        clamp_delay(ms)
    }

    fn promote(&mut self, host: HostId) -> Option<SessionId> {
        let next = SessionId(self.next_session);
        let entry = self.hosts.get_mut(&host)?;
        match entry.content.clone()? {
            TooltipContent::Session(session) => Some(session),
            TooltipContent::Plain(text) => {
                self.next_session += 1;
                entry.content = Some(TooltipContent::Session(next));
                self.sessions.insert(next, StageSession::new(next, host, text));
                Some(next)
            }
        }
    }

    fn open_session(&mut self, session: SessionId, placement: HostId) {
        let Some(anchor) = self.hosts.get(&placement).map(|h| h.rect) else {
            return;
        };
        // One tooltip at a time
        let others: Vec<SessionId> = self
            .sessions
            .values()
            .filter(|s| s.open && s.id != session)
            .map(|s| s.id)
            .collect();
        for other in others {
            self.close_session(other);
        }

        let Some(entry) = self.sessions.get_mut(&session) else {
            return;
        };
        entry.open = true;
        entry.placement = Some(placement);
        entry.rect = Some(entry.placement_rect(anchor));
        self.events.push_back(FrameworkEvent::TooltipOpened {
            session,
            host: placement,
        });
    }

    fn close_session(&mut self, session: SessionId) {
        let Some(entry) = self.sessions.get_mut(&session) else {
            return;
        };
        if !entry.open {
            return;
        }
        entry.open = false;
        entry.rect = None;
        self.events.push_back(FrameworkEvent::TooltipClosed { session });
    }

    /// Close a tooltip the way the application would, bypassing the coordinator
    pub fn force_close(&mut self, session: SessionId) {
        self.close_session(session);
    }

    fn session_window(&self, session: &StageSession) -> Option<WindowId> {
        let host = session.placement.unwrap_or(session.owner);
        self.hosts.get(&host).map(|h| h.window)
    }
}

fn cell_of(position: Point) -> Option<Position> {
    if position.x < 0.0 || position.y < 0.0 {
        return None;
    }
    let x = u16::try_from(position.x.floor() as i64).ok()?;
    let y = u16::try_from(position.y.floor() as i64).ok()?;
    Some(Position::new(x, y))
}

impl TooltipBackend for Stage {
    fn top_level_windows(&self) -> Vec<WindowId> {
        self.windows.iter().copied().collect()
    }

    fn locate(&self, target: Target, window: WindowId, pointer: Point) -> Option<LocalHit> {
        match target {
            Target::Host(id) => {
                let host = self.hosts.get(&id)?;
                if host.window != window {
                    return None;
                }
                Some(hit_in_rect(host.rect, host.visible, pointer))
            }
            Target::Tooltip(id) => {
                let session = self.sessions.get(&id)?;
                let rect = session.rect?;
                if self.session_window(session)? != window {
                    return None;
                }
                Some(hit_in_rect(rect, session.open, pointer))
            }
        }
    }

    fn show_delay_ms(&self, host: HostId) -> Option<i64> {
        self.hosts.get(&host)?.show_delay_ms
    }

    fn tooltip_content(&self, host: HostId) -> Option<TooltipContent> {
        self.hosts.get(&host)?.content.clone()
    }

    fn promote_content(&mut self, host: HostId) -> Option<SessionId> {
        let session = self.promote(host)?;
        self.requests.push(format!("promote {} -> {}", host, session));
        Some(session)
    }

    fn is_open(&self, session: SessionId) -> bool {
        self.sessions.get(&session).is_some_and(|s| s.open)
    }

    fn request_open(&mut self, session: SessionId, placement: HostId) {
        self.requests.push(format!("open {} on {}", session, placement));
        if self.is_open(session) {
            return;
        }
        self.open_session(session, placement);
    }

    fn request_close(&mut self, session: SessionId) {
        self.requests.push(format!("close {}", session));
        self.close_session(session);
    }
}

#[cfg(test)]
#[path = "stage_state_tests.rs"]
mod stage_state_tests;
