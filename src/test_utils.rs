#[cfg(test)]
pub mod test_helpers {
    use std::time::{Duration, Instant};

    use ratatui::layout::Rect;

    use crate::backend::{HostId, WindowId};
    use crate::config::TooltipConfig;
    use crate::coordinator::{ReopenOutcome, TooltipCoordinator};
    use crate::geometry::Point;
    use crate::stage::Stage;

    pub fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// A stage with one window, wired to an initialized coordinator
    ///
    /// Time is virtual: every step names its offset from `t0` in
    /// milliseconds.
    pub struct Harness {
        pub stage: Stage,
        pub coordinator: TooltipCoordinator,
        pub window: WindowId,
        pub t0: Instant,
    }

    impl Harness {
        pub fn new() -> Self {
            Self::with_config(TooltipConfig::default())
        }

        pub fn with_config(config: TooltipConfig) -> Self {
            let mut stage = Stage::with_default_show_delay(config.default_show_delay_ms);
            let window = stage.add_window();
            let mut coordinator = TooltipCoordinator::new(config);
            coordinator.initialize(&stage);
            let t0 = Instant::now();
            stage.pump(&mut coordinator, t0);
            Self {
                stage,
                coordinator,
                window,
                t0,
            }
        }

        pub fn at(&self, t_ms: u64) -> Instant {
            self.t0 + ms(t_ms)
        }

        /// Host at x=10, y=5, 20 wide and 3 tall, with a plain tip
        pub fn button(&mut self, label: &str, delay_ms: i64) -> HostId {
            let host = self.stage.add_tipped_host(
                self.window,
                label,
                Rect::new(10, 5, 20, 3),
                "hi",
            );
            if let Some(h) = self.stage.host_mut(host) {
                h.show_delay_ms = Some(delay_ms);
            }
            host
        }

        pub fn host_at(&mut self, label: &str, rect: Rect, delay_ms: i64) -> HostId {
            let host = self.stage.add_tipped_host(self.window, label, rect, "tip");
            if let Some(h) = self.stage.host_mut(host) {
                h.show_delay_ms = Some(delay_ms);
            }
            host
        }

        pub fn move_to(&mut self, x: f64, y: f64, t_ms: u64) {
            let now = self.at(t_ms);
            self.stage.move_pointer(self.window, Point::new(x, y), now);
            self.stage.pump(&mut self.coordinator, now);
        }

        /// Run native timing and the reopen timer at `t_ms`
        pub fn advance(&mut self, t_ms: u64) -> Option<ReopenOutcome> {
            let now = self.at(t_ms);
            self.stage.advance(now);
            self.stage.pump(&mut self.coordinator, now);
            let outcome = self.coordinator.tick(&mut self.stage, now);
            self.stage.pump(&mut self.coordinator, now);
            outcome
        }

        pub fn force_close_current(&mut self, t_ms: u64) -> bool {
            let now = self.at(t_ms);
            let closed = self.coordinator.close_current(&mut self.stage);
            self.stage.pump(&mut self.coordinator, now);
            closed
        }
    }
}
