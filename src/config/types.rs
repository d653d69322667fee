// Configuration type definitions

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::hit_test::DEFAULT_HIT_MARGIN;

pub const DEFAULT_GRACE_MS: u64 = 120;
pub const DEFAULT_SHOW_DELAY_MS: u64 = 400;

/// Tooltip timing and hit-test configuration section
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Close evaluation is suppressed for this long after a tooltip opens
    pub grace_ms: u64,
    /// Tolerance around host and tooltip edges
    pub hit_margin: f64,
    /// Show delay for hosts that leave theirs unset
    pub default_show_delay_ms: u64,
}

impl TooltipConfig {
    pub fn grace_window(&self) -> Duration {
        Duration::from_millis(self.grace_ms)
    }

    /// Margin used by the hit tester; negative or NaN values fall back to zero
    pub fn margin(&self) -> f64 {
        if self.hit_margin.is_finite() && self.hit_margin > 0.0 {
            self.hit_margin
        } else {
            0.0
        }
    }
}

impl Default for TooltipConfig {
    fn default() -> Self {
        TooltipConfig {
            grace_ms: DEFAULT_GRACE_MS,
            hit_margin: DEFAULT_HIT_MARGIN,
            default_show_delay_ms: DEFAULT_SHOW_DELAY_MS,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tooltip: TooltipConfig,
}
