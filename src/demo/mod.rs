//! Demo playground for the binary
//!
//! A row of buttons on a [`Stage`](hovertip::stage::Stage), some enabled
//! and some disabled, each with a tooltip. The coordinator closes tooltips
//! when the pointer leaves and re-shows them on re-entry.

mod demo_render;
mod demo_state;

pub use demo_render::render;
pub use demo_state::DemoApp;
