//! Search overlay
//!
//! A floating find bar anchored to the top-right corner of its host.
//! Text edits drive incremental search; Enter and Shift+Enter step through
//! matches; scrolling keys pass through to the page underneath.

pub mod overlay_events;
pub mod overlay_render;
mod overlay_state;

pub use overlay_events::{OverlayCommand, route_overlay_key};
pub use overlay_state::{OVERLAY_HEIGHT, SearchOverlay};
