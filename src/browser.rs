//! Browser shell
//!
//! Holds the open views, forwards terminal events to the active one and
//! reacts to the signals they emit.

mod browser_events;
mod browser_render;
mod browser_state;

pub use browser_state::{Browser, TabId};
