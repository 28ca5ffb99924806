//! docsurface library - searchable rendering surfaces for the terminal
//!
//! A [`SearchableSurface`] wraps any [`RenderingEngine`] with a floating
//! find bar, pointer interception and zoom. The bundled [`TextEngine`]
//! shows plain-text documentation pages.

pub mod browser;
pub mod config;
pub mod engine;
pub mod error;
pub mod notification;
pub mod overlay;
pub mod router;
pub mod searchable;
pub mod signals;
pub mod surface;
pub mod text_engine;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use engine::{FindFlags, RenderingEngine};
pub use searchable::SearchableSurface;
pub use text_engine::TextEngine;
