//! Plain-text documentation engine
//!
//! A small [`RenderingEngine`](crate::engine::RenderingEngine) for terminal use.
//! It shows bundled pages and local text files, detects bare URLs as links,
//! keeps a session history and highlights find-in-page matches.

mod document;
mod matcher;
mod pages;
mod text_engine_render;
mod text_engine_state;
mod viewport;

pub use document::{Document, Link};
pub use matcher::Match;
pub use pages::{BLANK_URL, HELP_URL, resolve};
pub use text_engine_state::TextEngine;
