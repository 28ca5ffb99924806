//! Searchable surface
//!
//! The composite an embedder actually holds: one rendering surface with a
//! find bar floating over it. Keys, pointer events, resizes and engine
//! notifications all enter here and are routed to the right child.

mod searchable_events;
mod searchable_render;
mod searchable_state;

pub use searchable_events::KeyDisposition;
pub use searchable_state::{SearchableSurface, SurfaceSettings};
