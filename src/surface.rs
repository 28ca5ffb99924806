//! Rendering surface
//!
//! Wraps one engine page with the state the browser keeps per view: the zoom
//! factor and the link cached between pointer press and release. Pointer and
//! wheel events are inspected here before the engine sees them.

mod pointer;
mod surface_state;
mod zoom;

pub use pointer::PointerOutcome;
pub use surface_state::RenderingSurface;
pub use zoom::{ZOOM_LEVELS, ZOOM_MAX, ZOOM_MIN, clamp_zoom, zoom_percent, zoom_scale};
