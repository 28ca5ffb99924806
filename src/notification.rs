//! Transient messages for the browser shell
//!
//! Config warnings, failed page loads and background-open confirmations are
//! shown in a small box above the status line until they expire.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NotificationKind, NotificationState};
