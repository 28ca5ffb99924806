//! Pointer gesture classification
//!
//! Decides which raw pointer events the surface handles itself. Middle clicks
//! and Ctrl/Shift clicks on a link become out-of-band open requests, Ctrl+wheel
//! becomes a zoom step, everything else goes to the engine.

use ratatui::crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// What the surface did with a pointer event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Delivered to the engine unchanged
    Forwarded,
    /// Swallowed by the surface
    Consumed,
    /// The link should open in a new view; the current page does not navigate
    OpenInNewView(String),
    /// Zoom factor changed to the contained value
    Zoomed(i32),
    /// Outside the surface; nobody handled it
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PointerGesture {
    /// Left or middle press: look up and cache the link under the pointer
    Press(MouseButton),
    /// Middle release, or left release with Ctrl/Shift held
    OpenRelease,
    /// Any other button release
    PlainRelease,
    /// Ctrl+wheel; +1 zooms in, -1 zooms out
    ZoomStep(i32),
    Other,
}

pub(super) fn classify(mouse: &MouseEvent) -> PointerGesture {
    let zoom_modifier = mouse.modifiers.contains(KeyModifiers::CONTROL);
    let open_modifier = mouse
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::SHIFT);

    match mouse.kind {
        MouseEventKind::Down(button @ (MouseButton::Left | MouseButton::Middle)) => {
            PointerGesture::Press(button)
        }
        MouseEventKind::Up(MouseButton::Middle) => PointerGesture::OpenRelease,
        MouseEventKind::Up(MouseButton::Left) if open_modifier => PointerGesture::OpenRelease,
        MouseEventKind::Up(_) => PointerGesture::PlainRelease,
        MouseEventKind::ScrollUp if zoom_modifier => PointerGesture::ZoomStep(1),
        MouseEventKind::ScrollDown if zoom_modifier => PointerGesture::ZoomStep(-1),
        _ => PointerGesture::Other,
    }
}
