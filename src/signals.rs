//! Outward notifications
//!
//! The embedding application registers observers on a surface and receives
//! every [`SurfaceSignal`] in emission order.

use std::fmt;

use crate::engine::WindowType;

/// Notifications a searchable surface sends to its embedder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceSignal {
    UrlChanged(String),
    TitleChanged(String),
    /// Out-of-band open request: show this link in a new view
    LinkClicked(String),
    /// Hover hint for the embedder's status line; `None` clears it
    ToolTipChanged(Option<String>),
    LoadFinished { ok: bool },
    /// A surface was created for an engine new-window request and is waiting
    /// in `take_new_surfaces`
    NewSurfaceCreated(WindowType),
}

/// Handle returned by [`Signals::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(usize);

type Observer = Box<dyn FnMut(&SurfaceSignal)>;

/// Observer registry
#[derive(Default)]
pub struct Signals {
    observers: Vec<(SubscriberId, Observer)>,
    next_id: usize,
}

impl fmt::Debug for Signals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signals")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Signals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&SurfaceSignal) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if the id was not registered
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn emit(&mut self, signal: SurfaceSignal) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&signal);
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
