use ratatui::style::Color;
use std::time::{Duration, Instant};

/// Determines style and lifetime of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    /// Confirmations such as "Opened in background"
    #[default]
    Info,
    /// Invalid config, pages that failed to load
    Warning,
    /// Stays until dismissed
    Error,
}

impl NotificationKind {
    fn duration(self) -> Option<Duration> {
        match self {
            NotificationKind::Info => Some(Duration::from_millis(1500)),
            NotificationKind::Warning => Some(Duration::from_secs(5)),
            NotificationKind::Error => None,
        }
    }

    pub fn colors(self) -> NotificationColors {
        match self {
            NotificationKind::Info => NotificationColors {
                fg: Color::White,
                bg: Color::DarkGray,
                border: Color::Gray,
            },
            NotificationKind::Warning => NotificationColors {
                fg: Color::Black,
                bg: Color::Yellow,
                border: Color::Yellow,
            },
            NotificationKind::Error => NotificationColors {
                fg: Color::White,
                bg: Color::Red,
                border: Color::LightRed,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationColors {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
    pub duration: Option<Duration>, // None = permanent
}

impl Notification {
    pub fn new(message: &str, kind: NotificationKind) -> Self {
        Self {
            // Only the first line fits in the box
            message: message.lines().next().unwrap_or_default().to_string(),
            kind,
            created_at: Instant::now(),
            duration: kind.duration(),
        }
    }

    pub fn is_expired(&self) -> bool {
        match self.duration {
            Some(d) => self.created_at.elapsed() > d,
            None => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct NotificationState {
    pub current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.show_kind(message, NotificationKind::Info);
    }

    pub fn show_warning(&mut self, message: &str) {
        self.show_kind(message, NotificationKind::Warning);
    }

    pub fn show_error(&mut self, message: &str) {
        self.show_kind(message, NotificationKind::Error);
    }

    pub fn show_kind(&mut self, message: &str, kind: NotificationKind) {
        #[cfg(debug_assertions)]
        log::debug!("Notification ({:?}): {}", kind, message);

        self.current = Some(Notification::new(message, kind));
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Clear expired notification, returns true if cleared
    pub fn clear_if_expired(&mut self) -> bool {
        if let Some(ref notif) = self.current
            && notif.is_expired()
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[cfg(test)]
    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }
}
