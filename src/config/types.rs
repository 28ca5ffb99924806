// Configuration type definitions

use serde::Deserialize;

use crate::surface::{ZOOM_MAX, ZOOM_MIN};

/// Find bar configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Key that opens the find bar while the surface has focus
    #[serde(default = "default_trigger")]
    pub trigger: char,
    /// Width of the find bar in columns
    #[serde(default = "default_overlay_width")]
    pub overlay_width: u16,
}

fn default_trigger() -> char {
    '/'
}

fn default_overlay_width() -> u16 {
    32
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            trigger: default_trigger(),
            overlay_width: default_overlay_width(),
        }
    }
}

/// Zoom configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ZoomConfig {
    /// Initial zoom factor for new surfaces (0 is 100%)
    #[serde(default)]
    pub default: i32,
}

impl ZoomConfig {
    /// Default factor clamped to the supported zoom range
    pub fn initial_factor(&self) -> i32 {
        self.default.clamp(ZOOM_MIN, ZOOM_MAX)
    }
}

/// Layout configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Inset of the find bar from the right edge of the surface
    #[serde(default = "default_frame_width")]
    pub frame_width: u16,
}

fn default_frame_width() -> u16 {
    1
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            frame_width: default_frame_width(),
        }
    }
}

/// Browser shell configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserConfig {
    /// Page opened when no target is given on the command line
    #[serde(default = "default_home")]
    pub home: String,
}

fn default_home() -> String {
    "qrc:/help".to_string()
}

impl Default for BrowserConfig {
    fn default() -> Self {
        BrowserConfig {
            home: default_home(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub browser: BrowserConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
