//! Page resolution for the text engine

use std::fs;
use std::path::Path;

use super::document::Document;
use crate::error::SurfaceError;

pub const BLANK_URL: &str = "about:blank";
pub const HELP_URL: &str = "qrc:/help";

const HELP_TEXT: &str = "\
# docsurface help

docsurface shows documentation pages in the terminal.

Navigation
  Up / Down            scroll one line
  PageUp / PageDown    scroll one screen
  Home / End           jump to the top or bottom
  Alt+Left, Backspace  go back
  Alt+Right            go forward
  Click a link         open it in this view
  Ctrl+Click, Middle   open it in a background view
  Tab                  switch to the next view
  q, Ctrl+C            quit

Find in page
  /                    open the find bar
  type                 search as you type
  Enter                next match
  Shift+Enter, Alt+Enter  previous match
  Esc                  close the find bar

Zoom
  Ctrl +  / Ctrl -     zoom in or out
  Ctrl 0               reset zoom
  Ctrl+wheel           zoom in or out

Pages
  qrc:/help            this page
  about:blank          an empty page
  https://zealdocs.org the desktop documentation browser
";

/// Loads the page behind `url`.
pub fn resolve(url: &str) -> Result<Document, SurfaceError> {
    match url {
        BLANK_URL => return Ok(Document::parse("", "")),
        HELP_URL | "about:help" => return Ok(Document::parse(HELP_TEXT, "Help")),
        _ => {}
    }

    if let Some(path) = url.strip_prefix("file://").or_else(|| url.strip_prefix("file:")) {
        return read_file(Path::new(path));
    }

    if url.starts_with("http://") || url.starts_with("https://") {
        return Err(SurfaceError::UnsupportedScheme(url.to_string()));
    }

    Err(SurfaceError::PageNotFound(url.to_string()))
}

fn read_file(path: &Path) -> Result<Document, SurfaceError> {
    if !path.is_file() {
        return Err(SurfaceError::PageNotFound(path.display().to_string()));
    }

    let text = fs::read_to_string(path)?;
    let fallback = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(Document::parse(&text, &fallback))
}

/// Page shown in place of content that failed to load
pub fn error_page(url: &str, error: &SurfaceError) -> Document {
    let text = format!(
        "# Failed to load page\n\n{}\n\n{}\n\nReturn to qrc:/help",
        url, error
    );
    Document::parse(&text, "Error")
}
