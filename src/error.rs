use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Unsupported URL scheme: {0}\n\nOnly about:, qrc: and file: pages can be displayed.")]
    UnsupportedScheme(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
