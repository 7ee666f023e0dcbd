//! Crate-wide error type.
//!
//! Unresolvable city names are deliberately NOT errors — they surface as
//! `None`/`false` from the catalog and registry. This enum covers the
//! failures that are fatal for the current operation.

use std::fmt;

/// Errors surfaced by the storage and rendering layers.
#[derive(Debug)]
pub enum Error {
    /// The reference or association store is unreachable or corrupt.
    Storage(sqlx::Error),
    /// PNG encoding failed.
    Image(image::ImageError),
    /// The embedded label font could not be parsed.
    Font,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Image(e) => write!(f, "Image encoding error: {}", e),
            Self::Font => write!(f, "Embedded font data is invalid"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Storage(e) => Some(e),
            Self::Image(e) => Some(e),
            Self::Font => None,
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(e: sqlx::Error) -> Self {
        Self::Storage(e)
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}
