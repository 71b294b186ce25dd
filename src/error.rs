//! Crate-level error types.

use std::fmt;

/// Errors produced by the carousel crate.
///
/// The rotation and focus math never fails; errors only come from the
/// edges where presets and catalogs are read from or written to disk.
#[derive(Debug)]
pub enum CarouselError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Model catalog parsing or validation failure.
    Catalog(String),
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Catalog(msg) => write!(f, "catalog error: {msg}"),
        }
    }
}

impl std::error::Error for CarouselError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CarouselError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
