//! Crate-level error types.

use std::fmt;

/// Errors produced by the carousel crate.
///
/// The interaction loop itself never fails; errors only come from
/// configuration and from binding to a host environment.
#[derive(Debug)]
pub enum CarouselError {
    /// Options violate a construction contract (e.g. zero items).
    InvalidOptions(String),
    /// TOML / JSON options parsing or serialization failure.
    OptionsParse(String),
    /// Generic I/O failure while reading or writing a preset.
    Io(std::io::Error),
    /// The host document is missing something the carousel needs.
    Dom(String),
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOptions(msg) => {
                write!(f, "invalid carousel options: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Dom(msg) => write!(f, "DOM error: {msg}"),
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
