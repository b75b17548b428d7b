//! Crate error type.
//!
//! The engine itself cannot fail; these are boundary failures (bad CLI
//! input, unreadable config, terminal I/O).

use std::fmt;

use crate::types::UnknownUnit;

#[derive(Debug)]
pub enum AppError {
    /// Terminal or filesystem I/O.
    Io(std::io::Error),
    /// Config file exists but is not valid TOML for our schema.
    Config(toml::de::Error),
    /// Text that does not admit as a finite number.
    InvalidInput(String),
    /// Text that does not name a unit.
    InvalidUnit(UnknownUnit),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "config parse error: {e}"),
            AppError::InvalidInput(text) => {
                write!(f, "'{text}' is not a temperature (expected a finite number)")
            }
            AppError::InvalidUnit(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::InvalidUnit(e) => Some(e),
            AppError::InvalidInput(_) => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e)
    }
}

impl From<UnknownUnit> for AppError {
    fn from(e: UnknownUnit) -> Self {
        AppError::InvalidUnit(e)
    }
}
