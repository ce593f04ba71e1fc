//! Error types for Radiant operations.
//!
//! [`RadiantError`] covers failures that abort a whole operation. Geometry
//! problems on a single connector are not errors at this level: they are
//! recorded on the connection as a [`GeometryWarning`](crate::GeometryWarning)
//! so the rest of the diagram still renders.

use std::io;

use thiserror::Error;

/// The main error type for Radiant operations.
#[derive(Debug, Error)]
pub enum RadiantError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid diagram input: {0}")]
    Input(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<radiant_core::color::ColorError> for RadiantError {
    fn from(err: radiant_core::color::ColorError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<crate::export::Error> for RadiantError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
