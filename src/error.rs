//! Crate-level error type

use crate::config::ConfigError;
use crate::rdf::{ParseError, SerializeError};
use thiserror::Error;

/// Converter errors
#[derive(Error, Debug)]
pub enum ConverterError {
    /// Requested conversion does not exist
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Serialize(#[from] SerializeError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub type ConverterResult<T> = Result<T, ConverterError>;
