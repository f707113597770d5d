// ABOUTME: Application-wide error types for imgrm.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::runtime::RuntimeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// One or more images could not be removed. The message lists every
    /// per-image error, one per line, in the order they occurred.
    #[error("{0}")]
    Removal(String),

    #[error("configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("interrupted")]
    Interrupted,

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
