// ABOUTME: Opaque image identifier as typed by the user.
// ABOUTME: Accepts tags, digests and IDs verbatim; only rejects blank or whitespace input.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageNameError {
    #[error("image name cannot be empty")]
    Empty,

    #[error("invalid character in image name: {0:?}")]
    InvalidChar(char),
}

/// An image identifier passed straight through to the engine.
///
/// The engine resolves tags, short IDs and digests itself, so no parsing or
/// normalisation happens here. `nginx` stays `nginx`, not `nginx:latest`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageName(String);

impl ImageName {
    pub fn new(value: &str) -> Result<Self, ImageNameError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ImageNameError::Empty);
        }

        if let Some(c) = value
            .chars()
            .find(|c| c.is_whitespace() || c.is_control())
        {
            return Err(ImageNameError::InvalidChar(c));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ImageName {
    type Err = ImageNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
