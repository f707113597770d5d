// ABOUTME: Image removal capability for container runtimes.
// ABOUTME: Defines the remove options, deletion records and per-image errors.

use crate::types::ImageName;
use async_trait::async_trait;
use std::fmt;

/// Remove a single image from the engine.
///
/// Implemented by [`BollardRuntime`](crate::runtime::BollardRuntime); tests
/// substitute scripted fakes.
#[async_trait]
pub trait ImageRemover: Send + Sync {
    /// Remove one image, returning what the engine untagged or deleted.
    async fn remove_image(
        &self,
        name: &ImageName,
        options: &RemoveOptions,
    ) -> Result<Vec<DeletionRecord>, ImageError>;
}

/// Options applied to every removal in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveOptions {
    /// Tolerate not-found errors across the batch.
    pub force: bool,
    /// Also delete untagged parent images left dangling by the removal.
    pub prune_children: bool,
}

impl Default for RemoveOptions {
    fn default() -> Self {
        Self {
            force: false,
            prune_children: true,
        }
    }
}

/// What happened to a name or layer during a removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionKind {
    /// Underlying image storage was deleted.
    Deleted,
    /// Only a reference was removed; storage is still held elsewhere.
    Untagged,
}

impl fmt::Display for DeletionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeletionKind::Deleted => write!(f, "Deleted"),
            DeletionKind::Untagged => write!(f, "Untagged"),
        }
    }
}

/// One line of engine feedback for a removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionRecord {
    pub kind: DeletionKind,
    pub name: String,
}

impl DeletionRecord {
    pub fn deleted(name: impl Into<String>) -> Self {
        Self {
            kind: DeletionKind::Deleted,
            name: name.into(),
        }
    }

    pub fn untagged(name: impl Into<String>) -> Self {
        Self {
            kind: DeletionKind::Untagged,
            name: name.into(),
        }
    }

    /// Build a record from the engine's `(deleted, untagged)` pair.
    ///
    /// A non-empty deleted name wins; otherwise the untagged name is reported.
    pub fn from_engine(deleted: Option<String>, untagged: Option<String>) -> Self {
        match deleted {
            Some(name) if !name.is_empty() => Self::deleted(name),
            _ => Self::untagged(untagged.unwrap_or_default()),
        }
    }
}

impl fmt::Display for DeletionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.name)
    }
}

/// Errors from image removal.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// Holds the engine's message, e.g. `No such image: nginx:latest`.
    #[error("{0}")]
    NotFound(String),

    #[error("image in use, cannot remove: {0}")]
    InUse(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}

impl ImageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ImageError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_prune_without_force() {
        let opts = RemoveOptions::default();
        assert!(!opts.force);
        assert!(opts.prune_children);
    }

    #[test]
    fn record_prefers_deleted_name() {
        let record = DeletionRecord::from_engine(
            Some("sha256:abc".to_string()),
            Some("nginx:latest".to_string()),
        );
        assert_eq!(record, DeletionRecord::deleted("sha256:abc"));
    }

    #[test]
    fn record_falls_back_to_untagged_when_deleted_is_empty() {
        let record = DeletionRecord::from_engine(Some(String::new()), Some("nginx:1".to_string()));
        assert_eq!(record, DeletionRecord::untagged("nginx:1"));

        let record = DeletionRecord::from_engine(None, Some("nginx:2".to_string()));
        assert_eq!(record, DeletionRecord::untagged("nginx:2"));
    }

    #[test]
    fn record_display_matches_cli_lines() {
        assert_eq!(DeletionRecord::deleted("img-b").to_string(), "Deleted: img-b");
        assert_eq!(
            DeletionRecord::untagged("img-b:v1").to_string(),
            "Untagged: img-b:v1"
        );
    }
}
