// ABOUTME: Capability traits for container runtimes.
// ABOUTME: Defines ImageRemover, ErrorClassifier and RuntimeInfo.

mod classify;
mod image;
mod runtime_info;

pub use classify::{ErrorClassifier, RuntimeClassifier};
pub use image::{DeletionKind, DeletionRecord, ImageError, ImageRemover, RemoveOptions};
pub use runtime_info::{RuntimeInfo, RuntimeInfoError, RuntimeMetadata};
