// ABOUTME: Container runtime access for Docker and Podman.
// ABOUTME: Detection, connection and the image removal capability.

mod bollard;
mod detection;
mod error;
pub mod traits;
mod types;

pub use self::bollard::BollardRuntime;
pub use detection::{DetectionError, detect_local, resolve_runtime};
pub use error::RuntimeError;
pub use traits::{
    DeletionKind, DeletionRecord, ErrorClassifier, ImageError, ImageRemover, RemoveOptions,
    RuntimeClassifier, RuntimeInfo, RuntimeInfoError, RuntimeMetadata,
};
pub use types::{RuntimeConfig, RuntimeEndpoint, RuntimeType};
