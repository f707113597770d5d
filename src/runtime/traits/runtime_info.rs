// ABOUTME: Runtime info trait for container runtimes.
// ABOUTME: Checks connectivity and reports engine version before a batch.

use async_trait::async_trait;

/// Runtime metadata operations.
#[async_trait]
pub trait RuntimeInfo: Send + Sync {
    /// Get runtime version and metadata.
    async fn info(&self) -> Result<RuntimeMetadata, RuntimeInfoError>;

    /// Ping the runtime to check connectivity.
    async fn ping(&self) -> Result<(), RuntimeInfoError>;
}

/// Engine identification returned by [`RuntimeInfo::info`].
#[derive(Debug, Clone)]
pub struct RuntimeMetadata {
    /// Runtime name ("Docker" or "Podman").
    pub name: String,
    pub version: String,
    pub api_version: String,
}

/// Errors from runtime info operations.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeInfoError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
}
