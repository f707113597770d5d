// ABOUTME: Bollard-based container runtime implementation.
// ABOUTME: Supports both Docker and Podman via Docker-compatible API.

use crate::runtime::traits::{
    DeletionRecord, ImageError, ImageRemover, RemoveOptions, RuntimeInfo, RuntimeInfoError,
    RuntimeMetadata,
};
use crate::runtime::types::{RuntimeEndpoint, RuntimeType};
use crate::types::ImageName;
use async_trait::async_trait;
use bollard::Docker;
use bollard::query_parameters::RemoveImageOptions;
use std::time::Duration;

// =============================================================================
// Error Mapping Helpers
// =============================================================================

fn map_image_remove_error(e: bollard::errors::Error, image_name: &str) -> ImageError {
    match &e {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 404 => {
            // Keep the engine's wording; it names the reference it resolved.
            if message.is_empty() {
                ImageError::NotFound(format!("No such image: {}", image_name))
            } else {
                ImageError::NotFound(message.clone())
            }
        }
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 409 => ImageError::InUse(format!("{}: {}", image_name, message)),
        _ => ImageError::Runtime(format!("failed to remove {}: {}", image_name, e)),
    }
}

/// Query parameters for a single removal.
fn remove_image_options(options: &RemoveOptions) -> RemoveImageOptions {
    RemoveImageOptions {
        force: options.force,
        noprune: !options.prune_children,
        ..Default::default()
    }
}

// =============================================================================
// BollardRuntime
// =============================================================================

/// Container runtime implementation using bollard.
///
/// Supports both Docker and Podman via Docker-compatible API.
pub struct BollardRuntime {
    client: Docker,
    runtime_type: RuntimeType,
}

impl BollardRuntime {
    /// Create a new BollardRuntime from a Docker client.
    pub fn new(client: Docker, runtime_type: RuntimeType) -> Self {
        Self {
            client,
            runtime_type,
        }
    }

    /// Connect to the runtime listening on `endpoint`.
    ///
    /// `timeout` bounds every API request made through this client.
    pub fn connect(
        endpoint: &RuntimeEndpoint,
        timeout: Duration,
    ) -> Result<Self, RuntimeInfoError> {
        let client = Docker::connect_with_unix(
            &endpoint.socket_path,
            timeout.as_secs().max(1),
            bollard::API_DEFAULT_VERSION,
        )
        .map_err(|e| RuntimeInfoError::ConnectionFailed(e.to_string()))?;
        Ok(Self::new(client, endpoint.runtime_type))
    }
}

#[async_trait]
impl RuntimeInfo for BollardRuntime {
    async fn info(&self) -> Result<RuntimeMetadata, RuntimeInfoError> {
        let version = self
            .client
            .version()
            .await
            .map_err(|e| RuntimeInfoError::ConnectionFailed(e.to_string()))?;

        let name = match self.runtime_type {
            RuntimeType::Docker => "Docker".to_string(),
            RuntimeType::Podman => "Podman".to_string(),
        };

        Ok(RuntimeMetadata {
            name,
            version: version.version.unwrap_or_default(),
            api_version: version.api_version.unwrap_or_default(),
        })
    }

    async fn ping(&self) -> Result<(), RuntimeInfoError> {
        self.client
            .ping()
            .await
            .map_err(|e| RuntimeInfoError::ConnectionFailed(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl ImageRemover for BollardRuntime {
    async fn remove_image(
        &self,
        name: &ImageName,
        options: &RemoveOptions,
    ) -> Result<Vec<DeletionRecord>, ImageError> {
        let image_name = name.as_str();

        let items = self
            .client
            .remove_image(image_name, Some(remove_image_options(options)), None)
            .await
            .map_err(|e| map_image_remove_error(e, image_name))?;

        Ok(items
            .into_iter()
            .map(|item| DeletionRecord::from_engine(item.deleted, item.untagged))
            .collect())
    }
}
