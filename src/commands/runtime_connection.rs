// ABOUTME: Shared helper for connecting to the local container runtime.
// ABOUTME: Resolves the socket, connects, and checks the engine answers.

use imgrm::config::Config;
use imgrm::error::Result;
use imgrm::runtime::{BollardRuntime, RuntimeError, RuntimeInfo, resolve_runtime};

/// Connect to the container runtime described by `config`.
///
/// Pings the engine once so an unreachable socket fails fast with a single
/// connection error instead of one error per image.
pub async fn connect_to_runtime(config: &Config) -> Result<BollardRuntime> {
    let endpoint = resolve_runtime(&config.runtime_config()).map_err(RuntimeError::from)?;

    tracing::debug!(
        runtime = %endpoint.runtime_type,
        socket = %endpoint.socket_path,
        "connecting to runtime"
    );

    let runtime = BollardRuntime::connect(&endpoint, config.timeout).map_err(RuntimeError::from)?;
    runtime.ping().await.map_err(RuntimeError::from)?;

    match runtime.info().await {
        Ok(meta) => tracing::debug!(
            name = %meta.name,
            version = %meta.version,
            api = %meta.api_version,
            "connected"
        ),
        Err(e) => tracing::debug!("could not read engine version: {e}"),
    }

    Ok(runtime)
}
