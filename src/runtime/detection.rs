// ABOUTME: Runtime detection logic for the local system.
// ABOUTME: Honours explicit overrides, then checks Podman sockets before Docker.

use super::types::{RuntimeConfig, RuntimeEndpoint, RuntimeType};
use std::path::Path;

/// Error during runtime detection.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("no container runtime found (checked Podman and Docker sockets)")]
    NoRuntimeFound,
}

const ROOTFUL_PODMAN: &str = "/run/podman/podman.sock";
const DOCKER_SOCKET: &str = "/var/run/docker.sock";

/// Detect container runtime on the local system.
///
/// Detection order:
/// 1. Rootless Podman socket (`/run/user/$UID/podman/podman.sock`)
/// 2. Rootful Podman socket (`/run/podman/podman.sock`)
/// 3. Docker socket (`/var/run/docker.sock`)
pub fn detect_local() -> Result<RuntimeEndpoint, DetectionError> {
    detect_with(|path| Path::new(path).exists(), get_uid())
}

/// Resolve the runtime endpoint, preferring explicit configuration.
///
/// An explicit socket is used as-is; its runtime type comes from the config
/// or is inferred from the path. An explicit runtime without a socket uses
/// that runtime's default socket. Otherwise the local system is checked.
pub fn resolve_runtime(config: &RuntimeConfig) -> Result<RuntimeEndpoint, DetectionError> {
    if let Some(socket) = &config.socket {
        let runtime_type = config
            .runtime
            .unwrap_or_else(|| RuntimeType::from_socket_path(socket));
        return Ok(RuntimeEndpoint {
            runtime_type,
            socket_path: socket.clone(),
        });
    }

    if let Some(runtime_type) = config.runtime {
        return Ok(RuntimeEndpoint {
            runtime_type,
            socket_path: default_socket_path(runtime_type),
        });
    }

    detect_local()
}

fn detect_with(
    exists: impl Fn(&str) -> bool,
    uid: Option<String>,
) -> Result<RuntimeEndpoint, DetectionError> {
    // 1. Rootless Podman
    if let Some(uid) = uid {
        let rootless_socket = format!("/run/user/{}/podman/podman.sock", uid);
        if exists(rootless_socket.as_str()) {
            return Ok(RuntimeEndpoint {
                runtime_type: RuntimeType::Podman,
                socket_path: rootless_socket,
            });
        }
    }

    // 2. Rootful Podman
    if exists(ROOTFUL_PODMAN) {
        return Ok(RuntimeEndpoint {
            runtime_type: RuntimeType::Podman,
            socket_path: ROOTFUL_PODMAN.to_string(),
        });
    }

    // 3. Docker
    if exists(DOCKER_SOCKET) {
        return Ok(RuntimeEndpoint {
            runtime_type: RuntimeType::Docker,
            socket_path: DOCKER_SOCKET.to_string(),
        });
    }

    Err(DetectionError::NoRuntimeFound)
}

fn get_uid() -> Option<String> {
    std::env::var("UID").ok().or_else(|| {
        // Fall back to reading /proc/self/status
        std::fs::read_to_string("/proc/self/status")
            .ok()
            .and_then(|s| {
                s.lines()
                    .find(|l| l.starts_with("Uid:"))
                    .and_then(|l| l.split_whitespace().nth(1))
                    .map(|s| s.to_string())
            })
    })
}

fn default_socket_path(runtime: RuntimeType) -> String {
    match runtime {
        RuntimeType::Docker => DOCKER_SOCKET.to_string(),
        RuntimeType::Podman => ROOTFUL_PODMAN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rootless_podman_wins() {
        let endpoint = detect_with(|_| true, Some("1000".to_string())).unwrap();
        assert_eq!(endpoint.runtime_type, RuntimeType::Podman);
        assert_eq!(endpoint.socket_path, "/run/user/1000/podman/podman.sock");
    }

    #[test]
    fn falls_back_to_docker() {
        let endpoint = detect_with(|p| p == DOCKER_SOCKET, Some("1000".to_string())).unwrap();
        assert_eq!(endpoint.runtime_type, RuntimeType::Docker);
        assert_eq!(endpoint.socket_path, DOCKER_SOCKET);
    }

    #[test]
    fn nothing_found() {
        let result = detect_with(|_| false, None);
        assert!(matches!(result, Err(DetectionError::NoRuntimeFound)));
    }

    #[test]
    fn explicit_socket_infers_type() {
        let config = RuntimeConfig {
            runtime: None,
            socket: Some("/tmp/podman.sock".to_string()),
        };
        let endpoint = resolve_runtime(&config).unwrap();
        assert_eq!(endpoint.runtime_type, RuntimeType::Podman);
        assert_eq!(endpoint.socket_path, "/tmp/podman.sock");
    }

    #[test]
    fn explicit_runtime_uses_default_socket() {
        let config = RuntimeConfig {
            runtime: Some(RuntimeType::Docker),
            socket: None,
        };
        let endpoint = resolve_runtime(&config).unwrap();
        assert_eq!(endpoint.socket_path, DOCKER_SOCKET);
    }
}
