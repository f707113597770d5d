// ABOUTME: Configuration types and loading for imgrm.
// ABOUTME: Layers an optional YAML file, engine host env vars and CLI flags.

use crate::error::{Error, Result};
use crate::runtime::{RemoveOptions, RuntimeConfig, RuntimeType};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "IMGRM_CONFIG";
pub const CONFIG_DIR: &str = "imgrm";
pub const CONFIG_FILENAME: &str = "config.yml";

/// Engine host variables, checked in order.
pub const HOST_ENV_VARS: [&str; 2] = ["DOCKER_HOST", "CONTAINER_HOST"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub runtime: Option<RuntimeType>,

    #[serde(default)]
    pub socket: Option<String>,

    /// Per-request timeout for engine API calls.
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    /// Default for `--force`.
    #[serde(default)]
    pub force: bool,

    /// Default for pruning untagged parents; `--no-prune` turns it off.
    #[serde(default = "default_prune")]
    pub prune: bool,
}

fn default_timeout() -> Duration {
    Duration::from_secs(120)
}

fn default_prune() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            runtime: None,
            socket: None,
            timeout: default_timeout(),
            force: false,
            prune: default_prune(),
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file is a valid, all-default config.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load the config file, if any.
    ///
    /// An explicit path (flag, then `IMGRM_CONFIG`) must exist. The default
    /// location under the XDG config directory is optional.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            return Self::load(Path::new(&path));
        }

        match default_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Apply `DOCKER_HOST` / `CONTAINER_HOST` on top of the file settings.
    pub fn with_env(mut self) -> Result<Self> {
        for var in HOST_ENV_VARS {
            if let Ok(value) = std::env::var(var)
                && !value.is_empty()
            {
                self.socket = Some(parse_host(&value)?);
                break;
            }
        }
        Ok(self)
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, runtime: Option<RuntimeType>, socket: Option<String>) -> Self {
        if runtime.is_some() {
            self.runtime = runtime;
        }
        if socket.is_some() {
            self.socket = socket;
        }
        self
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            runtime: self.runtime,
            socket: self.socket.clone(),
        }
    }

    /// Combine configured defaults with the `--force` / `--no-prune` flags.
    pub fn remove_options(&self, force: bool, no_prune: bool) -> RemoveOptions {
        RemoveOptions {
            force: self.force || force,
            prune_children: self.prune && !no_prune,
        }
    }
}

/// `$XDG_CONFIG_HOME/imgrm/config.yml`, falling back to `~/.config`.
pub fn default_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Turn an engine host value into a local socket path.
///
/// Only unix sockets are supported: `unix:///path` or a bare absolute path.
pub fn parse_host(value: &str) -> Result<String> {
    if let Some(path) = value.strip_prefix("unix://") {
        if path.is_empty() {
            return Err(Error::InvalidConfig(format!(
                "empty socket path in host: {value}"
            )));
        }
        return Ok(path.to_string());
    }

    if value.starts_with('/') {
        return Ok(value.to_string());
    }

    Err(Error::InvalidConfig(format!(
        "unsupported engine host (only unix sockets): {value}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_host_accepts_unix_scheme() {
        assert_eq!(
            parse_host("unix:///var/run/docker.sock").unwrap(),
            "/var/run/docker.sock"
        );
        assert_eq!(parse_host("/tmp/podman.sock").unwrap(), "/tmp/podman.sock");
    }

    #[test]
    fn parse_host_rejects_tcp() {
        let err = parse_host("tcp://10.0.0.1:2375").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn parse_host_rejects_empty_unix_path() {
        assert!(parse_host("unix://").is_err());
    }

    #[test]
    fn flags_only_strengthen_configured_defaults() {
        let config = Config {
            force: true,
            prune: false,
            ..Config::default()
        };
        assert_eq!(
            config.remove_options(false, false),
            RemoveOptions {
                force: true,
                prune_children: false,
            }
        );

        let config = Config::default();
        assert_eq!(config.remove_options(false, false), RemoveOptions::default());
        assert_eq!(
            config.remove_options(true, true),
            RemoveOptions {
                force: true,
                prune_children: false,
            }
        );
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let config = Config {
            runtime: Some(RuntimeType::Podman),
            socket: Some("/a.sock".to_string()),
            ..Config::default()
        }
        .with_overrides(None, Some("/b.sock".to_string()));

        assert_eq!(config.runtime, Some(RuntimeType::Podman));
        assert_eq!(config.socket.as_deref(), Some("/b.sock"));
    }
}
