//! Application-level configuration loading: listen address and optional static assets.

use std::{
    env, fs,
    io::ErrorKind,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "TIMESTAMP_API_CONFIG_PATH";
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    host: IpAddr,
    port: u16,
    static_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(app_config) => {
                    info!(
                        path = %path.display(),
                        addr = %app_config.socket_addr(),
                        "loaded config"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse a JSON configuration document; absent keys take their defaults.
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<RawConfig>(contents).map(Into::into)
    }

    /// Replace the configured port, e.g. from the `PORT` environment variable.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Address the HTTP server binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Directory served for requests that match no API route, if any.
    pub fn static_dir(&self) -> Option<&Path> {
        self.static_dir.as_deref()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            static_dir: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    host: Option<IpAddr>,
    port: Option<u16>,
    static_dir: Option<PathBuf>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        Self {
            host: value.host.unwrap_or(DEFAULT_HOST),
            port: value.port.unwrap_or(DEFAULT_PORT),
            static_dir: value.static_dir.filter(|dir| !dir.as_os_str().is_empty()),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.socket_addr(), "0.0.0.0:3000".parse().unwrap());
        assert!(config.static_dir().is_none());
    }

    #[test]
    fn every_key_is_read() {
        let config = AppConfig::from_json(
            r#"{"host": "127.0.0.1", "port": 8081, "static_dir": "public"}"#,
        )
        .unwrap();
        assert_eq!(config.socket_addr(), "127.0.0.1:8081".parse().unwrap());
        assert_eq!(config.static_dir(), Some(Path::new("public")));
    }

    #[test]
    fn empty_static_dir_is_ignored() {
        let config = AppConfig::from_json(r#"{"static_dir": ""}"#).unwrap();
        assert!(config.static_dir().is_none());
    }

    #[test]
    fn malformed_documents_are_errors() {
        assert!(AppConfig::from_json(r#"{"port": "eighty"}"#).is_err());
        assert!(AppConfig::from_json(r#"{"colour": "blue"}"#).is_err());
        assert!(AppConfig::from_json("not json").is_err());
    }

    #[test]
    fn port_override_keeps_host() {
        let config = AppConfig::from_json(r#"{"host": "127.0.0.1"}"#)
            .unwrap()
            .with_port(9000);
        assert_eq!(config.socket_addr(), "127.0.0.1:9000".parse().unwrap());
    }
}
