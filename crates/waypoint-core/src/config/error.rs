//! Configuration load and validation errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::target::TargetError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot locate XDG config directory")]
    Xdg(#[from] xdg::BaseDirectoriesError),

    #[error("failed to read config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),

    /// `target_url` absent from file, environment and flags.
    #[error("target_url is not set (config file, WAYPOINT_TARGET_URL or --target)")]
    MissingTarget,

    #[error("invalid target_url")]
    InvalidTarget(#[from] TargetError),

    #[error("environment variable {var}={value:?} is not valid")]
    InvalidEnv { var: &'static str, value: String },

    #[error("invalid listen address {host:?} port {port} (host must be an IP address)")]
    InvalidListen { host: String, port: u16 },
}
