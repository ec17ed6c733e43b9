//! Configuration: TOML file under XDG config, environment and flag overrides,
//! and one-shot validation into a [`ValidatedConfig`].

mod error;
mod page;

pub use error::ConfigError;
pub use page::{PageConfig, TextDirection, DEFAULT_STYLESHEET_URL};

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::navigation::{NavigationPlan, RedirectStatus};
use crate::target::TargetUrl;

/// Documented default destination, written into a freshly created config file.
pub const DEFAULT_TARGET_URL: &str = "http://localhost:8080";

pub const ENV_TARGET_URL: &str = "WAYPOINT_TARGET_URL";
pub const ENV_HOST: &str = "WAYPOINT_HOST";
pub const ENV_PORT: &str = "WAYPOINT_PORT";
pub const ENV_SERVER_REDIRECT: &str = "WAYPOINT_SERVER_REDIRECT";

/// Bind address (`[listen]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenConfig {
    /// IP address to bind; `0.0.0.0` accepts connections on all interfaces.
    pub host: String,
    pub port: u16,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Global configuration loaded from `~/.config/waypoint/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaypointConfig {
    /// Destination of the header redirect, the timer and the fallback link.
    #[serde(default)]
    pub target_url: Option<String>,
    /// Issue the 3xx header. `false` serves the page with 200, as a static host would.
    #[serde(default = "default_server_redirect")]
    pub server_redirect: bool,
    #[serde(default)]
    pub redirect_status: RedirectStatus,
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub page: PageConfig,
}

fn default_server_redirect() -> bool {
    true
}

impl Default for WaypointConfig {
    fn default() -> Self {
        Self {
            target_url: Some(DEFAULT_TARGET_URL.to_string()),
            server_redirect: true,
            redirect_status: RedirectStatus::default(),
            listen: ListenConfig::default(),
            page: PageConfig::default(),
        }
    }
}

/// Values given on the command line; they win over file and environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub target_url: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub static_mode: bool,
}

/// Configuration after validation: safe to render and serve.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub plan: NavigationPlan,
    pub listen: SocketAddr,
    pub page: PageConfig,
}

impl WaypointConfig {
    /// Parse a TOML document. `path` is only used for error messages.
    pub fn from_toml(data: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `WAYPOINT_*` overrides using `lookup` (normally `std::env::var`).
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(target) = lookup(ENV_TARGET_URL) {
            self.target_url = Some(target);
        }
        if let Some(host) = lookup(ENV_HOST) {
            self.listen.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.listen.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_PORT,
                value: port.clone(),
            })?;
        }
        if let Some(flag) = lookup(ENV_SERVER_REDIRECT) {
            self.server_redirect = parse_bool(&flag).ok_or_else(|| ConfigError::InvalidEnv {
                var: ENV_SERVER_REDIRECT,
                value: flag.clone(),
            })?;
        }
        Ok(())
    }

    pub fn apply_process_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env(|var| std::env::var(var).ok())
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(target) = &overrides.target_url {
            self.target_url = Some(target.clone());
        }
        if let Some(host) = &overrides.host {
            self.listen.host = host.clone();
        }
        if let Some(port) = overrides.port {
            self.listen.port = port;
        }
        if overrides.static_mode {
            self.server_redirect = false;
        }
    }

    /// Validate once before anything is rendered or bound.
    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        let raw = self
            .target_url
            .as_deref()
            .ok_or(ConfigError::MissingTarget)?;
        let target: TargetUrl = raw.parse()?;

        let ip: IpAddr = self
            .listen
            .host
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidListen {
                host: self.listen.host.clone(),
                port: self.listen.port,
            })?;

        Ok(ValidatedConfig {
            plan: NavigationPlan::new(target, self.server_redirect, self.redirect_status),
            listen: SocketAddr::new(ip, self.listen.port),
            page: self.page.clone(),
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("waypoint")?;
    xdg_dirs
        .place_config_file("config.toml")
        .map_err(|source| ConfigError::Write {
            path: xdg_dirs.get_config_home(),
            source,
        })
}

/// Load configuration from the XDG path, creating a default file if none exists.
pub fn load_or_init() -> Result<WaypointConfig, ConfigError> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WaypointConfig::default();
        write_config(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path. A missing file is an error.
pub fn load_from(path: &Path) -> Result<WaypointConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    WaypointConfig::from_toml(&data, path)
}

pub fn write_config(path: &Path, cfg: &WaypointConfig) -> Result<(), ConfigError> {
    let toml = toml::to_string_pretty(cfg)?;
    let write_err = |source: std::io::Error| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, toml).map_err(write_err)
}
