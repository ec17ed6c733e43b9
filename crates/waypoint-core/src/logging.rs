//! Logging init: `~/.local/state/waypoint/waypoint.log`, or stderr when asked
//! for or when the state dir is not writable.

use anyhow::{anyhow, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,waypoint=debug,waypoint_core=debug";
const LOG_FILE_NAME: &str = "waypoint.log";

/// Requested log destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Log file under the XDG state dir, stderr if it cannot be opened.
    File,
    /// Always stderr (e.g. under a supervisor that collects it).
    Stderr,
}

/// Where logs actually go after [`init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    File(PathBuf),
    Stderr,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Errs only if one is already installed.
pub fn init(sink: LogSink) -> Result<LogDestination> {
    match sink {
        LogSink::Stderr => {
            install_stderr()?;
            Ok(LogDestination::Stderr)
        }
        LogSink::File => match log_dir().and_then(|dir| open_log_file(&dir).map_err(Into::into)) {
            Ok((path, file)) => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter())
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .try_init()
                    .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;
                tracing::info!("waypoint logging initialized at {}", path.display());
                Ok(LogDestination::File(path))
            }
            Err(err) => {
                install_stderr()?;
                tracing::warn!("file logging unavailable ({err:#}); logging to stderr");
                Ok(LogDestination::Stderr)
            }
        },
    }
}

fn install_stderr() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}

fn log_dir() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("waypoint")?;
    Ok(xdg_dirs.get_state_home().join("waypoint"))
}

/// Create `dir` if needed and open the log file in append mode.
fn open_log_file(dir: &Path) -> io::Result<(PathBuf, File)> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE_NAME);
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}
