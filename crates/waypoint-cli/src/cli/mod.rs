//! CLI for the waypoint redirect page.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use waypoint_core::config::{self, ConfigOverrides, ValidatedConfig};
use waypoint_core::logging::{self, LogSink};

use commands::{run_check, run_render, run_serve};

/// Top-level CLI for the waypoint redirect page.
#[derive(Debug, Parser)]
#[command(name = "waypoint")]
#[command(about = "Waypoint: redirect page in front of the law-office application", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/waypoint/config.toml, created on first run).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override target_url.
    #[arg(long, global = true, value_name = "URL")]
    pub target: Option<String>,

    /// Override the listen IP address.
    #[arg(long, global = true, value_name = "IP")]
    pub host: Option<String>,

    /// Override the listen port.
    #[arg(long, global = true, value_name = "PORT")]
    pub port: Option<u16>,

    /// Respond 200 without a Location header; only the page navigates.
    #[arg(long, global = true)]
    pub static_mode: bool,

    /// Log to stderr instead of ~/.local/state/waypoint/waypoint.log.
    #[arg(long, global = true)]
    pub log_stderr: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Serve the redirect page until Ctrl+C or SIGTERM.
    Serve,

    /// Write the rendered page, for hosts that only serve static files.
    Render {
        /// Output file (default: stdout).
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Validate configuration and print the effective settings.
    Check,
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.init_logging();
        cli.run().await
    }

    fn init_logging(&self) {
        let sink = if self.log_stderr {
            LogSink::Stderr
        } else {
            LogSink::File
        };
        if let Err(err) = logging::init(sink) {
            eprintln!("waypoint: logging disabled: {err:#}");
        }
    }

    pub async fn run(&self) -> Result<()> {
        let validated = self.load_config()?;

        match &self.command {
            CliCommand::Serve => run_serve(&validated).await?,
            CliCommand::Render { out } => run_render(&validated, out.as_deref())?,
            CliCommand::Check => run_check(&validated)?,
        }

        Ok(())
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            target_url: self.target.clone(),
            host: self.host.clone(),
            port: self.port,
            static_mode: self.static_mode,
        }
    }

    /// File, then environment, then flags; validated before any command runs.
    pub fn load_config(&self) -> Result<ValidatedConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        cfg.apply_process_env()?;
        cfg.apply_overrides(&self.overrides());
        tracing::debug!("loaded config: {:?}", cfg);
        Ok(cfg.validate()?)
    }
}
