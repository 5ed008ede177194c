//! Glyphtop - a terminal system monitor drawn with braille sparklines
//!
//! CPU, memory, disk, network, battery and process activity, each sampled
//! on its own schedule and kept as rolling graphs sized to the terminal.

mod config;
mod core;
mod integrations;
mod stream;
mod ui;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;
use crate::core::app::App;

#[derive(Parser)]
#[command(name = "glyphtop")]
#[command(author = "Glyphtop Contributors")]
#[command(version)]
#[command(about = "A terminal system monitor drawing live braille sparklines", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Write logs to this file instead of the cache directory
    #[arg(short, long, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Network interface to watch (auto-selected by default)
    #[arg(short, long, value_name = "IFACE")]
    net: Option<String>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a configuration file with every default spelled out
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

fn setup_logging(
    log_file: Option<&Path>,
    verbosity: u8,
) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // Never log to the terminal the dashboard draws on
    let file_appender = match log_file {
        Some(path) => {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            let Some(name) = path.file_name() else {
                bail!("log path {} has no file name", path.display());
            };
            std::fs::create_dir_all(&dir)?;
            tracing_appender::rolling::never(dir, name)
        }
        None => {
            let log_dir = dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("glyphtop")
                .join("logs");
            std::fs::create_dir_all(&log_dir)?;
            tracing_appender::rolling::daily(&log_dir, "glyphtop.log")
        }
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(guard)
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Config::default().save(path)?;
    println!("wrote {}", path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive for the duration of the program
    let _logging_guard = setup_logging(cli.log.as_deref(), cli.verbose)?;

    let config_path = cli.config.or_else(Config::default_path);

    if let Some(Commands::Init { force }) = cli.command {
        let Some(path) = config_path else {
            bail!("no configuration directory on this platform; pass --config");
        };
        return init_config(&path, force);
    }

    let mut config = match config_path {
        Some(path) if path.exists() => Config::load(&path)?,
        _ => Config::default(),
    };
    if let Some(interface) = cli.net {
        config.network.interface = Some(interface);
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");
    let mut app = App::new(config)?;
    app.run().await?;
    tracing::info!("exiting");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags() {
        let cli = Cli::parse_from(["glyphtop", "-n", "wlan0", "-l", "/tmp/g.log", "-vv"]);
        assert_eq!(cli.net.as_deref(), Some("wlan0"));
        assert_eq!(cli.log, Some(PathBuf::from("/tmp/g.log")));
        assert_eq!(cli.verbose, 2);
        assert!(cli.command.is_none());

        let cli = Cli::parse_from(["glyphtop", "--config", "c.toml", "init", "--force"]);
        assert!(matches!(cli.command, Some(Commands::Init { force: true })));
    }

    #[test]
    fn init_refuses_to_clobber() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        init_config(&path, false).unwrap();
        assert_eq!(Config::load(&path).unwrap(), Config::default());
        assert!(init_config(&path, false).is_err());
        assert!(init_config(&path, true).is_ok());
    }
}
