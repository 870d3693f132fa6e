// src/main.rs

//! The main entry point for the wecui bridge.

use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, warn};
use tracing_subscriber::{filter::EnvFilter, prelude::*, reload};
use wecui::config::Config;
use wecui::server;

#[tokio::main]
async fn main() -> Result<()> {
    run_app().await
}

async fn run_app() -> Result<()> {
    // Define version information.
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let args: Vec<String> = env::args().collect();

    // Handle the --version flag.
    if args.contains(&"--version".to_string()) {
        println!("wecui version {VERSION}");
        return Ok(());
    }

    // Setup logging with reloading capabilities before anything else logs.
    // `RUST_LOG` wins; otherwise start at "info" until the config is read.
    let env_log_level = env::var("RUST_LOG").ok();
    let initial_log_level = env_log_level.clone().unwrap_or_else(|| "info".to_string());

    // Create a reloadable filter layer.
    let (filter, reload_handle) = reload::Layer::new(EnvFilter::new(initial_log_level));

    // Stdout carries protocol output, so logs go to stderr.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(std::io::stderr),
        )
        .init();

    // The configuration path can be provided via a --config flag; otherwise it
    // defaults to "wecui.toml". A missing file means defaults.
    let config_path = flag_value(&args, "--config").unwrap_or("wecui.toml");
    let config = match Config::from_file_or_default(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration from \"{config_path}\": {e:#}");
            std::process::exit(1);
        }
    };

    if env_log_level.is_none() {
        if let Err(e) = reload_handle.reload(EnvFilter::new(&config.log_level)) {
            warn!("Failed to apply log level '{}': {e}", config.log_level);
        }
    }

    // Override the options file if provided on the command line.
    let options_path = flag_value(&args, "--options").map(PathBuf::from);

    let reload_handle = Arc::new(reload_handle);

    if let Err(e) = server::run(config, options_path, reload_handle).await {
        error!("Bridge runtime error: {}", e);
        return Err(e);
    }

    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
