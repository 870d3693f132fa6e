// src/server/mod.rs

use crate::config::Config;
use anyhow::{Result, anyhow};
use std::path::PathBuf;
use tokio::signal::unix::{SignalKind, signal};
use tracing::info;

mod context;
mod event_loop;
mod host;
mod initialization;
mod outbound;

pub use context::{BridgeContext, LogReloadHandle};
pub use event_loop::run as run_loop;
pub use host::{HostEvent, HostEventError, KeyBinding};
pub use initialization::setup;
pub use outbound::{OutboundLine, QueuedOutbound};

/// The bridge startup function, orchestrating all setup phases.
pub async fn run(
    config: Config,
    options_path: Option<PathBuf>,
    log_reload_handle: LogReloadHandle,
) -> Result<()> {
    // 1. Load options and build the session.
    let mut ctx = initialization::setup(config, options_path, Some(log_reload_handle));

    let mut sigint = signal(SignalKind::interrupt())
        .map_err(|e| anyhow!("Failed to register SIGINT handler: {}", e))?;
    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| anyhow!("Failed to register SIGTERM handler: {}", e))?;

    // 2. Run the stdin/stdout loop until input closes or a signal arrives.
    let result = tokio::select! {
        res = event_loop::run(&mut ctx, tokio::io::stdin(), tokio::io::stdout()) => res,
        _ = sigint.recv() => {
            info!("SIGINT received, shutting down.");
            Ok(())
        }
        _ = sigterm.recv() => {
            info!("SIGTERM received, shutting down.");
            Ok(())
        }
    };

    // 3. Persist options on the way out.
    ctx.save_options();
    result
}
