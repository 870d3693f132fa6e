// src/server/initialization.rs

//! Builds the bridge state: loads the persisted options and sets up the session.

use super::context::{BridgeContext, LogReloadHandle};
use crate::config::Config;
use crate::core::CuiContext;
use crate::core::options::OptionTable;
use std::path::PathBuf;
use tracing::info;

/// Initializes all bridge components before starting the main loop.
pub fn setup(
    config: Config,
    options_path: Option<PathBuf>,
    log_reload_handle: Option<LogReloadHandle>,
) -> BridgeContext {
    log_startup_info(&config);

    let options_path = options_path.unwrap_or_else(|| config.options_path.clone());
    let options = OptionTable::load_from(&options_path);
    let cui = CuiContext::new(options);

    let ctx = BridgeContext::new(cui, config, options_path);
    match log_reload_handle {
        Some(handle) => ctx.with_log_reload_handle(handle),
        None => ctx,
    }
}

fn log_startup_info(config: &Config) {
    info!("wecui bridge version {}", env!("CARGO_PKG_VERSION"));
    info!(
        "Tick interval {}ms, max payload {} bytes",
        config.tick_interval_ms, config.max_payload_len
    );
}
