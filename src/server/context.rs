// src/server/context.rs

use super::host::{HOST_EVENT_PREFIX, HostEvent, KeyBinding};
use super::outbound::{OutboundLine, QueuedOutbound};
use crate::config::Config;
use crate::core::CuiContext;
use crate::core::handshake::{HandshakeEvent, TickObservation};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::{filter::EnvFilter, reload};

pub type LogReloadHandle = Arc<reload::Handle<EnvFilter, tracing_subscriber::Registry>>;

/// Holds all the state the bridge loop drives: the CUI session plus what the host
/// has reported so far.
pub struct BridgeContext {
    pub cui: CuiContext,
    pub config: Config,
    pub options_path: PathBuf,
    pub observation: TickObservation,
    pub log_reload_handle: Option<LogReloadHandle>,
}

impl BridgeContext {
    pub fn new(cui: CuiContext, config: Config, options_path: PathBuf) -> Self {
        Self {
            cui,
            config,
            options_path,
            observation: TickObservation::new(None, None, true),
            log_reload_handle: None,
        }
    }

    pub fn with_log_reload_handle(mut self, handle: LogReloadHandle) -> Self {
        self.log_reload_handle = Some(handle);
        self
    }

    /// Handles one stdin line: a host event, or a CUI payload.
    pub fn handle_line(&mut self, line: &[u8], outbound: &mut QueuedOutbound) {
        if line.first() != Some(&HOST_EVENT_PREFIX) {
            self.cui.on_payload(line, outbound);
            return;
        }
        let event = match std::str::from_utf8(line) {
            Ok(text) => text.trim_end().parse::<HostEvent>(),
            Err(_) => {
                warn!("Host event is not valid UTF-8");
                return;
            }
        };
        match event {
            Ok(event) => self.handle_host_event(event, outbound),
            Err(e) => warn!("Ignoring host event: {e}"),
        }
    }

    pub fn handle_host_event(&mut self, event: HostEvent, outbound: &mut QueuedOutbound) {
        debug!(?event, "Host event");
        match event {
            HostEvent::Join => self.cui.on_join(outbound),
            HostEvent::Leave => {
                self.observation.world = None;
                self.observation.player = None;
                self.cui.on_leave();
            }
            HostEvent::World(world) => self.observation.world = Some(world),
            HostEvent::Player(player) => self.observation.player = Some(player),
            HostEvent::Pause => self.observation.clock_running = false,
            HostEvent::Resume => self.observation.clock_running = true,
            HostEvent::Key(KeyBinding::Toggle) => {
                let visible = self.cui.toggle_visibility();
                info!("Selection overlay {}", if visible { "shown" } else { "hidden" });
            }
            HostEvent::Key(KeyBinding::Clear) => self.cui.clear_selection_key(outbound),
            HostEvent::Key(KeyBinding::Chunk) => {
                let enabled = self.cui.toggle_chunk_borders();
                info!("Chunk borders {}", if enabled { "enabled" } else { "disabled" });
            }
            HostEvent::Save => self.save_options(),
            HostEvent::Dump => self.dump(outbound),
            HostEvent::Log(filter) => self.reload_log_filter(&filter),
        }
    }

    /// Advances the session by one game tick.
    pub fn tick(&mut self, outbound: &mut QueuedOutbound) -> HandshakeEvent {
        self.cui.tick(&self.observation, outbound)
    }

    pub fn save_options(&self) {
        match self.cui.options().save_to(&self.options_path) {
            Ok(()) => info!("Saved options to '{}'", self.options_path.display()),
            Err(e) => warn!(
                "Failed to save options to '{}': {e}",
                self.options_path.display()
            ),
        }
    }

    fn dump(&self, outbound: &mut QueuedOutbound) {
        let store = self.cui.store();
        let selection = store.selection();
        outbound.push(OutboundLine::State(format!(
            "selection {} empty={} volume={}",
            selection.region_type(),
            selection.is_empty(),
            format_volume(selection.volume()),
        )));
        for (id, region) in store.regions() {
            let marker = if store.active_id() == Some(*id) {
                " active"
            } else {
                ""
            };
            outbound.push(OutboundLine::State(format!(
                "region {id} {} volume={}{marker}",
                region.region_type(),
                format_volume(region.volume()),
            )));
        }
        outbound.push(OutboundLine::State(format!(
            "visible={} chunk_borders={}",
            self.cui.is_visible(),
            self.cui.chunk_borders_enabled()
        )));
    }

    fn reload_log_filter(&self, filter: &str) {
        let Some(handle) = &self.log_reload_handle else {
            warn!("Log filter cannot be changed in this mode");
            return;
        };
        match EnvFilter::try_new(filter) {
            Ok(new_filter) => match handle.reload(new_filter) {
                Ok(()) => info!("Log filter set to '{filter}'"),
                Err(e) => warn!("Failed to reload log filter: {e}"),
            },
            Err(e) => warn!("Invalid log filter '{filter}': {e}"),
        }
    }
}

fn format_volume(volume: Option<i64>) -> String {
    volume.map_or_else(|| "-".to_string(), |v| v.to_string())
}
