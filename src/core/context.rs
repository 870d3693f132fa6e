// src/core/context.rs

//! The session context: one object owning all mutable client state, fed by the host
//! with payloads, ticks, and key presses.

use crate::core::CuiError;
use crate::core::bridge::Outbound;
use crate::core::handler::EventDispatcher;
use crate::core::handshake::{HandshakeEvent, HandshakeSequencer, TickObservation};
use crate::core::options::{ColourOption, FlagOption, OptionTable};
use crate::core::protocol::CuiMessage;
use crate::core::region::{Region, StyleRole};
use crate::core::state::SelectionStore;
use crate::core::style::{LineStyles, RenderStyle};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Chat command asking the server to clear the selection.
pub const CLEAR_SELECTION_COMMAND: &str = "//sel";
/// Chat command nudging servers that only enable CUI on request.
pub const PROMISCUOUS_COMMAND: &str = "/we cui";

/// Owns the store, the options, and the handshake state for one client session.
#[derive(Debug, Clone)]
pub struct CuiContext {
    store: SelectionStore,
    options: OptionTable,
    handshake: HandshakeSequencer,
    dispatcher: EventDispatcher,
    visible: bool,
    chunk_borders: bool,
}

impl Default for CuiContext {
    fn default() -> Self {
        Self::new(OptionTable::new())
    }
}

impl CuiContext {
    pub fn new(options: OptionTable) -> Self {
        Self {
            store: SelectionStore::new(),
            options,
            handshake: HandshakeSequencer::new(),
            dispatcher: EventDispatcher::new(),
            visible: true,
            chunk_borders: false,
        }
    }

    /// Handles one inbound payload. Failures are logged and never propagate to
    /// the host.
    pub fn on_payload(&mut self, payload: &[u8], outbound: &mut dyn Outbound) {
        match self.handle_payload(payload) {
            Ok(Some(reply)) => {
                if let Err(e) = outbound.send_cui(&reply) {
                    warn!("Failed to send CUI reply: {e}");
                }
            }
            Ok(None) => {}
            Err(CuiError::EmptyPayload) => warn!("Received an empty CUI payload"),
            Err(e) => warn!(kind = ?e.kind(), "Error while handling CUI payload: {e}"),
        }
    }

    /// Decodes and applies one payload, returning the handler's reply.
    pub fn handle_payload(&mut self, payload: &[u8]) -> Result<Option<String>, CuiError> {
        if payload.is_empty() {
            return Err(CuiError::EmptyPayload);
        }
        let text = std::str::from_utf8(payload)?;

        if self.options.flag(FlagOption::IgnoreUpdates) {
            debug!("Ignoring CUI payload: {text}");
            return Ok(None);
        }
        if self.options.flag(FlagOption::DebugMode) {
            info!("Received CUI payload: {text}");
        }

        let message = CuiMessage::parse(text)?;
        self.dispatcher
            .raise(&message, &mut self.store, &self.options)
    }

    /// Advances the handshake by one game tick.
    pub fn tick(
        &mut self,
        observation: &TickObservation,
        outbound: &mut dyn Outbound,
    ) -> HandshakeEvent {
        let event = self.handshake.tick(observation, &mut self.store, outbound);
        if event == HandshakeEvent::Started && self.options.flag(FlagOption::Promiscuous) {
            if let Err(e) = outbound.send_chat(PROMISCUOUS_COMMAND) {
                debug!("Promiscuous nudge not sent: {e}");
            }
        }
        event
    }

    /// Called when the player joins a server.
    pub fn on_join(&mut self, outbound: &mut dyn Outbound) {
        self.visible = true;
        self.handshake.on_join(outbound);
    }

    /// Called when the player leaves the server. A later rejoin is always treated as
    /// a new session.
    pub fn on_leave(&mut self) {
        debug!("Left server, forgetting world and player");
        self.handshake.forget_identity();
    }

    // --- Input surface ---

    /// Flips overlay visibility, returning the new value.
    pub fn toggle_visibility(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// The clear-selection key: asks the server to clear, and drops every keyed
    /// region locally when `clearAllOnKey` is set.
    pub fn clear_selection_key(&mut self, outbound: &mut dyn Outbound) {
        if let Err(e) = outbound.send_chat(CLEAR_SELECTION_COMMAND) {
            warn!("Failed to send '{CLEAR_SELECTION_COMMAND}': {e}");
        }
        if self.options.flag(FlagOption::ClearAllOnKey) {
            self.store.clear_regions();
        }
    }

    pub fn toggle_chunk_borders(&mut self) -> bool {
        self.chunk_borders = !self.chunk_borders;
        self.chunk_borders
    }

    // --- Query surface ---

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn chunk_borders_enabled(&self) -> bool {
        self.chunk_borders
    }

    pub fn selection(&self, multi: bool) -> Option<&Region> {
        self.store.get_selection(multi)
    }

    pub fn regions(&self) -> impl Iterator<Item = (&Uuid, &Region)> {
        self.store.regions()
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    pub fn options(&self) -> &OptionTable {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut OptionTable {
        &mut self.options
    }

    pub fn handshake(&self) -> &HandshakeSequencer {
        &self.handshake
    }

    pub fn style(&self, option: ColourOption) -> RenderStyle {
        self.options.style(option)
    }

    pub fn lines(&self, option: ColourOption) -> LineStyles {
        self.options.lines(option)
    }

    /// The boundary and grid styles of the chunk overlay.
    pub fn chunk_border_styles(&self) -> [RenderStyle; 2] {
        [
            self.options.style(ColourOption::ChunkBoundary),
            self.options.style(ColourOption::ChunkGrid),
        ]
    }

    pub fn region_style(&self, region: &Region, role: StyleRole) -> RenderStyle {
        region.style(role, &self.options)
    }
}
