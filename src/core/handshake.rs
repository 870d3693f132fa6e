// src/core/handshake.rs

//! The version handshake. The server only starts streaming selection updates after
//! it has seen `v|<version>`, and it may drop the first one while the player is
//! still loading, so the handshake is sent again after a short delay.

use crate::core::bridge::Outbound;
use crate::core::state::SelectionStore;
use tracing::{debug, info, warn};

/// The protocol version this client speaks.
pub const PROTOCOL_VERSION: u32 = 4;
/// Ticks between the first handshake and the confirming one.
pub const DELAYED_HELO_TICKS: u32 = 10;
pub const HANDSHAKE_TAG: &str = "v";

/// The handshake payload, `v|4`.
pub fn handshake_message() -> String {
    format!("{HANDSHAKE_TAG}|{PROTOCOL_VERSION}")
}

/// An opaque token naming a world or a player. Two observations with equal tokens
/// refer to the same entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity(String);

impl Identity {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identity {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// What the host reports on each game tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickObservation {
    pub world: Option<Identity>,
    pub player: Option<Identity>,
    /// `false` while the game is paused.
    pub clock_running: bool,
}

impl TickObservation {
    pub fn new(world: Option<Identity>, player: Option<Identity>, clock_running: bool) -> Self {
        Self {
            world,
            player,
            clock_running,
        }
    }

    /// A session is active while a player exists and the clock runs.
    pub fn is_active(&self) -> bool {
        self.player.is_some() && self.clock_running
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandshakeState {
    #[default]
    Idle,
    AwaitingConfirmation { ticks_remaining: u32 },
}

/// The outcome of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeEvent {
    /// No active session; nothing was observed.
    Inactive,
    /// Nothing to do.
    Idle,
    /// The world or player changed: the store was cleared and a handshake sent.
    Started,
    /// Counting down to the confirming handshake.
    Waiting { ticks_remaining: u32 },
    /// The confirming handshake was sent.
    Confirmed,
}

/// Drives the handshake from tick observations.
#[derive(Debug, Clone, Default)]
pub struct HandshakeSequencer {
    state: HandshakeState,
    last_world: Option<Identity>,
    last_player: Option<Identity>,
}

impl HandshakeSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HandshakeState {
        self.state
    }

    pub fn tick(
        &mut self,
        observation: &TickObservation,
        store: &mut SelectionStore,
        outbound: &mut dyn Outbound,
    ) -> HandshakeEvent {
        if !observation.is_active() {
            return HandshakeEvent::Inactive;
        }

        if observation.world != self.last_world || observation.player != self.last_player {
            info!(
                world = ?observation.world.as_ref().map(Identity::as_str),
                player = ?observation.player.as_ref().map(Identity::as_str),
                "World or player changed, resetting selection state"
            );
            self.last_world = observation.world.clone();
            self.last_player = observation.player.clone();
            store.clear();
            send_handshake(outbound);
            self.state = HandshakeState::AwaitingConfirmation {
                ticks_remaining: DELAYED_HELO_TICKS,
            };
            return HandshakeEvent::Started;
        }

        match self.state {
            HandshakeState::Idle => HandshakeEvent::Idle,
            HandshakeState::AwaitingConfirmation { ticks_remaining } => {
                let ticks_remaining = ticks_remaining.saturating_sub(1);
                if ticks_remaining == 0 {
                    send_handshake(outbound);
                    self.state = HandshakeState::Idle;
                    HandshakeEvent::Confirmed
                } else {
                    self.state = HandshakeState::AwaitingConfirmation { ticks_remaining };
                    HandshakeEvent::Waiting { ticks_remaining }
                }
            }
        }
    }

    /// Sends one handshake right away, on joining a server.
    pub fn on_join(&mut self, outbound: &mut dyn Outbound) {
        send_handshake(outbound);
    }

    /// Drops the remembered world and player, so the next active tick starts a new
    /// session even when it reports the same tokens.
    pub fn forget_identity(&mut self) {
        self.last_world = None;
        self.last_player = None;
        self.state = HandshakeState::Idle;
    }
}

fn send_handshake(outbound: &mut dyn Outbound) {
    match outbound.send_cui(&handshake_message()) {
        Ok(()) => debug!("Sent handshake v|{PROTOCOL_VERSION}"),
        Err(e) => warn!("Failed to send handshake: {e}"),
    }
}
