// tests/integration/test_helpers.rs

//! Test helpers and utilities for integration tests

use wecui::core::CuiContext;
use wecui::core::CuiError;
use wecui::core::bridge::RecordingOutbound;
use wecui::core::handshake::{HandshakeEvent, Identity, TickObservation};
use wecui::core::options::{FlagOption, OptionTable};
use wecui::core::region::Region;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, reload};

/// TestContext provides a complete session with an in-memory outbound channel.
pub struct TestContext {
    pub cui: CuiContext,
    pub outbound: RecordingOutbound,
}

impl TestContext {
    /// Creates a new test context with default options.
    pub fn new() -> Self {
        Self::with_options(OptionTable::new())
    }

    /// Creates a new test context with custom options.
    pub fn with_options(options: OptionTable) -> Self {
        // Set up minimal tracing for tests
        let env_filter = EnvFilter::new("warn");
        let (filter, _reload_handle) = reload::Layer::new(env_filter);

        // Initialize tracing (ignore error if already initialized)
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();

        Self {
            cui: CuiContext::new(options),
            outbound: RecordingOutbound::new(),
        }
    }

    pub fn with_flag(flag: FlagOption) -> Self {
        let mut options = OptionTable::new();
        options.set_flag(flag, true);
        Self::with_options(options)
    }

    /// Applies one payload, returning the handler's result.
    pub fn send(&mut self, payload: &str) -> Result<Option<String>, CuiError> {
        self.cui.handle_payload(payload.as_bytes())
    }

    /// Applies several payloads, panicking on the first failure.
    pub fn send_all(&mut self, payloads: &[&str]) {
        for payload in payloads {
            self.send(payload)
                .unwrap_or_else(|e| panic!("payload '{payload}' failed: {e}"));
        }
    }

    pub fn tick(&mut self, observation: &TickObservation) -> HandshakeEvent {
        self.cui.tick(observation, &mut self.outbound)
    }

    pub fn selection(&self) -> &Region {
        self.cui.store().selection()
    }

    pub fn active(&self) -> Option<&Region> {
        self.cui.selection(true)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// An active session in `world` as `player`.
pub fn observation(world: &str, player: &str) -> TickObservation {
    TickObservation::new(Some(Identity::from(world)), Some(Identity::from(player)), true)
}
