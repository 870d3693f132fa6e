// tests/integration/session_test.rs

//! Session-level behavior: handshake timing, key bindings, and option flags.

use super::fixtures::CUBOID_SESSION;
use super::test_helpers::{TestContext, observation};
use wecui::core::context::{CLEAR_SELECTION_COMMAND, PROMISCUOUS_COMMAND};
use wecui::core::handshake::{DELAYED_HELO_TICKS, HandshakeEvent, TickObservation, handshake_message};
use wecui::core::options::FlagOption;
use wecui::core::region::RegionType;

#[test]
fn test_handshake_sent_at_tick_zero_and_ten() {
    let mut ctx = TestContext::new();
    let obs = observation("overworld", "alex");

    let mut emitted_at = Vec::new();
    for tick in 0..40 {
        let before = ctx.outbound.cui.len();
        ctx.tick(&obs);
        if ctx.outbound.cui.len() > before {
            emitted_at.push(tick);
        }
    }

    assert_eq!(emitted_at, vec![0, DELAYED_HELO_TICKS]);
    assert_eq!(ctx.outbound.cui, vec![handshake_message(), handshake_message()]);
}

#[test]
fn test_identity_change_clears_store() {
    let mut ctx = TestContext::new();
    ctx.tick(&observation("overworld", "alex"));
    ctx.send_all(CUBOID_SESSION);
    assert!(!ctx.selection().is_empty());

    let event = ctx.tick(&observation("nether", "alex"));
    assert_eq!(event, HandshakeEvent::Started);
    assert!(ctx.selection().is_empty());
    assert_eq!(ctx.selection().region_type(), RegionType::Cuboid);
}

#[test]
fn test_no_handshake_without_active_session() {
    let mut ctx = TestContext::new();
    let paused = TickObservation {
        clock_running: false,
        ..observation("overworld", "alex")
    };
    let no_player = TickObservation::new(None, None, true);

    assert_eq!(ctx.tick(&paused), HandshakeEvent::Inactive);
    assert_eq!(ctx.tick(&no_player), HandshakeEvent::Inactive);
    assert!(ctx.outbound.cui.is_empty());
}

#[test]
fn test_promiscuous_nudge_once_per_identity_change() {
    let mut ctx = TestContext::with_flag(FlagOption::Promiscuous);
    let obs = observation("overworld", "alex");
    for _ in 0..20 {
        ctx.tick(&obs);
    }
    ctx.tick(&observation("end", "alex"));

    assert_eq!(
        ctx.outbound.chat,
        vec![PROMISCUOUS_COMMAND.to_string(), PROMISCUOUS_COMMAND.to_string()]
    );
}

#[test]
fn test_no_nudge_without_promiscuous_flag() {
    let mut ctx = TestContext::new();
    ctx.tick(&observation("overworld", "alex"));
    assert!(ctx.outbound.chat.is_empty());
}

#[test]
fn test_join_sends_handshake_and_shows_overlay() {
    let mut ctx = TestContext::new();
    assert!(!ctx.cui.toggle_visibility());

    ctx.cui.on_join(&mut ctx.outbound);
    assert!(ctx.cui.is_visible());
    assert_eq!(ctx.outbound.cui, vec!["v|4".to_string()]);
}

#[test]
fn test_clear_key_keeps_regions_by_default() {
    let mut ctx = TestContext::new();
    ctx.send_all(&["+s|cuboid|5b9e4d1c-0000-4000-8000-00000000000a"]);

    ctx.cui.clear_selection_key(&mut ctx.outbound);
    assert_eq!(ctx.outbound.chat, vec![CLEAR_SELECTION_COMMAND.to_string()]);
    assert_eq!(ctx.cui.store().len(), 1);
}

#[test]
fn test_clear_key_with_clear_all_drops_regions() {
    let mut ctx = TestContext::with_flag(FlagOption::ClearAllOnKey);
    ctx.send_all(&["+s|cuboid|5b9e4d1c-0000-4000-8000-00000000000a"]);

    ctx.cui.clear_selection_key(&mut ctx.outbound);
    assert_eq!(ctx.cui.store().len(), 0);
    assert_eq!(ctx.cui.store().active_id(), None);
}

#[test]
fn test_ignore_updates_drops_payloads() {
    let mut ctx = TestContext::with_flag(FlagOption::IgnoreUpdates);
    ctx.send_all(&["s|polygon2d", "bogus|1|2"]);
    assert_eq!(ctx.selection().region_type(), RegionType::Cuboid);
}

#[test]
fn test_debug_mode_still_applies_payloads() {
    let mut ctx = TestContext::with_flag(FlagOption::DebugMode);
    ctx.send_all(&["s|polygon2d"]);
    assert_eq!(ctx.selection().region_type(), RegionType::Polygon);
}

#[test]
fn test_chunk_border_toggle_and_styles() {
    let mut ctx = TestContext::new();
    assert!(!ctx.cui.chunk_borders_enabled());
    assert!(ctx.cui.toggle_chunk_borders());

    let [boundary, grid] = ctx.cui.chunk_border_styles();
    assert_eq!(boundary.colour().argb(), 0xCC33CC33);
    assert_eq!(grid.colour().argb(), 0x994CCCAA);
}

#[test]
fn test_leave_and_rejoin_resets_session() {
    let mut ctx = TestContext::new();
    let obs = observation("overworld", "alex");
    for _ in 0..=DELAYED_HELO_TICKS {
        ctx.tick(&obs);
    }
    ctx.send_all(CUBOID_SESSION);
    ctx.outbound.cui.clear();

    ctx.cui.on_leave();
    assert_eq!(ctx.tick(&TickObservation::default()), HandshakeEvent::Inactive);

    assert_eq!(ctx.tick(&obs), HandshakeEvent::Started);
    assert!(ctx.selection().is_empty());
    assert_eq!(ctx.outbound.cui, vec![handshake_message()]);

    for _ in 1..DELAYED_HELO_TICKS {
        ctx.tick(&obs);
    }
    assert_eq!(ctx.tick(&obs), HandshakeEvent::Confirmed);
    assert_eq!(ctx.outbound.cui.len(), 2);
}

#[test]
fn test_switching_back_and_forth_clears_each_time() {
    let mut ctx = TestContext::new();
    for world in ["overworld", "the_end", "overworld"] {
        assert_eq!(ctx.tick(&observation(world, "alex")), HandshakeEvent::Started);
        ctx.send_all(CUBOID_SESSION);
        assert!(!ctx.selection().is_empty());
    }
    assert_eq!(ctx.outbound.cui.len(), 3);
}
