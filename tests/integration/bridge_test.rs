// tests/integration/bridge_test.rs

//! The stdin/stdout bridge: host events, payloads, and the async event loop.

use std::path::PathBuf;
use wecui::config::Config;
use wecui::core::CuiContext;
use wecui::core::handshake::{HandshakeEvent, Identity};
use wecui::core::region::RegionType;
use wecui::server::{BridgeContext, HostEvent, KeyBinding, OutboundLine, QueuedOutbound};

fn bridge(options_path: PathBuf) -> BridgeContext {
    BridgeContext::new(CuiContext::default(), Config::default(), options_path)
}

#[test]
fn test_host_events_drive_observation() {
    let mut ctx = bridge(PathBuf::from("unused.json"));
    let mut out = QueuedOutbound::new();

    ctx.handle_line(b"@world overworld", &mut out);
    ctx.handle_line(b"@player alex", &mut out);
    assert_eq!(ctx.observation.world, Some(Identity::from("overworld")));
    assert_eq!(ctx.observation.player, Some(Identity::from("alex")));

    ctx.handle_line(b"@pause", &mut out);
    assert!(!ctx.observation.clock_running);
    ctx.handle_line(b"@resume", &mut out);
    assert!(ctx.observation.clock_running);

    ctx.handle_line(b"@leave", &mut out);
    assert_eq!(ctx.observation.player, None);
    assert!(out.is_empty());
}

#[test]
fn test_payload_lines_reach_the_store() {
    let mut ctx = bridge(PathBuf::from("unused.json"));
    let mut out = QueuedOutbound::new();

    ctx.handle_line(b"s|cylinder", &mut out);
    assert_eq!(
        ctx.cui.store().selection().region_type(),
        RegionType::Cylinder
    );
}

#[test]
fn test_key_events_and_dump() {
    let mut ctx = bridge(PathBuf::from("unused.json"));
    let mut out = QueuedOutbound::new();

    ctx.handle_host_event(HostEvent::Key(KeyBinding::Clear), &mut out);
    ctx.handle_host_event(HostEvent::Key(KeyBinding::Toggle), &mut out);
    ctx.handle_host_event(HostEvent::Dump, &mut out);

    let lines: Vec<String> = out.drain().map(|l| l.to_string()).collect();
    assert_eq!(lines[0], "chat> //sel");
    assert_eq!(lines[1], "state> selection cuboid empty=true volume=-");
    assert_eq!(lines[2], "state> visible=false chunk_borders=false");
}

#[test]
fn test_save_event_writes_options_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("worldeditcui.config.json");
    let mut ctx = bridge(path.clone());
    let mut out = QueuedOutbound::new();

    ctx.handle_line(b"@save", &mut out);
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"cuboidEdgeColor\""));
}

#[test]
fn test_handshake_lines_are_prefixed() {
    let mut ctx = bridge(PathBuf::from("unused.json"));
    let mut out = QueuedOutbound::new();

    ctx.handle_line(b"@world overworld", &mut out);
    ctx.handle_line(b"@player alex", &mut out);
    ctx.tick(&mut out);

    let lines: Vec<OutboundLine> = out.drain().collect();
    assert_eq!(lines, vec![OutboundLine::Cui("v|4".to_string())]);
    assert_eq!(lines[0].to_string(), "cui> v|4");
}

#[tokio::test]
async fn test_event_loop_runs_until_input_closes() {
    let mut ctx = bridge(PathBuf::from("unused.json"));
    let input: &[u8] = b"@join\r\ns|polygon2d\np2|0|1|2|0\n@dump\n";
    let mut output = Vec::new();

    wecui::server::run_loop(&mut ctx, input, &mut output)
        .await
        .unwrap();

    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "cui> v|4");
    assert!(lines.contains(&"state> selection polygon2d empty=false volume=0"));
}

#[tokio::test]
async fn test_event_loop_reads_chunked_input() {
    let mut ctx = bridge(PathBuf::from("unused.json"));
    let input = tokio_test::io::Builder::new()
        .read(b"s|cuboid\np|0|1|2")
        .read(b"|3|1\np|1|4|5|6|64\n")
        .read(b"@dump\n")
        .build();
    let mut output = Vec::new();

    tokio_test::assert_ok!(wecui::server::run_loop(&mut ctx, input, &mut output).await);

    let text = String::from_utf8(output).unwrap();
    assert!(
        text.lines()
            .any(|line| line == "state> selection cuboid empty=false volume=64")
    );
}

#[test]
fn test_leave_then_rejoin_same_world_resends_handshake() {
    let mut ctx = bridge(PathBuf::from("unused.json"));
    let mut out = QueuedOutbound::new();

    ctx.handle_line(b"@world overworld", &mut out);
    ctx.handle_line(b"@player alex", &mut out);
    for _ in 0..11 {
        ctx.tick(&mut out);
    }
    ctx.handle_line(b"cuboid|p1|1|2|3", &mut out);
    out.drain().for_each(drop);

    ctx.handle_line(b"@leave", &mut out);
    ctx.tick(&mut out);
    ctx.handle_line(b"@world overworld", &mut out);
    ctx.handle_line(b"@player alex", &mut out);

    assert_eq!(ctx.tick(&mut out), HandshakeEvent::Started);
    assert!(ctx.cui.store().selection().is_empty());
    let lines: Vec<OutboundLine> = out.drain().collect();
    assert_eq!(lines, vec![OutboundLine::Cui("v|4".to_string())]);
}

#[tokio::test]
async fn test_event_loop_ticks_before_pending_input() {
    let mut ctx = bridge(PathBuf::from("unused.json"));
    let mut out = QueuedOutbound::new();
    ctx.handle_host_event(HostEvent::World(Identity::from("overworld")), &mut out);
    ctx.handle_host_event(HostEvent::Player(Identity::from("alex")), &mut out);

    let input: &[u8] = b"s|cuboid\np|0|1|2|3|1\np|1|4|5|6|64\n";
    let mut output = Vec::new();
    wecui::server::run_loop(&mut ctx, input, &mut output)
        .await
        .unwrap();

    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.lines().next(), Some("cui> v|4"));
    assert!(!ctx.cui.store().selection().is_empty());
}

#[tokio::test]
async fn test_event_loop_drops_oversized_output_lines() {
    let config = Config {
        max_payload_len: 40,
        ..Config::default()
    };
    let mut ctx = BridgeContext::new(CuiContext::default(), config, PathBuf::from("unused.json"));
    let input: &[u8] = b"@dump\n";
    let mut output = Vec::new();

    wecui::server::run_loop(&mut ctx, input, &mut output)
        .await
        .unwrap();

    // "state> selection cuboid empty=true volume=-" is 43 bytes and is dropped.
    let text = String::from_utf8(output).unwrap();
    assert_eq!(text, "state> visible=true chunk_borders=false\n");
}
