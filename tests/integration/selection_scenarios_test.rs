// tests/integration/selection_scenarios_test.rs

//! End-to-end selection scenarios: payloads in, store state out.

use super::fixtures::*;
use super::test_helpers::TestContext;
use uuid::Uuid;
use wecui::core::CuiError;
use wecui::core::region::{BlockPos, RegionType, Shape, Vector2, Vector3};

#[test]
fn test_cuboid_shorthand_builds_primary_selection() {
    let mut ctx = TestContext::new();
    ctx.send_all(&["cuboid|p1|10|20|30", "cuboid|p2|40|50|60"]);

    let Shape::Cuboid(cuboid) = ctx.selection().shape() else {
        panic!("expected a cuboid selection");
    };
    assert_eq!(cuboid.first(), Some(BlockPos::new(10, 20, 30)));
    assert_eq!(cuboid.second(), Some(BlockPos::new(40, 50, 60)));
    assert_eq!(ctx.cui.store().len(), 0);
    assert_eq!(ctx.cui.store().active_id(), None);
}

#[test]
fn test_cuboid_session() {
    let mut ctx = TestContext::new();
    ctx.send_all(CUBOID_SESSION);

    let region = ctx.selection();
    assert_eq!(region.region_type(), RegionType::Cuboid);
    assert_eq!(region.volume(), Some(891));
    let Shape::Cuboid(cuboid) = region.shape() else {
        panic!("expected a cuboid selection");
    };
    assert_eq!(
        cuboid.bounds(),
        Some((BlockPos::new(10, 64, -3), BlockPos::new(20, 70, 5)))
    );
}

#[test]
fn test_polygon_session() {
    let mut ctx = TestContext::new();
    ctx.send_all(POLYGON_SESSION);

    let region = ctx.selection();
    assert_eq!(region.volume(), Some(100));
    let Shape::Polygon(polygon) = region.shape() else {
        panic!("expected a polygon selection");
    };
    let points: Vec<Vector2> = polygon.points().collect();
    assert_eq!(
        points,
        vec![Vector2::new(0, 0), Vector2::new(10, 0), Vector2::new(10, 10)]
    );
    assert_eq!(polygon.min_y(), Some(60));
    assert_eq!(polygon.max_y(), Some(70));
}

#[test]
fn test_cylinder_session() {
    let mut ctx = TestContext::new();
    ctx.send_all(CYLINDER_SESSION);

    let Shape::Cylinder(cylinder) = ctx.selection().shape() else {
        panic!("expected a cylinder selection");
    };
    assert_eq!(cylinder.centre(), Some(BlockPos::new(5, 64, 5)));
    assert_eq!(cylinder.radii(), Some((3.5, 4.5)));
    assert_eq!(cylinder.height(), Some(17));
}

#[test]
fn test_ellipsoid_session() {
    let mut ctx = TestContext::new();
    ctx.send_all(ELLIPSOID_SESSION);

    let Shape::Ellipsoid(ellipsoid) = ctx.selection().shape() else {
        panic!("expected an ellipsoid selection");
    };
    assert_eq!(ellipsoid.centre(), Some(BlockPos::new(0, 64, 0)));
    assert_eq!(ellipsoid.radii(), Some(Vector3::new(4.0, 5.5, 6.0)));
}

#[test]
fn test_polyhedron_session() {
    let mut ctx = TestContext::new();
    ctx.send_all(POLYHEDRON_SESSION);

    let Shape::Polyhedron(polyhedron) = ctx.selection().shape() else {
        panic!("expected a polyhedron selection");
    };
    assert_eq!(polyhedron.vertices().count(), 4);
    assert_eq!(polyhedron.faces().len(), 4);
    assert_eq!(polyhedron.faces()[3], vec![1, 2, 3]);
}

#[test]
fn test_new_selection_replaces_previous_shape() {
    let mut ctx = TestContext::new();
    ctx.send_all(CUBOID_SESSION);
    ctx.send_all(&["s|ellipsoid"]);

    assert_eq!(ctx.selection().region_type(), RegionType::Ellipsoid);
    assert!(ctx.selection().is_empty());
}

#[test]
fn test_clear_resets_primary_selection() {
    let mut ctx = TestContext::new();
    ctx.send_all(POLYGON_SESSION);
    ctx.send_all(&["s|clear"]);

    assert_eq!(ctx.selection().region_type(), RegionType::Cuboid);
    assert!(ctx.selection().is_empty());
}

#[test]
fn test_multi_region_session() {
    let mut ctx = TestContext::new();
    let select_a = format!("+s|cuboid|{REGION_A}");
    let select_b = format!("+s|cylinder|{REGION_B}");
    ctx.send_all(&[
        select_a.as_str(),
        "+p|0|1|2|3|0",
        "+p|1|4|5|6|64",
        select_b.as_str(),
        "+cyl|0|64|0|2|2",
    ]);

    let a = Uuid::parse_str(REGION_A).unwrap();
    let b = Uuid::parse_str(REGION_B).unwrap();
    let store = ctx.cui.store();
    assert_eq!(store.len(), 2);
    assert_eq!(store.active_id(), Some(b));
    assert_eq!(store.region(&a).unwrap().volume(), Some(64));
    assert_eq!(
        store.region(&b).unwrap().region_type(),
        RegionType::Cylinder
    );
    // The primary selection is never touched by multi-region messages.
    assert!(ctx.selection().is_empty());

    let order: Vec<Uuid> = store.regions().map(|(id, _)| *id).collect();
    assert_eq!(order, vec![a, b]);
}

#[test]
fn test_multi_region_removal_clears_active() {
    let mut ctx = TestContext::new();
    let select = format!("+s|cuboid|{REGION_A}");
    let remove = format!("+s|clear|{REGION_A}");
    ctx.send_all(&[select.as_str(), remove.as_str()]);

    assert_eq!(ctx.cui.store().len(), 0);
    assert_eq!(ctx.cui.store().active_id(), None);
    assert_eq!(ctx.send("+p|0|1|2|3|0"), Err(CuiError::NoActiveRegion));
}

#[test]
fn test_region_colours_and_grid() {
    let mut ctx = TestContext::new();
    ctx.send_all(CUBOID_SESSION);
    ctx.send_all(&["col|#ff0000|#00ff00|nope|#0000ff80", "grid|2.5|cull"]);

    let region = ctx.selection();
    let colours = region.custom_colours().expect("custom colours set");
    assert_eq!(colours.edge.argb(), 0xCCFF0000);
    assert_eq!(colours.grid.argb(), 0xCC00FF00);
    // The invalid value keeps the configured first-point colour.
    assert_eq!(colours.first_point.argb(), 0xCC33CC33);
    assert_eq!(colours.second_point.argb(), 0x800000FF);
    assert_eq!(region.grid_spacing(), 2.5);
    assert!(region.grid_cull());
}

#[test]
fn test_empty_payload_is_dropped() {
    let mut ctx = TestContext::new();
    ctx.send_all(CUBOID_SESSION);
    let before = ctx.cui.store().clone();

    ctx.cui.on_payload(b"", &mut ctx.outbound);
    assert_eq!(ctx.send(""), Err(CuiError::EmptyPayload));
    assert_eq!(ctx.cui.store(), &before);
    assert!(ctx.outbound.cui.is_empty());
}
