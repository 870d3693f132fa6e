// tests/integration/fixtures.rs

//! Canned payloads shared by the integration tests.

pub const REGION_A: &str = "5b9e4d1c-0000-4000-8000-00000000000a";
pub const REGION_B: &str = "5b9e4d1c-0000-4000-8000-00000000000b";

/// A complete cuboid selection as WorldEdit sends it after `//pos1` and `//pos2`.
pub const CUBOID_SESSION: &[&str] = &[
    "s|cuboid",
    "p|0|10|64|-3|1",
    "p|1|20|70|5|891",
];

/// A complete polygon selection.
pub const POLYGON_SESSION: &[&str] = &[
    "s|polygon2d",
    "p2|0|0|0|1",
    "p2|1|10|0|10",
    "p2|2|10|10|100",
    "mm|60|70",
];

/// A cylinder selection.
pub const CYLINDER_SESSION: &[&str] = &["s|cylinder", "cyl|5|64|5|3.5|4.5", "mm|64|80"];

/// An ellipsoid selection.
pub const ELLIPSOID_SESSION: &[&str] = &["s|ellipsoid", "e|0|0|64|0", "e|1|4|5.5|6"];

/// A tetrahedron.
pub const POLYHEDRON_SESSION: &[&str] = &[
    "s|polyhedron",
    "p|0|0|0|0|0",
    "p|1|4|0|0|0",
    "p|2|0|4|0|0",
    "p|3|0|0|4|0",
    "poly|0|1|2",
    "poly|0|1|3",
    "poly|0|2|3",
    "poly|1|2|3",
];
