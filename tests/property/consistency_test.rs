// tests/property/consistency_test.rs

//! Property-based tests for store consistency
//! Tests that rejected messages never mutate state and that store operations compose

use crate::test_helpers::TestContext;
use proptest::prelude::*;
use uuid::Uuid;
use wecui::core::region::{Region, RegionType};
use wecui::core::state::SelectionStore;

const SESSION: &[&str] = &["s|cuboid", "p|0|1|2|3|1", "p|1|4|5|6|64", "grid|2"];

fn region_type() -> impl Strategy<Value = RegionType> {
    prop_oneof![
        Just(RegionType::Cuboid),
        Just(RegionType::Polygon),
        Just(RegionType::Ellipsoid),
        Just(RegionType::Cylinder),
        Just(RegionType::Polyhedron),
    ]
}

#[derive(Debug, Clone)]
enum StoreOp {
    Put(u8, RegionType),
    Remove(u8),
    Primary(RegionType),
}

fn store_op() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        (0u8..4, region_type()).prop_map(|(id, t)| StoreOp::Put(id, t)),
        (0u8..4).prop_map(StoreOp::Remove),
        region_type().prop_map(StoreOp::Primary),
    ]
}

fn apply(store: &mut SelectionStore, op: &StoreOp) {
    match *op {
        StoreOp::Put(id, t) => {
            store.set_selection(Some(Uuid::from_u128(id.into())), Some(Region::new(t)))
        }
        StoreOp::Remove(id) => store.set_selection(Some(Uuid::from_u128(id.into())), None),
        StoreOp::Primary(t) => store.set_selection(None, Some(Region::new(t))),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        max_shrink_iters: 1000,
        ..ProptestConfig::default()
    })]

    #[test]
    fn test_rejected_payloads_do_not_mutate_state(
        payload in "\\+?(s|p|p2|e|cyl|mm|u|poly|col|grid|cuboid|zz)(\\|[-a-z0-9.#]{0,5}){0,7}"
    ) {
        let mut ctx = TestContext::new();
        ctx.send_all(SESSION);
        let before = ctx.cui.store().clone();

        if ctx.send(&payload).is_err() {
            prop_assert_eq!(ctx.cui.store(), &before);
        }
    }

    #[test]
    fn test_active_key_always_names_a_region(ops in prop::collection::vec(store_op(), 0..40)) {
        let mut store = SelectionStore::new();
        for op in &ops {
            apply(&mut store, op);
            if let Some(id) = store.active_id() {
                prop_assert!(store.region(&id).is_some());
            }
        }
    }

    #[test]
    fn test_put_then_remove_leaves_no_trace(
        ops in prop::collection::vec(store_op(), 0..20),
        id in 0u8..4,
        t in region_type(),
    ) {
        let mut store = SelectionStore::new();
        for op in &ops {
            apply(&mut store, op);
        }
        let key = Uuid::from_u128(id.into());
        store.set_selection(Some(key), Some(Region::new(t)));
        prop_assert_eq!(store.active_id(), Some(key));

        store.set_selection(Some(key), None);
        prop_assert!(store.region(&key).is_none());
        prop_assert!(store.active_id().is_none());
    }

    #[test]
    fn test_clear_is_idempotent_and_commutes(ops in prop::collection::vec(store_op(), 0..20)) {
        let mut store = SelectionStore::new();
        for op in &ops {
            apply(&mut store, op);
        }

        let mut a = store.clone();
        a.clear_selection();
        a.clear_regions();
        let mut b = store.clone();
        b.clear_regions();
        b.clear_selection();
        prop_assert_eq!(&a, &b);

        let mut c = a.clone();
        c.clear();
        prop_assert_eq!(&c, &a);
        prop_assert_eq!(&c, &SelectionStore::new());
    }
}
