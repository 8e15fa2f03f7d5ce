//! Timed notifications: success / info / warning / error.

use crate::prelude::Harness;
use std::time::Duration;
use toast_core::NotificationKind;

#[yare::parameterized(
    success = { NotificationKind::Success },
    info    = { NotificationKind::Info },
    warning = { NotificationKind::Warning },
    error   = { NotificationKind::Error },
)]
fn timed_kind_lives_exactly_its_expiry(kind: NotificationKind) {
    let h = Harness::new();
    match kind {
        NotificationKind::Success => h.store.success("m"),
        NotificationKind::Info => h.store.info("m"),
        NotificationKind::Warning => h.store.warning("m"),
        _ => h.store.error("m"),
    };

    assert_eq!(h.sweep_after(Duration::from_millis(4_999)), 0);
    assert_eq!(h.store.notifications()[0].kind, kind);
    assert_eq!(h.sweep_after(Duration::from_millis(1)), 1);
    assert!(h.store.is_empty());
}

#[test]
fn creation_order_is_visible_order() {
    let h = Harness::new();
    h.store.success("A");
    h.store.error("B");
    h.store.info("C");

    assert_eq!(h.messages(), vec!["A", "B", "C"]);
}

#[test]
fn order_survives_partial_removal() {
    let h = Harness::new();
    h.store.info("A");
    h.clock.advance(Duration::from_secs(2));
    h.store.info("B");
    h.store.info("C");

    assert_eq!(h.sweep_after(Duration::from_secs(3)), 1);
    assert_eq!(h.messages(), vec!["B", "C"]);
}

#[test]
fn expiry_is_taken_from_config_at_construction() {
    let h = Harness::with_expiry_secs(0.25);
    h.store.warning("quick");

    assert_eq!(h.sweep_after(Duration::from_millis(200)), 0);
    assert_eq!(h.sweep_after(Duration::from_millis(50)), 1);
}

#[test]
fn snapshot_serializes_for_rendering() {
    let h = Harness::new();
    h.clock.set_epoch_ms(10_000);
    h.store.success("saved");

    let json = serde_json::to_value(h.store.notifications()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "id": "ntf-1",
            "message": "saved",
            "kind": "success",
            "expires_at_ms": 15_000,
            "created_at_ms": 10_000,
            "discarded": false,
        }])
    );
}
