//! Sweep semantics: what gets evicted and when the refresh signal fires.

use crate::prelude::Harness;
use serde_json::json;
use std::time::Duration;

#[test]
fn end_to_end_one_second_expiry() {
    let h = Harness::with_expiry_secs(1.0);
    h.store.success("ok");

    assert_eq!(h.sweep_after(Duration::from_millis(500)), 0);
    assert_eq!(h.messages(), vec!["ok"]);

    assert_eq!(h.sweep_after(Duration::from_millis(600)), 1);
    assert!(h.store.is_empty());

    assert_eq!(h.refresh.count(), 1);
}

#[test]
fn quiet_sweeps_send_no_signal() {
    let h = Harness::new();
    h.store.info("fresh");

    for _ in 0..5 {
        h.sweep_after(Duration::from_millis(200));
    }

    assert_eq!(h.refresh.count(), 0);
}

#[test]
fn sweeping_twice_changes_nothing_more() {
    let h = Harness::new();
    h.store.info("a");
    h.clock.advance(Duration::from_secs(4));
    h.store.info("b");
    let _decision = h.store.dialog("c", vec![json!({})]).unwrap();

    h.sweep_after(Duration::from_secs(1));
    let first = h.messages();
    h.sweeper.sweep();

    assert_eq!(first, vec!["b", "c"]);
    assert_eq!(h.messages(), first);
    assert_eq!(h.refresh.calls(), vec![1]);
}

#[test]
fn discarded_and_expired_go_in_the_same_pass() {
    let h = Harness::new();
    h.store.error("expired");
    let _decision = h.store.dialog("answered", vec![json!({})]).unwrap();
    h.store.info("also expired");
    let dialog_id = h.store.notifications()[1].id.clone();
    h.store.resolve(&dialog_id, json!("y")).unwrap();

    h.clock.advance(Duration::from_secs(5));
    h.store.info("newest");

    assert_eq!(h.sweeper.sweep(), 3);
    assert_eq!(h.messages(), vec!["newest"]);
    assert_eq!(h.refresh.calls(), vec![3]);
}
