//! Dialog prompts and their decisions.

use crate::prelude::Harness;
use serde_json::json;
use toast_core::NotificationKind;
use toast_engine::{CompletionError, Rejected, StoreError};

#[test]
fn dialog_with_no_options_is_a_caller_error() {
    let h = Harness::new();

    assert_eq!(
        h.store.dialog("proceed?", vec![]).unwrap_err(),
        StoreError::NoDialogOptions
    );
    assert!(h.store.is_empty());
}

#[test]
fn dialog_with_non_object_option_is_a_caller_error() {
    let h = Harness::new();

    let err = h.store.dialog("proceed?", vec![json!("yes")]).unwrap_err();

    assert_eq!(err.to_string(), "dialog option 0: expected object, got string");
    assert!(h.store.is_empty());
}

#[tokio::test]
async fn resolve_delivers_value_then_dialog_is_swept() {
    let h = Harness::new();
    let decision = h.store.dialog("pick", vec![json!({"a": 1})]).unwrap();

    let shown = h.store.notifications();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].kind, NotificationKind::Dialog);
    assert_eq!(shown[0].dialog_options, vec![json!({"a": 1})]);

    h.store.resolve(&shown[0].id, json!(42)).unwrap();
    assert_eq!(decision.await, Ok(json!(42)));

    // Discarded but still visible until the next sweep
    assert!(h.store.notifications()[0].discarded);
    assert_eq!(h.sweeper.sweep(), 1);
    assert!(h.store.is_empty());
    assert_eq!(h.refresh.count(), 1);
}

#[tokio::test]
async fn reject_fails_the_callers_handle() {
    let h = Harness::new();
    let decision = h
        .store
        .dialog("delete?", vec![json!({"label": "Delete"}), json!({"label": "Keep"})])
        .unwrap();
    let id = h.store.notifications()[0].id.clone();

    h.store.reject(&id).unwrap();

    assert_eq!(decision.await, Err(CompletionError::Failed(Rejected)));
    assert!(h.store.get(&id).unwrap().discarded);
}

#[test]
fn second_decision_is_refused() {
    let h = Harness::new();
    let _decision = h.store.dialog("pick", vec![json!({})]).unwrap();
    let id = h.store.notifications()[0].id.clone();

    h.store.reject(&id).unwrap();

    assert_eq!(
        h.store.resolve(&id, json!(1)),
        Err(StoreError::AlreadySettled(id))
    );
}

#[test]
fn open_dialog_outlives_any_expiry() {
    let h = Harness::with_expiry_secs(1.0);
    let _decision = h.store.dialog("pick", vec![json!({})]).unwrap();

    assert_eq!(h.sweep_after(std::time::Duration::from_secs(3_600)), 0);
    assert_eq!(h.store.len(), 1);
}
