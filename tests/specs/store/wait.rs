//! Wait indicators tied to a pending operation.

use crate::prelude::Harness;
use std::time::Duration;
use tokio::sync::oneshot;
use toast_core::NotificationKind;
use toast_engine::{CompletionError, StoreError};

#[tokio::test]
async fn wait_spans_the_pending_operation() {
    let h = Harness::new();
    let (tx, rx) = oneshot::channel::<&'static str>();
    let done = h
        .store
        .wait("uploading", async move { rx.await.map_err(|_| "sender gone") })
        .unwrap();

    assert_eq!(h.store.notifications()[0].kind, NotificationKind::Wait);
    assert_eq!(h.sweep_after(Duration::from_secs(60)), 0);

    tx.send("uploaded").unwrap();
    assert_eq!(done.await, Ok("uploaded"));

    assert!(h.store.notifications()[0].discarded);
    assert_eq!(h.sweeper.sweep(), 1);
    assert!(h.store.is_empty());
}

#[tokio::test]
async fn wait_failure_reaches_the_caller() {
    let h = Harness::new();
    let done = h
        .store
        .wait("uploading", async { Err::<u8, _>(std::io::ErrorKind::TimedOut) })
        .unwrap();

    assert_eq!(
        done.await,
        Err(CompletionError::Failed(std::io::ErrorKind::TimedOut))
    );
    assert!(h.store.notifications()[0].discarded);
}

#[tokio::test]
async fn caller_may_ignore_the_handle() {
    let h = Harness::new();
    let (tx, rx) = oneshot::channel::<()>();
    drop(h.store.wait("fire and forget", async move { rx.await }).unwrap());

    tx.send(()).unwrap();
    // Let the bridge task observe the settled operation
    for _ in 0..10 {
        if h.store.notifications()[0].discarded {
            break;
        }
        tokio::task::yield_now().await;
    }

    assert!(h.store.notifications()[0].discarded);
}

#[test]
fn wait_without_runtime_is_refused() {
    let h = Harness::new();

    let result = h.store.wait("uploading", async { Ok::<(), ()>(()) });

    assert!(matches!(result, Err(StoreError::NoRuntime)));
    assert!(h.store.is_empty());
}
