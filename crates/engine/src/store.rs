// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification store.
//!
//! Owns the ordered sequence of live notifications behind a single mutex.
//! Every constructor funnels through [`NotificationStore::push`]; eviction
//! belongs to the sweeper alone.

use crate::completion::{Completion, DialogCompletion, Rejected, Settle};
use crate::error::StoreError;
use parking_lot::Mutex;
use serde_json::Value;
use std::future::Future;
use std::sync::{Arc, Weak};
use std::time::Instant;
use tokio::runtime::Handle;
use toast_core::{
    Clock, IdGen, Notification, NotificationId, NotificationKind, StoreConfig, SystemClock,
    UuidIdGen,
};

/// Stored notification plus the dialog's pending decision, if any
struct Entry {
    notification: Notification,
    responder: Option<Settle<Value, Rejected>>,
}

type Entries = Mutex<Vec<Entry>>;

/// Insertion-ordered collection of transient notifications.
///
/// Cheap to clone; clones share the same sequence.
#[derive(Clone)]
pub struct NotificationStore<C: Clock = SystemClock, G: IdGen = UuidIdGen> {
    entries: Arc<Entries>,
    config: Arc<StoreConfig>,
    clock: C,
    ids: G,
}

impl<C: Clock> NotificationStore<C, UuidIdGen> {
    pub fn new(config: StoreConfig, clock: C) -> Self {
        Self::with_id_gen(config, clock, UuidIdGen)
    }
}

impl<C: Clock, G: IdGen> NotificationStore<C, G> {
    pub fn with_id_gen(config: StoreConfig, clock: C, ids: G) -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            config: Arc::new(config),
            clock,
            ids,
        }
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.push_timed(NotificationKind::Success, message.into())
    }

    pub fn info(&self, message: impl Into<String>) -> NotificationId {
        self.push_timed(NotificationKind::Info, message.into())
    }

    pub fn warning(&self, message: impl Into<String>) -> NotificationId {
        self.push_timed(NotificationKind::Warning, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.push_timed(NotificationKind::Error, message.into())
    }

    /// Show a wait indicator for as long as `operation` is pending.
    ///
    /// The operation is driven on a task spawned onto the current Tokio
    /// runtime. Without one this returns [`StoreError::NoRuntime`] and
    /// appends nothing. When the operation settles the notification is
    /// discarded first, then the outcome is forwarded to the returned
    /// completion unchanged.
    pub fn wait<F, T, E>(
        &self,
        message: impl Into<String>,
        operation: F,
    ) -> Result<Completion<T, E>, StoreError>
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        let runtime = Handle::try_current().map_err(|_| StoreError::NoRuntime)?;

        let id = self.next_id();
        self.push(Entry {
            notification: Notification::wait(id.clone(), message, self.clock.epoch_ms()),
            responder: None,
        });

        let (settle, completion) = Completion::channel();
        let entries = Arc::downgrade(&self.entries);
        runtime.spawn(async move {
            let outcome = operation.await;
            discard_if_alive(&entries, &id);
            if settle.send(outcome).is_err() {
                tracing::debug!(%id, "wait completion dropped by caller");
            }
        });
        Ok(completion)
    }

    /// Show a dialog and hand back the caller's side of the decision.
    ///
    /// Options must be a non-empty list of JSON objects; otherwise nothing
    /// is appended. The decision arrives through [`resolve`](Self::resolve)
    /// or [`reject`](Self::reject).
    pub fn dialog(
        &self,
        message: impl Into<String>,
        options: Vec<Value>,
    ) -> Result<DialogCompletion, StoreError> {
        if options.is_empty() {
            return Err(StoreError::NoDialogOptions);
        }
        if let Some((index, option)) = options.iter().enumerate().find(|(_, o)| !o.is_object()) {
            return Err(StoreError::InvalidDialogOption {
                index,
                found: json_type(option),
            });
        }

        let id = self.next_id();
        let (settle, completion) = Completion::channel();
        self.push(Entry {
            notification: Notification::dialog(id, message, options, self.clock.epoch_ms()),
            responder: Some(settle),
        });
        Ok(completion)
    }

    /// Accept a dialog with `value`
    pub fn resolve(&self, id: &NotificationId, value: Value) -> Result<(), StoreError> {
        self.settle(id, Ok(value))
    }

    /// Decline a dialog
    pub fn reject(&self, id: &NotificationId) -> Result<(), StoreError> {
        self.settle(id, Err(Rejected))
    }

    /// Ordered snapshot of everything currently in the store, discarded
    /// entries included until the next sweep.
    pub fn notifications(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .iter()
            .map(|e| e.notification.clone())
            .collect()
    }

    pub fn get(&self, id: &NotificationId) -> Option<Notification> {
        self.entries
            .lock()
            .iter()
            .find(|e| &e.notification.id == id)
            .map(|e| e.notification.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Template identifier for the rendering layer
    pub fn template(&self) -> &str {
        self.config.template()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Drop every entry whose expiration predicate holds at `now`.
    ///
    /// Returns how many were removed; survivors keep their relative order.
    pub(crate) fn evict_expired(&self, now: Instant) -> usize {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|e| !e.notification.has_expired(now));
        before - entries.len()
    }

    fn push_timed(&self, kind: NotificationKind, message: String) -> NotificationId {
        let id = self.next_id();
        let notification = Notification::timed(
            id.clone(),
            kind,
            message,
            self.clock.now(),
            self.clock.epoch_ms(),
            self.config.expiry(),
        );
        self.push(Entry {
            notification,
            responder: None,
        });
        id
    }

    /// Single append primitive: tail insert, no dedup, no cap
    fn push(&self, entry: Entry) {
        tracing::debug!(
            id = %entry.notification.id,
            kind = %entry.notification.kind,
            "notification added"
        );
        self.entries.lock().push(entry);
    }

    fn settle(
        &self,
        id: &NotificationId,
        outcome: Result<Value, Rejected>,
    ) -> Result<(), StoreError> {
        let mut entries = self.entries.lock();
        let entry = entries
            .iter_mut()
            .find(|e| &e.notification.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        if entry.notification.kind != NotificationKind::Dialog {
            return Err(StoreError::NotADialog(id.clone()));
        }
        let responder = entry
            .responder
            .take()
            .ok_or_else(|| StoreError::AlreadySettled(id.clone()))?;

        let accepted = outcome.is_ok();
        if responder.send(outcome).is_err() {
            tracing::debug!(%id, "dialog completion dropped by caller");
        }
        entry.notification.discard();
        tracing::info!(%id, accepted, "dialog settled");
        Ok(())
    }

    fn next_id(&self) -> NotificationId {
        self.ids.next()
    }
}

/// Mark a notification discarded, unless the store has been torn down
fn discard_if_alive(entries: &Weak<Entries>, id: &NotificationId) {
    let Some(entries) = entries.upgrade() else {
        tracing::debug!(%id, "store gone before completion settled");
        return;
    };
    let mut entries = entries.lock();
    if let Some(entry) = entries.iter_mut().find(|e| &e.notification.id == id) {
        entry.notification.discard();
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
