// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification identifiers and where they come from

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Unique identifier for a notification. Serializes as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(String);

impl NotificationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for NotificationId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Source of fresh notification ids
pub trait IdGen: Clone + Send + Sync + 'static {
    fn next(&self) -> NotificationId;
}

/// Random v4 UUIDs
#[derive(Clone, Default)]
pub struct UuidIdGen;

impl IdGen for UuidIdGen {
    fn next(&self) -> NotificationId {
        NotificationId(uuid::Uuid::new_v4().to_string())
    }
}

/// `<prefix>-1`, `<prefix>-2`, ... shared across clones; predictable ids for tests
#[derive(Clone)]
pub struct SequentialIdGen {
    prefix: String,
    counter: Arc<AtomicU64>,
}

impl SequentialIdGen {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for SequentialIdGen {
    fn default() -> Self {
        Self::new("ntf")
    }
}

impl IdGen for SequentialIdGen {
    fn next(&self) -> NotificationId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        NotificationId(format!("{}-{n}", self.prefix))
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
