// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification data model and the expiration predicate.
//!
//! A notification moves one way, `Active -> Discarded`. Time-limited kinds
//! expire once their deadline passes; `Wait` and `Dialog` have no deadline
//! and only go away once the async work they track settles. Discarding is
//! logical: the entry stays visible until the next sweep evicts it.

use crate::id::NotificationId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::time::{Duration, Instant};

/// What a notification represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
    /// Blocking indicator spanning a pending operation
    Wait,
    /// Prompt awaiting a user decision
    Dialog,
}

impl NotificationKind {
    /// Kinds that carry a time-based expiry
    pub fn is_timed(self) -> bool {
        matches!(
            self,
            NotificationKind::Success
                | NotificationKind::Info
                | NotificationKind::Warning
                | NotificationKind::Error
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
            NotificationKind::Wait => "wait",
            NotificationKind::Dialog => "dialog",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single transient notification as seen by the rendering layer.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    /// Deadline for timed kinds; `None` for wait/dialog
    #[serde(skip)]
    pub expires_at: Option<Instant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at_ms: Option<u64>,
    pub created_at_ms: u64,
    /// Set once the notification is logically gone; never cleared
    pub discarded: bool,
    /// Selectable choices, in caller order (dialogs only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dialog_options: Vec<Value>,
}

impl Notification {
    /// Time-limited notification that expires `ttl` after `created`.
    ///
    /// `ttl` is clamped to [`MAX_EXPIRY`](crate::MAX_EXPIRY). A deadline the
    /// platform `Instant` cannot hold leaves `expires_at` unset.
    pub fn timed(
        id: NotificationId,
        kind: NotificationKind,
        message: impl Into<String>,
        created: Instant,
        created_at_ms: u64,
        ttl: Duration,
    ) -> Self {
        debug_assert!(kind.is_timed(), "{kind} has no time-based expiry");
        let ttl = ttl.min(crate::MAX_EXPIRY);
        let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        Self {
            id,
            message: message.into(),
            kind,
            expires_at: created.checked_add(ttl),
            expires_at_ms: Some(created_at_ms.saturating_add(ttl_ms)),
            created_at_ms,
            discarded: false,
            dialog_options: Vec::new(),
        }
    }

    /// Wait indicator; lives until the tracked operation settles.
    pub fn wait(id: NotificationId, message: impl Into<String>, created_at_ms: u64) -> Self {
        Self {
            id,
            message: message.into(),
            kind: NotificationKind::Wait,
            expires_at: None,
            expires_at_ms: None,
            created_at_ms,
            discarded: false,
            dialog_options: Vec::new(),
        }
    }

    /// Dialog prompt. Options are taken as given; callers validate them.
    pub fn dialog(
        id: NotificationId,
        message: impl Into<String>,
        options: Vec<Value>,
        created_at_ms: u64,
    ) -> Self {
        Self {
            id,
            message: message.into(),
            kind: NotificationKind::Dialog,
            expires_at: None,
            expires_at_ms: None,
            created_at_ms,
            discarded: false,
            dialog_options: options,
        }
    }

    /// Expiration predicate used by the sweeper.
    ///
    /// Discarded entries are always expired. Otherwise only entries with a
    /// deadline can expire, once `now` reaches it.
    pub fn has_expired(&self, now: Instant) -> bool {
        if self.discarded {
            return true;
        }
        match self.expires_at {
            Some(deadline) => now >= deadline,
            None => false,
        }
    }

    /// Mark as logically gone. Returns false if it already was.
    pub fn discard(&mut self) -> bool {
        !std::mem::replace(&mut self.discarded, true)
    }
}

#[cfg(test)]
#[path = "notification_tests.rs"]
mod tests;
