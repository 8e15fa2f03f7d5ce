// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the notification store

use thiserror::Error;
use toast_core::NotificationId;

/// Errors surfaced synchronously by store operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("dialog needs at least one option")]
    NoDialogOptions,
    #[error("dialog option {index}: expected object, got {found}")]
    InvalidDialogOption { index: usize, found: &'static str },
    #[error("notification not found: {0}")]
    NotFound(NotificationId),
    #[error("notification is not a dialog: {0}")]
    NotADialog(NotificationId),
    #[error("dialog already settled: {0}")]
    AlreadySettled(NotificationId),
    #[error("no tokio runtime to drive the operation")]
    NoRuntime,
}
