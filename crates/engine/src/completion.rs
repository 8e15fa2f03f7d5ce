// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Caller-side handle for a wait or dialog outcome.

use std::future::Future;
use std::pin::Pin;
use std::task::{ready, Context, Poll};
use thiserror::Error;
use tokio::sync::oneshot;

/// Why a [`Completion`] did not yield a value
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompletionError<E> {
    /// The tracked operation failed, or the dialog was rejected
    #[error("operation failed: {0}")]
    Failed(E),
    /// The producing side went away without settling
    #[error("completion abandoned before settling")]
    Abandoned,
}

/// Failure value of a rejected dialog
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("dialog rejected")]
pub struct Rejected;

pub(crate) type Settle<T, E> = oneshot::Sender<Result<T, E>>;

/// Future that settles once with the outcome of a wait or dialog.
///
/// Dropping it is fine: the notification is still discarded when the
/// underlying work settles.
#[derive(Debug)]
#[must_use = "completions do nothing unless awaited"]
pub struct Completion<T, E> {
    rx: oneshot::Receiver<Result<T, E>>,
}

impl<T, E> Completion<T, E> {
    pub(crate) fn channel() -> (Settle<T, E>, Self) {
        let (tx, rx) = oneshot::channel();
        (tx, Self { rx })
    }
}

impl<T, E> Future for Completion<T, E> {
    type Output = Result<T, CompletionError<E>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let outcome = ready!(Pin::new(&mut self.get_mut().rx).poll(cx));
        Poll::Ready(match outcome {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(CompletionError::Failed(e)),
            Err(_) => Err(CompletionError::Abandoned),
        })
    }
}

/// Outcome handle returned by `dialog()`
pub type DialogCompletion = Completion<serde_json::Value, Rejected>;

#[cfg(test)]
#[path = "completion_tests.rs"]
mod tests;
