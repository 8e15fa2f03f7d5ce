// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Channel-backed refresh sink.
//!
//! Uses a capacity-1 wake channel: signals that arrive while one is already
//! pending coalesce, since the renderer redraws from a fresh snapshot anyway.

use super::RefreshSink;
use tokio::sync::mpsc;

/// Sending half, handed to the sweeper
#[derive(Clone, Debug)]
pub struct ChannelRefresh {
    wake_tx: mpsc::Sender<()>,
}

/// Receiving half, held by the rendering side
#[derive(Debug)]
pub struct RefreshReceiver {
    wake_rx: mpsc::Receiver<()>,
}

impl ChannelRefresh {
    pub fn new() -> (Self, RefreshReceiver) {
        let (wake_tx, wake_rx) = mpsc::channel(1);
        (Self { wake_tx }, RefreshReceiver { wake_rx })
    }
}

impl RefreshSink for ChannelRefresh {
    fn refresh(&self, removed: usize) {
        // Non-blocking wake - if the channel is full a redraw is already pending
        if self.wake_tx.try_send(()).is_err() {
            tracing::trace!(removed, "refresh already pending");
        }
    }
}

impl RefreshReceiver {
    /// Wait for the next change signal.
    ///
    /// Returns `false` once every sender is gone.
    pub async fn changed(&mut self) -> bool {
        self.wake_rx.recv().await.is_some()
    }

    /// Consume a pending signal without waiting
    pub fn try_changed(&mut self) -> bool {
        self.wake_rx.try_recv().is_ok()
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
