// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Refresh signal sinks.
//!
//! The sweeper calls a sink after every pass that evicted at least one
//! notification, so the rendering side knows its view is stale.

mod channel;
mod noop;

pub use channel::{ChannelRefresh, RefreshReceiver};
pub use noop::NoOpRefresh;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeRefresh;

/// Receiver of "visible set changed" signals
pub trait RefreshSink: Clone + Send + Sync + 'static {
    /// Called once per sweep that removed `removed` (> 0) notifications
    fn refresh(&self, removed: usize);
}
