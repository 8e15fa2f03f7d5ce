// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Transient notification engine: store, completions, and expiration sweeping

mod completion;
mod error;
pub mod refresh;
mod store;
mod sweeper;


pub use completion::{Completion, CompletionError, DialogCompletion, Rejected};
pub use error::StoreError;
pub use refresh::{ChannelRefresh, NoOpRefresh, RefreshReceiver, RefreshSink};
pub use store::NotificationStore;
pub use sweeper::{ExpirationSweeper, SweeperHandle};

#[cfg(any(test, feature = "test-support"))]
pub use refresh::FakeRefresh;
