// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! toast-core: data model and configuration for transient notifications

pub mod clock;
pub mod config;
pub mod env;
pub mod id;
pub mod notification;

pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, StoreConfig, DEFAULT_EXPIRY, DEFAULT_SWEEP_INTERVAL, MAX_EXPIRY};
pub use id::{IdGen, NotificationId, SequentialIdGen, UuidIdGen};
pub use notification::{Notification, NotificationKind};
