// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Expiration sweeping.
//!
//! A sweep evicts every notification whose expiration predicate holds and
//! signals the refresh sink when anything went away. [`ExpirationSweeper::start`]
//! runs sweeps on the store's configured cadence until the returned
//! [`SweeperHandle`] is stopped or dropped.

use crate::refresh::RefreshSink;
use crate::store::NotificationStore;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use toast_core::{Clock, IdGen};

/// Removes expired notifications from a store
pub struct ExpirationSweeper<C: Clock, G: IdGen, R: RefreshSink> {
    store: NotificationStore<C, G>,
    refresh: R,
}

impl<C: Clock, G: IdGen, R: RefreshSink> ExpirationSweeper<C, G, R> {
    pub fn new(store: NotificationStore<C, G>, refresh: R) -> Self {
        Self { store, refresh }
    }

    /// Sweep using the store's clock
    pub fn sweep(&self) -> usize {
        self.sweep_at(self.store.clock().now())
    }

    /// Sweep as of `now`; returns how many notifications were removed.
    ///
    /// The refresh sink fires only when the count is non-zero, and after the
    /// store lock is released.
    pub fn sweep_at(&self, now: Instant) -> usize {
        let removed = self.store.evict_expired(now);
        if removed > 0 {
            tracing::debug!(removed, "swept expired notifications");
            self.refresh.refresh(removed);
        }
        removed
    }

    /// Sweep periodically on the current Tokio runtime.
    ///
    /// The first pass runs one interval after start. Passes never overlap;
    /// late ticks are skipped rather than bunched.
    pub fn start(self) -> SweeperHandle {
        let period = self.store.config().sweep_interval();
        let stopped = Arc::new(Mutex::new(false));
        let gate = Arc::clone(&stopped);

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // First tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                if !self.gated_sweep(&gate) {
                    break;
                }
            }
        });

        tracing::info!(?period, "expiration sweeper started");
        SweeperHandle {
            stopped,
            task: Some(task),
        }
    }

    /// One pass under the stop gate. Returns false once stopped.
    fn gated_sweep(&self, gate: &Mutex<bool>) -> bool {
        let stopped = gate.lock();
        if *stopped {
            return false;
        }
        self.sweep();
        true
    }
}

/// Running sweeper task. Stops on [`stop`](Self::stop) or drop.
pub struct SweeperHandle {
    stopped: Arc<Mutex<bool>>,
    task: Option<JoinHandle<()>>,
}

impl SweeperHandle {
    /// Cancel the periodic sweep.
    ///
    /// Waits for an in-flight pass to finish; once this returns no sweep is
    /// running and none will start.
    pub fn stop(mut self) {
        self.shutdown();
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    fn shutdown(&mut self) {
        *self.stopped.lock() = true;
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::info!("expiration sweeper stopped");
        }
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
#[path = "sweeper_tests.rs"]
mod tests;
