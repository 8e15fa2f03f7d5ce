// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake refresh sink for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::RefreshSink;
use parking_lot::Mutex;
use std::sync::Arc;

/// Records the removal count of every signal it receives
#[derive(Clone, Default)]
pub struct FakeRefresh {
    calls: Arc<Mutex<Vec<usize>>>,
}

impl FakeRefresh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removal counts, one per signal, in order
    pub fn calls(&self) -> Vec<usize> {
        self.calls.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl RefreshSink for FakeRefresh {
    fn refresh(&self, removed: usize) {
        self.calls.lock().push(removed);
    }
}
