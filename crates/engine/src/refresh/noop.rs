// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op refresh sink.

use super::RefreshSink;

/// Sink that drops every signal.
///
/// Used when nothing renders the store, e.g. headless embedding.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpRefresh;

impl RefreshSink for NoOpRefresh {
    fn refresh(&self, _removed: usize) {}
}
