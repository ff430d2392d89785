// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel diagnostics.
//!
//! [`TraceSink`] receives lifecycle, navigation, and timer events from a
//! carousel. All methods have empty defaults, so sinks implement only what
//! they care about, and the default [`NoopSink`] costs nothing.
//!
//! Rejected navigation is *reported* here rather than surfaced as an error:
//! bad input leaves carousel state untouched and must never throw into the
//! host page, but a host that wants the warning (e.g. on the browser console)
//! attaches a sink.

use core::time::Duration;

use crate::carousel::Phase;
use crate::view::SlideBinding;

/// A navigation that was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigateEvent {
    /// Index before the navigation.
    pub from: usize,
    /// Index after the navigation.
    pub to: usize,
    /// Slide count both indices are valid under.
    pub slide_count: usize,
}

/// A navigation request that was rejected, leaving state unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavRejection {
    /// Navigation arrived while no slides are bound.
    EmptySlideSet,
    /// A direct index request fell outside the bound range. Typically a stale
    /// indicator position after a shrinking reload.
    OutOfRange {
        /// The requested index.
        requested: usize,
        /// The bound slide count.
        slide_count: usize,
    },
}

/// Receives carousel diagnostics. All methods have empty defaults.
pub trait TraceSink {
    /// The carousel moved between lifecycle phases.
    fn on_phase_change(&mut self, from: Phase, to: Phase) {
        _ = (from, to);
    }

    /// A navigation was applied (possibly landing on the same index).
    fn on_navigate(&mut self, e: &NavigateEvent) {
        _ = e;
    }

    /// A navigation request was rejected; state is unchanged.
    fn on_navigation_rejected(&mut self, e: &NavRejection) {
        _ = e;
    }

    /// A repeating timer was armed with the given period.
    fn on_timer_armed(&mut self, period: Duration) {
        _ = period;
    }

    /// The live timer was cancelled.
    fn on_timer_cancelled(&mut self) {}

    /// The carousel bound (or rebound) to new element counts.
    fn on_rebind(&mut self, binding: SlideBinding) {
        _ = binding;
    }
}

/// A sink that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}
