// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Repeating-timer port.
//!
//! Platform backends implement [`RotationTimer`] over whatever repeating
//! timer the host offers (`setInterval` on the web). Tick delivery is the
//! backend's business: a tick is fed back into the carousel as forward
//! navigation, which is also what restarts the countdown.

use core::time::Duration;

/// A repeating timer armed and cancelled by a carousel.
///
/// The carousel drives this port under a strict discipline:
///
/// - [`cancel`](Self::cancel) is invoked only while a timer is live;
/// - a live timer is always cancelled before the next [`arm`](Self::arm);
/// - hence at most one timer is live per carousel at any instant.
///
/// Implementations therefore need no defensive bookkeeping of their own:
/// every `arm` replaces nothing, and every `cancel` has exactly one live
/// timer to clear.
pub trait RotationTimer {
    /// Arms a repeating timer firing every `period`.
    fn arm(&mut self, period: Duration);

    /// Cancels the live timer.
    fn cancel(&mut self);
}
