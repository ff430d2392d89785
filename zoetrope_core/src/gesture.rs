// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch-drag navigation math.
//!
//! [`SwipeTracker`] accumulates one horizontal drag as a virtual content
//! offset and, on release, resolves the nearest slide index. It is pure:
//! hosts feed it pointer positions and slide geometry, it never touches the
//! surface. The release target goes to the carousel as a direct jump, which
//! subjects it to the same bounds policy as every other channel.

use kurbo::Point;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Horizontal displacement multiplier applied while dragging.
///
/// Bare finger distance feels sluggish against full-width slides; deployed
/// hosts double it.
pub const DRAG_SPEED: f64 = 2.0;

/// Accumulates one horizontal drag and resolves its release target.
///
/// A drag begins at a pointer position together with the *base offset* of the
/// slide on screen (`index × slide width`), tracks a virtual offset as the
/// pointer moves (leftward drags increase it, revealing later slides), and on
/// release resolves `round(offset ÷ slide width)` clamped into the bound
/// range.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    origin: Point,
    base_offset: f64,
    offset: f64,
    active: bool,
}

impl SwipeTracker {
    /// An idle tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            origin: Point::ZERO,
            base_offset: 0.0,
            offset: 0.0,
            active: false,
        }
    }

    /// Whether a drag is in progress.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Starts a drag at `at`, with the content offset currently on screen.
    ///
    /// A second `begin` before release restarts the drag from the new
    /// position.
    pub fn begin(&mut self, at: Point, base_offset: f64) {
        self.origin = at;
        self.base_offset = base_offset;
        self.offset = base_offset;
        self.active = true;
    }

    /// Tracks pointer movement.
    ///
    /// Returns the updated virtual offset for hosts that pan the content
    /// while the finger is down, or `None` when no drag is in progress.
    pub fn drag_to(&mut self, at: Point) -> Option<f64> {
        if !self.active {
            return None;
        }
        let walk = (at.x - self.origin.x) * DRAG_SPEED;
        self.offset = self.base_offset - walk;
        Some(self.offset)
    }

    /// Ends the drag and resolves the nearest slide index.
    ///
    /// Returns `None` when no drag was in progress, no slides are bound, or
    /// the slide width is not positive.
    pub fn release(&mut self, slide_width: f64, slide_count: usize) -> Option<usize> {
        if !self.active {
            return None;
        }
        self.active = false;
        nearest_slide(self.offset, slide_width, slide_count)
    }

    /// Abandons the drag without resolving a target (touch cancel).
    pub fn abort(&mut self) {
        self.active = false;
    }
}

/// Nearest slide index for a content offset: `round(offset ÷ width)` clamped
/// into `0..slide_count`.
///
/// Returns `None` when no slides are bound or `width` is not positive.
#[must_use]
pub fn nearest_slide(offset: f64, slide_width: f64, slide_count: usize) -> Option<usize> {
    if slide_count == 0 || slide_width <= 0.0 {
        return None;
    }
    let raw = (offset / slide_width).round();
    let clamped = raw.clamp(0.0, (slide_count - 1) as f64);
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "clamped into 0..slide_count, which fits usize"
    )]
    let index = clamped as usize;
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f64 = 300.0;

    #[test]
    fn leftward_drag_resolves_the_next_slide() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(Point::new(500.0, 40.0), 0.0);
        swipe.drag_to(Point::new(420.0, 40.0));

        // 80 px of finger travel doubles to 160 px of content travel: past
        // the halfway point of a 300 px slide, so it snaps forward.
        assert_eq!(swipe.release(WIDTH, 3), Some(1));
        assert!(!swipe.is_active());
    }

    #[test]
    fn rightward_drag_resolves_the_previous_slide() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(Point::new(200.0, 40.0), 2.0 * WIDTH);
        swipe.drag_to(Point::new(290.0, 40.0));

        assert_eq!(swipe.release(WIDTH, 3), Some(1));
    }

    #[test]
    fn short_drag_snaps_back_to_the_same_slide() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(Point::new(500.0, 40.0), WIDTH);
        swipe.drag_to(Point::new(470.0, 40.0));

        assert_eq!(swipe.release(WIDTH, 3), Some(1));
    }

    #[test]
    fn release_clamps_at_both_ends() {
        // A long leftward fling from the last slide cannot run past it.
        let mut swipe = SwipeTracker::new();
        swipe.begin(Point::new(600.0, 0.0), 2.0 * WIDTH);
        swipe.drag_to(Point::new(0.0, 0.0));
        assert_eq!(swipe.release(WIDTH, 3), Some(2));

        // A long rightward fling from the first cannot run before it.
        swipe.begin(Point::new(0.0, 0.0), 0.0);
        swipe.drag_to(Point::new(600.0, 0.0));
        assert_eq!(swipe.release(WIDTH, 3), Some(0));
    }

    #[test]
    fn vertical_movement_does_not_navigate() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(Point::new(300.0, 10.0), WIDTH);
        swipe.drag_to(Point::new(300.0, 400.0));

        assert_eq!(swipe.release(WIDTH, 3), Some(1));
    }

    #[test]
    fn release_without_begin_is_none() {
        let mut swipe = SwipeTracker::new();
        assert_eq!(swipe.release(WIDTH, 3), None);
        assert_eq!(swipe.drag_to(Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn abort_discards_the_drag() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(Point::new(500.0, 40.0), 0.0);
        swipe.drag_to(Point::new(100.0, 40.0));
        swipe.abort();

        assert_eq!(swipe.release(WIDTH, 3), None);
    }

    #[test]
    fn empty_or_degenerate_geometry_resolves_nothing() {
        assert_eq!(nearest_slide(120.0, WIDTH, 0), None);
        assert_eq!(nearest_slide(120.0, 0.0, 3), None);
        assert_eq!(nearest_slide(120.0, -5.0, 3), None);
    }

    #[test]
    fn nearest_slide_rounds_at_the_midpoint() {
        assert_eq!(nearest_slide(449.0, WIDTH, 4), Some(1));
        assert_eq!(nearest_slide(450.0, WIDTH, 4), Some(2));
        assert_eq!(nearest_slide(-80.0, WIDTH, 4), Some(0));
    }
}
