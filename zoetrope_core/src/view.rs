// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derived-view contract.
//!
//! The surface a carousel drives (slide visibility, ARIA mirroring,
//! indicator highlighting) is a *derived view* of its state: rebuilt in full
//! as a [`ViewFrame`] on every change and never read back. Element handles
//! are captured once, as a [`SlideBinding`], when the carousel binds or
//! rebinds to materialized markup; there is no per-operation re-querying.

/// Element counts captured when a carousel binds to materialized markup.
///
/// The two counts may differ: indicators beyond the slide count are legal and
/// simply never activate, and an indicator count of zero (no indicator rail
/// at all) is a supported configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SlideBinding {
    slide_count: usize,
    indicator_count: usize,
}

impl SlideBinding {
    /// Captures counts for a slide list and an indicator list.
    #[inline]
    #[must_use]
    pub const fn new(slide_count: usize, indicator_count: usize) -> Self {
        Self {
            slide_count,
            indicator_count,
        }
    }

    /// Captures counts for a carousel with no indicator rail.
    #[inline]
    #[must_use]
    pub const fn without_indicators(slide_count: usize) -> Self {
        Self::new(slide_count, 0)
    }

    /// Number of bound slide elements.
    #[inline]
    #[must_use]
    pub const fn slide_count(self) -> usize {
        self.slide_count
    }

    /// Number of bound indicator elements.
    #[inline]
    #[must_use]
    pub const fn indicator_count(self) -> usize {
        self.indicator_count
    }
}

/// A complete description of what the bound elements should show.
///
/// Built fresh from carousel state on every render. Pure with respect to that
/// state and safe to apply redundantly: applying the same frame twice leaves
/// the surface unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewFrame {
    current: usize,
    binding: SlideBinding,
}

impl ViewFrame {
    /// Builds the frame showing `current` under `binding`.
    ///
    /// Callers keep `current` below the binding's slide count; a frame
    /// referencing a missing element would desynchronize the surface, so
    /// debug builds assert it.
    #[must_use]
    pub const fn new(current: usize, binding: SlideBinding) -> Self {
        debug_assert!(
            current < binding.slide_count(),
            "frame index must address a bound slide"
        );
        Self { current, binding }
    }

    /// The index shown by this frame.
    #[inline]
    #[must_use]
    pub const fn current_index(self) -> usize {
        self.current
    }

    /// Number of bound slide elements.
    #[inline]
    #[must_use]
    pub const fn slide_count(self) -> usize {
        self.binding.slide_count()
    }

    /// Number of bound indicator elements.
    #[inline]
    #[must_use]
    pub const fn indicator_count(self) -> usize {
        self.binding.indicator_count()
    }

    /// Whether slide `i` is the one shown.
    #[inline]
    #[must_use]
    pub const fn slide_visible(self, i: usize) -> bool {
        i == self.current
    }

    /// ARIA-hidden state for slide `i`: the exact complement of
    /// [`slide_visible`](Self::slide_visible).
    #[inline]
    #[must_use]
    pub const fn slide_hidden(self, i: usize) -> bool {
        !self.slide_visible(i)
    }

    /// Whether indicator `j` is highlighted.
    ///
    /// Indicators at positions past the slide count never highlight.
    #[inline]
    #[must_use]
    pub const fn indicator_active(self, j: usize) -> bool {
        j == self.current
    }

    /// Iterates `(index, visible)` over the bound slides.
    pub fn slides(self) -> impl Iterator<Item = (usize, bool)> {
        (0..self.slide_count()).map(move |i| (i, self.slide_visible(i)))
    }

    /// Iterates `(index, active)` over the bound indicators.
    pub fn indicators(self) -> impl Iterator<Item = (usize, bool)> {
        (0..self.indicator_count()).map(move |j| (j, self.indicator_active(j)))
    }
}

/// Applies derived frames to a concrete surface.
///
/// `apply` receives the *entire* frame every time. Implementations write what
/// the frame says for every bound element and keep no state of their own
/// beyond the element handles; in particular they never consult the surface
/// to decide what to write.
pub trait SlideView {
    /// Applies `frame` to the bound elements.
    fn apply(&mut self, frame: &ViewFrame);
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn exactly_one_slide_visible() {
        let frame = ViewFrame::new(2, SlideBinding::new(4, 4));
        let visible: Vec<usize> = frame
            .slides()
            .filter_map(|(i, shown)| shown.then_some(i))
            .collect();
        assert_eq!(visible, [2]);
    }

    #[test]
    fn hidden_is_the_complement_of_visible() {
        let frame = ViewFrame::new(1, SlideBinding::new(3, 3));
        for i in 0..frame.slide_count() {
            assert_ne!(
                frame.slide_visible(i),
                frame.slide_hidden(i),
                "slide {i} must be exactly one of visible/hidden"
            );
        }
    }

    #[test]
    fn extra_indicators_never_activate() {
        // Five indicators bound against three slides: positions 3 and 4 can
        // never match a valid current index.
        let binding = SlideBinding::new(3, 5);
        for current in 0..3 {
            let frame = ViewFrame::new(current, binding);
            assert!(!frame.indicator_active(3));
            assert!(!frame.indicator_active(4));
        }
    }

    #[test]
    fn missing_indicator_rail_iterates_nothing() {
        let frame = ViewFrame::new(0, SlideBinding::without_indicators(2));
        assert_eq!(frame.indicator_count(), 0);
        assert_eq!(frame.indicators().count(), 0);
    }

    #[test]
    fn frame_never_references_index_past_bounds() {
        let frame = ViewFrame::new(3, SlideBinding::new(4, 2));
        assert!(frame.slides().all(|(i, _)| i < 4));
        assert!(frame.indicators().all(|(j, _)| j < 2));
    }
}
