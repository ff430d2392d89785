// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed in-memory event recording.
//!
//! [`RecordingSink`] implements [`TraceSink`] and appends every rotation
//! event to a shared buffer of [`TraceRecord`]s. Sinks are cheap clones of
//! one buffer: keep a clone, box the other into a controller, and read the
//! records back through the clone afterwards.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use zoetrope_core::carousel::Phase;
use zoetrope_core::trace::{NavRejection, NavigateEvent, TraceSink};
use zoetrope_core::view::SlideBinding;

/// One recorded rotation event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceRecord {
    /// Lifecycle phase transition.
    PhaseChange {
        /// Phase before the transition.
        from: Phase,
        /// Phase after the transition.
        to: Phase,
    },
    /// A navigation that was applied.
    Navigate {
        /// Index before the move.
        from: usize,
        /// Index after the move.
        to: usize,
        /// Slide count at the time of the move.
        slide_count: usize,
    },
    /// A navigation that was rejected.
    Rejected(NavRejection),
    /// A rotation timer armed for one period.
    TimerArmed(Duration),
    /// A live rotation timer cancelled.
    TimerCancelled,
    /// The controller adopted a new binding.
    Rebind(SlideBinding),
}

/// A [`TraceSink`] that appends every event to a shared record buffer.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    records: Rc<RefCell<Vec<TraceRecord>>>,
}

impl RecordingSink {
    /// Creates a sink with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the records so far.
    #[must_use]
    pub fn records(&self) -> Vec<TraceRecord> {
        self.records.borrow().clone()
    }

    /// Drains and returns the records so far.
    pub fn take(&self) -> Vec<TraceRecord> {
        self.records.take()
    }

    /// Number of records in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    fn push(&mut self, record: TraceRecord) {
        self.records.borrow_mut().push(record);
    }
}

impl TraceSink for RecordingSink {
    fn on_phase_change(&mut self, from: Phase, to: Phase) {
        self.push(TraceRecord::PhaseChange { from, to });
    }

    fn on_navigate(&mut self, e: &NavigateEvent) {
        self.push(TraceRecord::Navigate {
            from: e.from,
            to: e.to,
            slide_count: e.slide_count,
        });
    }

    fn on_navigation_rejected(&mut self, e: &NavRejection) {
        self.push(TraceRecord::Rejected(*e));
    }

    fn on_timer_armed(&mut self, period: Duration) {
        self.push(TraceRecord::TimerArmed(period));
    }

    fn on_timer_cancelled(&mut self) {
        self.push(TraceRecord::TimerCancelled);
    }

    fn on_rebind(&mut self, binding: SlideBinding) {
        self.push(TraceRecord::Rebind(binding));
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use zoetrope_core::carousel::{Carousel, Direction, RotationConfig};
    use zoetrope_core::timer::RotationTimer;
    use zoetrope_core::view::{SlideBinding, SlideView, ViewFrame};

    use super::{RecordingSink, TraceRecord};

    struct InertTimer;

    impl RotationTimer for InertTimer {
        fn arm(&mut self, _period: Duration) {}
        fn cancel(&mut self) {}
    }

    struct InertView;

    impl SlideView for InertView {
        fn apply(&mut self, _frame: &ViewFrame) {}
    }

    fn recorded_carousel(n: usize) -> (Carousel<InertTimer, InertView>, RecordingSink) {
        let sink = RecordingSink::new();
        let carousel = Carousel::new(
            SlideBinding::new(n, n),
            RotationConfig::default(),
            InertTimer,
            InertView,
        )
        .with_trace_sink(Box::new(sink.clone()));
        (carousel, sink)
    }

    #[test]
    fn clones_share_one_buffer() {
        let (mut carousel, sink) = recorded_carousel(3);
        assert!(sink.is_empty());

        carousel.start();
        carousel.advance(Direction::Forward);

        let records = sink.records();
        assert!(records.contains(&TraceRecord::Navigate {
            from: 0,
            to: 1,
            slide_count: 3,
        }));
        assert_eq!(sink.len(), records.len());
    }

    #[test]
    fn take_drains_the_buffer() {
        let (mut carousel, sink) = recorded_carousel(2);
        carousel.start();

        assert!(!sink.take().is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn records_arrive_in_event_order() {
        let (mut carousel, sink) = recorded_carousel(2);
        carousel.start();

        let records = sink.records();
        let armed_at = records
            .iter()
            .position(|r| matches!(r, TraceRecord::TimerArmed(_)))
            .unwrap();
        let phase_at = records
            .iter()
            .position(|r| matches!(r, TraceRecord::PhaseChange { .. }))
            .unwrap();
        assert!(phase_at < armed_at, "phase change precedes the first arm");
    }
}
