// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel rotation state machine.
//!
//! [`Carousel`] exclusively owns rotation state: the current index, the
//! lifecycle [`Phase`], and the liveness of the one repeating timer it is
//! allowed to hold. Everything visible is derived from that state: each
//! applied operation rebuilds a complete [`ViewFrame`] for the view port
//! rather than patching the surface incrementally, and the surface is never
//! read back.
//!
//! The timer port is driven under a single discipline: a live timer is always
//! cancelled before the next one is armed, and cancel is never issued
//! without a live timer. At most one repeating timer exists per carousel at
//! any instant, across any sequence of operations.
//!
//! Host integration is intentionally thin: deliver timer ticks as
//! `advance(Direction::Forward)`, and map each input channel (controls,
//! indicators, keys, touch release, visibility) onto the one operation it
//! means. The channels are adapters, not state machines.

use alloc::boxed::Box;
use core::time::Duration;

use crate::timer::RotationTimer;
use crate::trace::{NavRejection, NavigateEvent, NoopSink, TraceSink};
use crate::view::{SlideBinding, SlideView, ViewFrame};

/// Default rotation period.
///
/// The value shipped by the most widely deployed host pages; a 5000 ms
/// variant also exists in the wild, which is why the period is a
/// [`RotationConfig`] option rather than a constant of the operations.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(7000);

/// Carousel lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Constructed but never started; nothing rendered yet.
    Uninitialized,
    /// Serving navigation. Degenerate when no slides are bound: still
    /// `Active`, but rendering nothing and holding no timer.
    Active,
    /// Rotation cancelled; the last-rendered view stays in place.
    Stopped,
}

/// Navigation direction for relative moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards higher indices, wrapping to 0 past the end.
    Forward,
    /// Towards lower indices, wrapping to the last slide before 0.
    Backward,
}

/// Rotation options fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationConfig {
    /// Period between automatic forward ticks.
    pub interval: Duration,
    /// Starting index; clamped into the bound range at construction.
    pub start_index: usize,
}

impl RotationConfig {
    /// Config with the given period, starting at slide 0.
    #[inline]
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            start_index: 0,
        }
    }

    /// Replaces the starting index. Clamping happens at construction, where
    /// the bound slide count is known.
    #[inline]
    #[must_use]
    pub const fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

/// The carousel rotation controller.
///
/// Generic over its two ports: `T` arms and cancels the host's repeating
/// timer, `V` applies derived frames to the host's surface. All operations
/// are infallible; invalid input is reported through the trace sink and
/// leaves state unchanged, so nothing here ever throws into a host page.
pub struct Carousel<T, V> {
    binding: SlideBinding,
    interval: Duration,
    /// Current slide; meaningful only while slides are bound.
    current: usize,
    phase: Phase,
    /// Mirrors the live timer handle: `true` between an arm and its cancel.
    timer_live: bool,
    timer: T,
    view: V,
    trace: Box<dyn TraceSink>,
}

impl<T, V> core::fmt::Debug for Carousel<T, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Carousel")
            .field("binding", &self.binding)
            .field("interval", &self.interval)
            .field("current", &self.current)
            .field("phase", &self.phase)
            .field("timer_live", &self.timer_live)
            .finish_non_exhaustive()
    }
}

impl<T: RotationTimer, V: SlideView> Carousel<T, V> {
    /// Binds a carousel to materialized element counts.
    ///
    /// `config.start_index` is clamped into range (0 when no slides are
    /// bound). The carousel starts [`Phase::Uninitialized`]: nothing is
    /// rendered and no timer is armed until [`start`](Self::start).
    #[must_use]
    pub fn new(binding: SlideBinding, config: RotationConfig, timer: T, view: V) -> Self {
        Self {
            binding,
            interval: config.interval,
            current: clamp_start(config.start_index, binding.slide_count()),
            phase: Phase::Uninitialized,
            timer_live: false,
            timer,
            view,
            trace: Box::new(NoopSink),
        }
    }

    /// Replaces the trace sink (default: discard everything).
    #[must_use]
    pub fn with_trace_sink(mut self, trace: Box<dyn TraceSink>) -> Self {
        self.trace = trace;
        self
    }

    /// Current lifecycle phase.
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Current slide index, or `None` while no slides are bound.
    #[inline]
    #[must_use]
    pub const fn current_index(&self) -> Option<usize> {
        if self.binding.slide_count() == 0 {
            None
        } else {
            Some(self.current)
        }
    }

    /// Number of bound slides.
    #[inline]
    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.binding.slide_count()
    }

    /// Counts captured at construction or the most recent reload.
    #[inline]
    #[must_use]
    pub const fn binding(&self) -> SlideBinding {
        self.binding
    }

    /// Rotation period.
    #[inline]
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a repeating timer is currently live.
    #[inline]
    #[must_use]
    pub const fn is_rotating(&self) -> bool {
        self.timer_live
    }

    /// The bound timer port.
    #[inline]
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// The bound view port.
    #[inline]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the view port.
    ///
    /// Backends use this to swap element handles when the backing markup was
    /// replaced, immediately before handing the fresh counts to
    /// [`reload`](Self::reload).
    #[inline]
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Starts rotation.
    ///
    /// Any live timer is cancelled first, so repeated calls are idempotent
    /// and can never stack timers. With slides bound, the current index is
    /// rendered and one repeating timer armed; the backend delivers its ticks
    /// back as `advance(Direction::Forward)`. With no slides bound the
    /// carousel still becomes [`Phase::Active`], but renders nothing and arms
    /// nothing.
    pub fn start(&mut self) {
        self.cancel_timer();
        self.set_phase(Phase::Active);
        if self.binding.slide_count() == 0 {
            return;
        }
        self.render();
        self.arm_timer();
    }

    /// Stops rotation, cancelling the timer before anything else.
    ///
    /// The last-rendered view stays in place. Idempotent: a second call
    /// cancels nothing further.
    pub fn stop(&mut self) {
        self.cancel_timer();
        self.set_phase(Phase::Stopped);
    }

    /// Moves one slide in `direction`, wrapping at the ends.
    ///
    /// With no slides bound this is a reported no-op. An applied move
    /// re-renders the full view and, while [`Phase::Active`], restarts the
    /// countdown, so the next automatic tick is always a full period away
    /// from the move that preceded it. Automatic ticks restart it too. With
    /// a single slide the move lands where it started but still re-renders
    /// and re-arms, keeping the control loop uniform.
    pub fn advance(&mut self, direction: Direction) {
        let n = self.binding.slide_count();
        if n == 0 {
            self.trace
                .on_navigation_rejected(&NavRejection::EmptySlideSet);
            return;
        }
        self.commit(wrap(self.current, direction, n));
    }

    /// Jumps directly to `index`.
    ///
    /// Requests outside the bound range, including anything while no slides
    /// are bound and stale indicator positions after a shrinking reload, are
    /// reported and leave state unchanged.
    pub fn go_to(&mut self, index: usize) {
        let n = self.binding.slide_count();
        if n == 0 {
            self.trace
                .on_navigation_rejected(&NavRejection::EmptySlideSet);
            return;
        }
        if index >= n {
            self.trace
                .on_navigation_rejected(&NavRejection::OutOfRange {
                    requested: index,
                    slide_count: n,
                });
            return;
        }
        self.commit(index);
    }

    /// Rebinds to new element counts after the backing markup was replaced.
    ///
    /// This is the only operation that changes the slide count after
    /// construction. The timer is cancelled before anything else; the current
    /// index resets to 0 when the old one no longer fits; the carousel then
    /// (re)activates, rendering and arming a fresh timer when slides remain.
    /// Accepted at any time, including before [`start`](Self::start) has ever
    /// run and repeatedly in rapid succession: each call fully supersedes the
    /// previous binding.
    pub fn reload(&mut self, binding: SlideBinding) {
        self.cancel_timer();
        self.binding = binding;
        let n = binding.slide_count();
        if self.current >= n {
            self.current = 0;
        }
        self.trace.on_rebind(binding);
        self.set_phase(Phase::Active);
        if n == 0 {
            return;
        }
        self.render();
        self.arm_timer();
    }

    /// Applies a committed navigation: index, full re-render, and a fresh
    /// countdown while rotating.
    fn commit(&mut self, target: usize) {
        let e = NavigateEvent {
            from: self.current,
            to: target,
            slide_count: self.binding.slide_count(),
        };
        self.current = target;
        self.trace.on_navigate(&e);
        self.render();
        if self.phase == Phase::Active {
            self.arm_timer();
        }
    }

    /// Rebuilds the whole derived view from current state.
    ///
    /// Callers skip this while no slides are bound, so no frame ever
    /// references an element that does not exist.
    fn render(&mut self) {
        let frame = ViewFrame::new(self.current, self.binding);
        self.view.apply(&frame);
    }

    fn set_phase(&mut self, to: Phase) {
        if self.phase != to {
            self.trace.on_phase_change(self.phase, to);
            self.phase = to;
        }
    }

    /// Cancels the live timer, if any. The only call site of
    /// [`RotationTimer::cancel`], which keeps cancels paired one-to-one with
    /// live arms.
    fn cancel_timer(&mut self) {
        if self.timer_live {
            self.timer.cancel();
            self.timer_live = false;
            self.trace.on_timer_cancelled();
        }
    }

    /// Arms a fresh repeating timer, cancelling any live one first.
    fn arm_timer(&mut self) {
        self.cancel_timer();
        self.timer.arm(self.interval);
        self.timer_live = true;
        self.trace.on_timer_armed(self.interval);
    }
}

/// Wrapping index step: `(current ± 1 + n) mod n`.
const fn wrap(current: usize, direction: Direction, n: usize) -> usize {
    debug_assert!(n > 0, "wrapping is undefined over zero slides");
    match direction {
        Direction::Forward => (current + 1) % n,
        Direction::Backward => (current + n - 1) % n,
    }
}

/// Start-index clamp: into `0..n`, or 0 when nothing is bound.
const fn clamp_start(start: usize, n: usize) -> usize {
    if n == 0 {
        0
    } else if start >= n {
        n - 1
    } else {
        start
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::*;

    const PERIOD: Duration = Duration::from_millis(5000);

    #[derive(Debug, Default)]
    struct CountingTimer {
        arms: Vec<Duration>,
        cancels: usize,
    }

    impl RotationTimer for CountingTimer {
        fn arm(&mut self, period: Duration) {
            self.arms.push(period);
        }

        fn cancel(&mut self) {
            self.cancels += 1;
        }
    }

    #[derive(Debug, Default)]
    struct RecordingView {
        frames: Vec<ViewFrame>,
    }

    impl SlideView for RecordingView {
        fn apply(&mut self, frame: &ViewFrame) {
            self.frames.push(*frame);
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Logged {
        Phase(Phase, Phase),
        Nav { from: usize, to: usize },
        Rejected(NavRejection),
        Armed(Duration),
        Cancelled,
        Rebound(SlideBinding),
    }

    #[derive(Clone, Debug, Default)]
    struct SharedSink(Rc<RefCell<Vec<Logged>>>);

    impl TraceSink for SharedSink {
        fn on_phase_change(&mut self, from: Phase, to: Phase) {
            self.0.borrow_mut().push(Logged::Phase(from, to));
        }

        fn on_navigate(&mut self, e: &NavigateEvent) {
            self.0.borrow_mut().push(Logged::Nav {
                from: e.from,
                to: e.to,
            });
        }

        fn on_navigation_rejected(&mut self, e: &NavRejection) {
            self.0.borrow_mut().push(Logged::Rejected(*e));
        }

        fn on_timer_armed(&mut self, period: Duration) {
            self.0.borrow_mut().push(Logged::Armed(period));
        }

        fn on_timer_cancelled(&mut self) {
            self.0.borrow_mut().push(Logged::Cancelled);
        }

        fn on_rebind(&mut self, binding: SlideBinding) {
            self.0.borrow_mut().push(Logged::Rebound(binding));
        }
    }

    fn carousel_with(n: usize, config: RotationConfig) -> Carousel<CountingTimer, RecordingView> {
        Carousel::new(
            SlideBinding::new(n, n),
            config,
            CountingTimer::default(),
            RecordingView::default(),
        )
    }

    fn make_carousel(n: usize) -> Carousel<CountingTimer, RecordingView> {
        carousel_with(n, RotationConfig::new(PERIOD))
    }

    fn assert_timer_pairing(c: &Carousel<CountingTimer, RecordingView>) {
        let arms = c.timer().arms.len();
        let cancels = c.timer().cancels;
        if c.is_rotating() {
            assert_eq!(
                cancels,
                arms - 1,
                "live timer: every arm but the first must be preceded by a cancel"
            );
        } else {
            assert_eq!(cancels, arms, "idle timer: arms and cancels must pair off");
        }
    }

    #[test]
    fn start_renders_current_and_arms_one_timer() {
        let mut c = make_carousel(3);
        c.start();

        assert_eq!(c.phase(), Phase::Active);
        assert!(c.is_rotating());
        assert_eq!(c.timer().arms, vec![PERIOD]);
        assert_eq!(c.timer().cancels, 0);
        assert_eq!(c.view().frames.len(), 1);
        assert_eq!(c.view().frames[0].current_index(), 0);
    }

    #[test]
    fn restart_cancels_the_previous_timer_first() {
        let mut c = make_carousel(3);
        c.start();
        c.start();

        assert_eq!(c.timer().arms.len(), 2);
        assert_eq!(c.timer().cancels, 1);
        assert_eq!(c.phase(), Phase::Active);
        assert_timer_pairing(&c);
    }

    #[test]
    fn forward_rotation_wraps_after_last_slide() {
        let mut c = make_carousel(4);
        c.start();

        let mut seen = Vec::new();
        for _ in 0..4 {
            c.advance(Direction::Forward);
            seen.push(c.current_index().unwrap());
        }
        assert_eq!(seen, [1, 2, 3, 0]);
    }

    #[test]
    fn backward_from_first_wraps_to_last() {
        let mut c = make_carousel(3);
        c.start();
        c.advance(Direction::Backward);

        assert_eq!(c.current_index(), Some(2));
    }

    #[test]
    fn interaction_mid_period_defers_next_tick_by_a_full_interval() {
        // With a 5000 ms period: start arms at t=0, and a user move at
        // t=3000 must leave the next tick at t=8000, not t=5000. Observable
        // as cancel-plus-fresh-arm rather than a surviving first arm.
        let mut c = make_carousel(4);
        c.start();
        assert_eq!(c.timer().arms, vec![PERIOD]);

        c.advance(Direction::Forward);
        assert_eq!(c.timer().cancels, 1);
        assert_eq!(c.timer().arms, vec![PERIOD, PERIOD]);
    }

    #[test]
    fn automatic_ticks_also_restart_the_countdown() {
        // A backend delivers ticks as forward moves; each one re-arms, so the
        // countdown is always a whole period regardless of who navigated.
        let mut c = make_carousel(2);
        c.start();
        c.advance(Direction::Forward);
        c.advance(Direction::Forward);

        assert_eq!(c.timer().arms.len(), 3);
        assert_timer_pairing(&c);
    }

    #[test]
    fn empty_set_operations_are_inert_and_leave_active() {
        let mut c = make_carousel(0);
        c.start();
        c.advance(Direction::Forward);
        c.go_to(0);

        assert_eq!(c.phase(), Phase::Active);
        assert_eq!(c.current_index(), None);
        assert!(!c.is_rotating());
        assert!(c.timer().arms.is_empty());
        assert_eq!(c.timer().cancels, 0);
        assert!(
            c.view().frames.is_empty(),
            "no surface write may be attempted without slides"
        );
    }

    #[test]
    fn single_slide_keeps_the_timer_running() {
        let mut c = make_carousel(1);
        c.start();
        c.advance(Direction::Forward);

        assert_eq!(c.current_index(), Some(0), "a lone slide wraps onto itself");
        assert!(c.is_rotating());
        assert_eq!(c.timer().arms.len(), 2, "the no-op tick still re-arms");
        assert_eq!(c.view().frames.len(), 2, "the no-op tick still re-renders");
    }

    #[test]
    fn out_of_range_jump_is_rejected_without_side_effects() {
        let mut c = make_carousel(3);
        c.start();
        c.go_to(7);

        assert_eq!(c.current_index(), Some(0));
        assert_eq!(c.view().frames.len(), 1, "no re-render on rejection");
        assert_eq!(c.timer().arms.len(), 1, "no timer reset on rejection");
    }

    #[test]
    fn stale_indicator_position_after_shrinking_reload_is_rejected() {
        // Five indicators were materialized; a reload shrinks the slides to
        // two while the rail keeps five. Clicking position 4 must bounce.
        let mut c = make_carousel(5);
        c.start();
        c.reload(SlideBinding::new(2, 5));
        c.go_to(4);

        assert_eq!(c.current_index(), Some(0));
        assert_eq!(c.slide_count(), 2);
    }

    #[test]
    fn reload_reclamps_stale_index_to_zero() {
        let mut c = make_carousel(5);
        c.start();
        c.go_to(4);
        c.reload(SlideBinding::new(2, 2));

        assert_eq!(c.current_index(), Some(0));
        let last = c.view().frames.last().unwrap();
        assert_eq!(last.current_index(), 0);
        assert_eq!(last.slide_count(), 2);
        assert!(c.is_rotating(), "reload arms a fresh timer");
        assert_timer_pairing(&c);
    }

    #[test]
    fn reload_keeps_an_index_still_in_range() {
        let mut c = make_carousel(5);
        c.start();
        c.go_to(1);
        c.reload(SlideBinding::new(3, 3));

        assert_eq!(c.current_index(), Some(1));
    }

    #[test]
    fn reload_before_start_activates_rotation() {
        let mut c = make_carousel(0);
        c.reload(SlideBinding::new(3, 3));

        assert_eq!(c.phase(), Phase::Active);
        assert_eq!(c.current_index(), Some(0));
        assert!(c.is_rotating());
        assert_eq!(c.view().frames.len(), 1);
    }

    #[test]
    fn reload_to_empty_cancels_and_goes_degenerate() {
        let mut c = make_carousel(3);
        c.start();
        c.reload(SlideBinding::new(0, 0));

        assert_eq!(c.phase(), Phase::Active);
        assert_eq!(c.current_index(), None);
        assert!(!c.is_rotating());
        assert_eq!(c.timer().cancels, 1);
        assert_eq!(c.timer().arms.len(), 1, "no new timer without slides");
    }

    #[test]
    fn each_reload_supersedes_the_previous() {
        let mut c = make_carousel(4);
        c.start();
        c.reload(SlideBinding::new(4, 4));
        c.reload(SlideBinding::new(2, 2));
        c.reload(SlideBinding::new(6, 6));

        assert_eq!(c.slide_count(), 6);
        assert!(c.is_rotating());
        assert_timer_pairing(&c);
    }

    #[test]
    fn stop_is_idempotent_and_cancels_at_most_once() {
        let mut c = make_carousel(3);
        c.start();
        c.stop();
        let frames_after_first = c.view().frames.len();
        c.stop();

        assert_eq!(c.phase(), Phase::Stopped);
        assert!(!c.is_rotating());
        assert_eq!(c.timer().cancels, 1);
        assert_eq!(
            c.view().frames.len(),
            frames_after_first,
            "stop leaves the last-rendered view untouched"
        );
    }

    #[test]
    fn navigation_while_stopped_moves_view_without_rearming() {
        let mut c = make_carousel(3);
        c.start();
        c.stop();
        c.advance(Direction::Forward);

        assert_eq!(c.current_index(), Some(1));
        assert_eq!(c.phase(), Phase::Stopped);
        assert!(!c.is_rotating());
        assert_eq!(c.timer().arms.len(), 1, "a stopped carousel stays stopped");
        assert_eq!(c.view().frames.len(), 2);
    }

    #[test]
    fn navigation_before_start_renders_without_arming() {
        let mut c = make_carousel(3);
        c.advance(Direction::Forward);

        assert_eq!(c.current_index(), Some(1));
        assert_eq!(c.phase(), Phase::Uninitialized);
        assert!(c.timer().arms.is_empty());
        assert_eq!(c.view().frames.len(), 1);
    }

    #[test]
    fn start_after_stop_resumes_at_the_current_index() {
        // The visibility channel stops when the tab hides and starts when it
        // shows again; position must survive the round trip.
        let mut c = make_carousel(4);
        c.start();
        c.advance(Direction::Forward);
        c.stop();
        c.start();

        assert_eq!(c.current_index(), Some(1));
        assert_eq!(c.phase(), Phase::Active);
        assert!(c.is_rotating());
        assert_timer_pairing(&c);
    }

    #[test]
    fn start_index_is_clamped_into_range() {
        let c = carousel_with(3, RotationConfig::default().with_start_index(9));
        assert_eq!(c.current_index(), Some(2));

        let c = carousel_with(3, RotationConfig::default().with_start_index(1));
        assert_eq!(c.current_index(), Some(1));

        let c = carousel_with(0, RotationConfig::default().with_start_index(4));
        assert_eq!(c.current_index(), None);
    }

    #[test]
    fn timer_calls_stay_paired_across_mixed_sequences() {
        let mut c = make_carousel(4);
        c.start();
        assert_timer_pairing(&c);
        c.advance(Direction::Forward);
        assert_timer_pairing(&c);
        c.go_to(2);
        assert_timer_pairing(&c);
        c.reload(SlideBinding::new(3, 3));
        assert_timer_pairing(&c);
        c.stop();
        assert_timer_pairing(&c);
        c.stop();
        assert_timer_pairing(&c);
        c.start();
        assert_timer_pairing(&c);
        c.start();
        assert_timer_pairing(&c);
        c.reload(SlideBinding::new(0, 0));
        assert_timer_pairing(&c);
        c.advance(Direction::Forward);
        assert_timer_pairing(&c);
        c.start();
        assert_timer_pairing(&c);
    }

    #[test]
    fn index_stays_in_bounds_under_arbitrary_sequences() {
        enum Step {
            Fwd,
            Back,
            Go(usize),
            Re(usize),
        }

        let script = [
            Step::Go(3),
            Step::Back,
            Step::Back,
            Step::Go(9),
            Step::Re(2),
            Step::Fwd,
            Step::Go(1),
            Step::Re(6),
            Step::Back,
            Step::Re(0),
            Step::Fwd,
            Step::Re(3),
            Step::Go(2),
        ];

        let mut c = make_carousel(5);
        c.start();
        for step in script {
            match step {
                Step::Fwd => c.advance(Direction::Forward),
                Step::Back => c.advance(Direction::Backward),
                Step::Go(i) => c.go_to(i),
                Step::Re(n) => c.reload(SlideBinding::new(n, n)),
            }
            match c.current_index() {
                Some(i) => assert!(i < c.slide_count(), "index {i} out of bounds"),
                None => assert_eq!(c.slide_count(), 0),
            }
        }

        for frame in &c.view().frames {
            assert!(
                frame.current_index() < frame.slide_count(),
                "a frame referenced a slide that was never bound"
            );
        }
    }

    #[test]
    fn sink_sees_lifecycle_navigation_and_rejections() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut c = Carousel::new(
            SlideBinding::new(2, 2),
            RotationConfig::default(),
            CountingTimer::default(),
            RecordingView::default(),
        )
        .with_trace_sink(Box::new(SharedSink(Rc::clone(&log))));

        c.start();
        c.advance(Direction::Forward);
        c.go_to(5);
        c.stop();

        let events = log.borrow();
        assert!(events.contains(&Logged::Phase(Phase::Uninitialized, Phase::Active)));
        assert!(events.contains(&Logged::Armed(DEFAULT_INTERVAL)));
        assert!(events.contains(&Logged::Nav { from: 0, to: 1 }));
        assert!(events.contains(&Logged::Rejected(NavRejection::OutOfRange {
            requested: 5,
            slide_count: 2,
        })));
        assert!(events.contains(&Logged::Phase(Phase::Active, Phase::Stopped)));
        assert!(events.contains(&Logged::Cancelled));
    }

    #[test]
    fn rebind_event_carries_the_new_counts() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut c = Carousel::new(
            SlideBinding::new(4, 4),
            RotationConfig::default(),
            CountingTimer::default(),
            RecordingView::default(),
        )
        .with_trace_sink(Box::new(SharedSink(Rc::clone(&log))));

        c.reload(SlideBinding::new(2, 5));

        assert!(
            log.borrow()
                .contains(&Logged::Rebound(SlideBinding::new(2, 5)))
        );
    }
}
