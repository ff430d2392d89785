// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser host wiring.
//!
//! [`WebCarousel`] assembles the full stack for one carousel in a page: a
//! [`Carousel`] controller over an [`IntervalTimer`] and a [`DomSlideView`],
//! plus the DOM listeners that feed user interaction into it. Every listener
//! registration and the underlying interval are removed when the handle
//! drops.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::string::ToString as _;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use kurbo::Point;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent, TouchEvent};

use zoetrope_core::carousel::{Carousel, Direction, Phase, RotationConfig};
use zoetrope_core::gesture::SwipeTracker;
use zoetrope_core::trace::{NoopSink, TraceSink};

use crate::dom::DomSlideView;
use crate::interval::IntervalTimer;

/// Selector for the indicator rail, looked up inside the carousel wrapper.
const INDICATOR_RAIL_SELECTOR: &str = ".carousel-indicators";
/// Selector for the backward control.
const PREV_SELECTOR: &str = ".carousel-nav.prev";
/// Selector for the forward control.
const NEXT_SELECTOR: &str = ".carousel-nav.next";

type DomCarousel = Carousel<IntervalTimer, DomSlideView>;

/// Why a carousel could not be mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountError {
    /// No element with the given id exists in the document.
    MissingContainer(String),
    /// The global `window`/`document` pair is unavailable, so this is not
    /// running in a browsing context.
    NoDocument,
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingContainer(id) => {
                write!(f, "carousel container #{id} not found in document")
            }
            Self::NoDocument => write!(f, "no browser document available"),
        }
    }
}

impl core::error::Error for MountError {}

impl From<MountError> for JsValue {
    fn from(error: MountError) -> Self {
        Self::from_str(&error.to_string())
    }
}

/// Resolved DOM structure a carousel mounts onto.
///
/// Only the slide container is required. Hosts whose markup lacks a rail or
/// the prev/next controls still rotate automatically and still answer
/// keyboard and touch input.
pub struct HostParts {
    /// Container whose child elements are the slides.
    pub slides: Element,
    /// Container whose child elements are the indicator dots.
    pub indicators: Option<Element>,
    /// Control that navigates one slide backward.
    pub prev: Option<HtmlElement>,
    /// Control that navigates one slide forward.
    pub next: Option<HtmlElement>,
}

impl fmt::Debug for HostParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostParts")
            .field("slides", &"Element")
            .field("indicators", &self.indicators.is_some())
            .field("prev", &self.prev.is_some())
            .field("next", &self.next.is_some())
            .finish()
    }
}

impl HostParts {
    /// Resolves the conventional markup: the slide container by id, then the
    /// indicator rail and prev/next controls inside the same parent.
    ///
    /// The slide container is mandatory; everything else degrades to absent.
    pub fn discover(document: &Document, container_id: &str) -> Result<Self, MountError> {
        let slides = document
            .get_element_by_id(container_id)
            .ok_or_else(|| MountError::MissingContainer(container_id.into()))?;
        let wrapper = slides.parent_element();
        let query = |selector: &str| {
            wrapper
                .as_ref()
                .and_then(|w| w.query_selector(selector).ok().flatten())
        };
        let indicators = query(INDICATOR_RAIL_SELECTOR);
        let prev = query(PREV_SELECTOR).map(Element::unchecked_into);
        let next = query(NEXT_SELECTOR).map(Element::unchecked_into);
        Ok(Self {
            slides,
            indicators,
            prev,
            next,
        })
    }
}

/// One registered DOM listener, removed again on drop.
struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl ListenerGuard {
    fn attach(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// A fully wired browser carousel.
///
/// Owns the shared controller together with every listener registration.
/// The periodic tick holds only a weak reference to the controller, so
/// dropping this handle releases the whole assembly: listeners are
/// unhooked and the interval is cleared.
pub struct WebCarousel {
    carousel: Rc<RefCell<DomCarousel>>,
    swipe: Rc<RefCell<SwipeTracker>>,
    parts: HostParts,
    document: Document,
    listeners: Vec<ListenerGuard>,
    /// Per-dot click registrations, rebuilt on [`reload`](Self::reload).
    indicator_listeners: Vec<ListenerGuard>,
}

impl WebCarousel {
    /// Discovers [`HostParts`] by container id and mounts onto them.
    pub fn mount_by_id(container_id: &str, config: RotationConfig) -> Result<Self, MountError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(MountError::NoDocument)?;
        let parts = HostParts::discover(&document, container_id)?;
        Self::mount(parts, config)
    }

    /// Mounts a carousel onto already resolved parts.
    pub fn mount(parts: HostParts, config: RotationConfig) -> Result<Self, MountError> {
        Self::mount_with_sink(parts, config, Box::new(NoopSink))
    }

    /// Mounts with a trace sink receiving every rotation event.
    pub fn mount_with_sink(
        parts: HostParts,
        config: RotationConfig,
        sink: Box<dyn TraceSink>,
    ) -> Result<Self, MountError> {
        let document = parts.slides.owner_document().ok_or(MountError::NoDocument)?;

        let view = DomSlideView::bind(&parts.slides, parts.indicators.as_ref());
        let binding = view.binding();
        let timer = IntervalTimer::new();
        let ticker = timer.clone();
        let carousel = Rc::new(RefCell::new(
            Carousel::new(binding, config, timer, view).with_trace_sink(sink),
        ));

        // Weak from the tick back to the controller, otherwise the closure
        // stored inside the timer would keep the controller alive forever.
        let tick_target = Rc::downgrade(&carousel);
        ticker.connect(move || {
            if let Some(carousel) = tick_target.upgrade() {
                carousel.borrow_mut().advance(Direction::Forward);
            }
        });

        let mut mounted = Self {
            carousel,
            swipe: Rc::new(RefCell::new(SwipeTracker::new())),
            parts,
            document,
            listeners: Vec::new(),
            indicator_listeners: Vec::new(),
        };
        mounted.attach_channels();
        mounted.attach_indicators();
        Ok(mounted)
    }

    /// Starts automatic rotation and renders the current slide.
    pub fn start(&self) {
        self.carousel.borrow_mut().start();
    }

    /// Stops automatic rotation, leaving the current slide visible.
    pub fn stop(&self) {
        self.carousel.borrow_mut().stop();
    }

    /// Navigates one slide in `direction`.
    pub fn advance(&self, direction: Direction) {
        self.carousel.borrow_mut().advance(direction);
    }

    /// Jumps directly to `index`.
    pub fn go_to(&self, index: usize) {
        self.carousel.borrow_mut().go_to(index);
    }

    /// Re-captures the container children and restarts rotation over them.
    ///
    /// Call after replacing the slide markup in place. The containers
    /// themselves must be the same nodes they were at mount; only their
    /// children may change. Indicator clicks are re-wired to the new dots.
    pub fn reload(&mut self) {
        {
            let mut carousel = self.carousel.borrow_mut();
            carousel
                .view_mut()
                .rebind(&self.parts.slides, self.parts.indicators.as_ref());
            let binding = carousel.view().binding();
            carousel.reload(binding);
        }
        self.attach_indicators();
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.carousel.borrow().phase()
    }

    /// Index of the visible slide, or `None` while no slides are bound.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.carousel.borrow().current_index()
    }

    /// Number of bound slides.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.carousel.borrow().slide_count()
    }

    /// Whether an automatic rotation timer is currently live.
    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.carousel.borrow().is_rotating()
    }

    fn attach_channels(&mut self) {
        if let Some(prev) = &self.parts.prev {
            let carousel = Rc::clone(&self.carousel);
            self.listeners.push(ListenerGuard::attach(
                prev.as_ref(),
                "click",
                move |_| carousel.borrow_mut().advance(Direction::Backward),
            ));
        }
        if let Some(next) = &self.parts.next {
            let carousel = Rc::clone(&self.carousel);
            self.listeners.push(ListenerGuard::attach(
                next.as_ref(),
                "click",
                move |_| carousel.borrow_mut().advance(Direction::Forward),
            ));
        }

        // Arrow keys act on the whole page, not just the container.
        {
            let carousel = Rc::clone(&self.carousel);
            self.listeners.push(ListenerGuard::attach(
                self.document.as_ref(),
                "keydown",
                move |event| {
                    let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    match key.key().as_str() {
                        "ArrowLeft" => carousel.borrow_mut().advance(Direction::Backward),
                        "ArrowRight" => carousel.borrow_mut().advance(Direction::Forward),
                        _ => {}
                    }
                },
            ));
        }

        // Touch drags accumulate on the slide container and resolve to the
        // nearest slide on release.
        {
            let swipe = Rc::clone(&self.swipe);
            let carousel = Rc::clone(&self.carousel);
            let container = self.parts.slides.clone();
            self.listeners.push(ListenerGuard::attach(
                self.parts.slides.as_ref(),
                "touchstart",
                move |event| {
                    let Some(touch) = first_touch(&event) else {
                        return;
                    };
                    let width = f64::from(container.client_width());
                    let index = carousel.borrow().current_index().unwrap_or(0);
                    swipe.borrow_mut().begin(touch, index as f64 * width);
                },
            ));
        }
        {
            let swipe = Rc::clone(&self.swipe);
            self.listeners.push(ListenerGuard::attach(
                self.parts.slides.as_ref(),
                "touchmove",
                move |event| {
                    if let Some(touch) = first_touch(&event) {
                        let _ = swipe.borrow_mut().drag_to(touch);
                    }
                },
            ));
        }
        {
            let swipe = Rc::clone(&self.swipe);
            let carousel = Rc::clone(&self.carousel);
            let container = self.parts.slides.clone();
            self.listeners.push(ListenerGuard::attach(
                self.parts.slides.as_ref(),
                "touchend",
                move |_| {
                    let width = f64::from(container.client_width());
                    let count = carousel.borrow().slide_count();
                    if let Some(target) = swipe.borrow_mut().release(width, count) {
                        carousel.borrow_mut().go_to(target);
                    }
                },
            ));
        }
        {
            let swipe = Rc::clone(&self.swipe);
            self.listeners.push(ListenerGuard::attach(
                self.parts.slides.as_ref(),
                "touchcancel",
                move |_| swipe.borrow_mut().abort(),
            ));
        }

        // Rotation pauses while the tab is hidden and resumes on return.
        {
            let carousel = Rc::clone(&self.carousel);
            let document = self.document.clone();
            self.listeners.push(ListenerGuard::attach(
                self.document.as_ref(),
                "visibilitychange",
                move |_| {
                    if document.hidden() {
                        carousel.borrow_mut().stop();
                    } else {
                        carousel.borrow_mut().start();
                    }
                },
            ));
        }
    }

    fn attach_indicators(&mut self) {
        self.indicator_listeners.clear();
        let Some(rail) = &self.parts.indicators else {
            return;
        };
        let children = rail.children();
        let dots = (0..children.length()).filter_map(|index| children.item(index));
        for (position, dot) in dots.enumerate() {
            let carousel = Rc::clone(&self.carousel);
            self.indicator_listeners.push(ListenerGuard::attach(
                dot.as_ref(),
                "click",
                move |_| carousel.borrow_mut().go_to(position),
            ));
        }
    }
}

impl fmt::Debug for WebCarousel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("WebCarousel");
        if let Ok(carousel) = self.carousel.try_borrow() {
            debug
                .field("phase", &carousel.phase())
                .field("current", &carousel.current_index())
                .field("slides", &carousel.slide_count());
        }
        debug
            .field(
                "listeners",
                &(self.listeners.len() + self.indicator_listeners.len()),
            )
            .finish_non_exhaustive()
    }
}

fn first_touch(event: &Event) -> Option<Point> {
    let touches = event.dyn_ref::<TouchEvent>()?.touches();
    let touch = touches.get(0)?;
    Some(Point::new(
        f64::from(touch.client_x()),
        f64::from(touch.client_y()),
    ))
}
