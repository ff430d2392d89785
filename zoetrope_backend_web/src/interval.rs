// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setInterval` rotation timing.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};
use core::fmt;
use core::time::Duration;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use zoetrope_core::timer::RotationTimer;

#[wasm_bindgen]
extern "C" {
    /// Direct global binding so (re)arming skips the `web_sys::Window`
    /// lookup and unwrap on every cycle.
    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(callback: &JsValue, period_ms: i32) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    fn clear_interval(id: i32);
}

struct IntervalInner {
    /// The tick callback, wrapped once at [`IntervalTimer::connect`] and
    /// re-registered on every arm.
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
    /// Live `setInterval` registration, if any.
    interval_id: Cell<Option<i32>>,
}

impl Drop for IntervalInner {
    fn drop(&mut self) {
        if let Some(id) = self.interval_id.take() {
            clear_interval(id);
        }
    }
}

/// A [`RotationTimer`] backed by the browser's `setInterval`.
///
/// Handles are cheap clones of one shared registration, so a host can keep
/// a handle for [`connect`](Self::connect) while the carousel owns another
/// for arming. The underlying interval is cleared when the last handle
/// drops.
#[derive(Clone)]
pub struct IntervalTimer {
    inner: Rc<IntervalInner>,
}

impl IntervalTimer {
    /// Creates a timer with no callback and no live interval.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(IntervalInner {
                tick: RefCell::new(None),
                interval_id: Cell::new(None),
            }),
        }
    }

    /// Installs the tick callback.
    ///
    /// Must be called before the first arm; arming an unconnected timer
    /// registers nothing. Reconnecting clears any live interval, since the
    /// registration holds the closure being replaced.
    pub fn connect(&self, tick: impl FnMut() + 'static) {
        self.clear();
        *self.inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(tick) as Box<dyn FnMut()>));
    }

    /// Whether a `setInterval` registration is currently live.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.inner.interval_id.get().is_some()
    }

    fn clear(&self) {
        if let Some(id) = self.inner.interval_id.take() {
            clear_interval(id);
        }
    }
}

impl RotationTimer for IntervalTimer {
    fn arm(&mut self, period: Duration) {
        self.clear();
        let tick = self.inner.tick.borrow();
        let Some(tick) = tick.as_ref() else {
            debug_assert!(false, "IntervalTimer armed before connect");
            return;
        };
        let period_ms = i32::try_from(period.as_millis()).unwrap_or(i32::MAX);
        let id = set_interval(tick.as_ref().unchecked_ref(), period_ms);
        self.inner.interval_id.set(Some(id));
    }

    fn cancel(&mut self) {
        self.clear();
    }
}

impl Default for IntervalTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IntervalTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalTimer")
            .field("connected", &self.inner.tick.borrow().is_some())
            .field("armed", &self.is_armed())
            .finish()
    }
}
