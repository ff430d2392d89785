// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser-console diagnostics.

use alloc::format;
use core::time::Duration;

use wasm_bindgen::JsValue;
use web_sys::console;

use zoetrope_core::carousel::Phase;
use zoetrope_core::trace::{NavRejection, NavigateEvent, TraceSink};
use zoetrope_core::view::SlideBinding;

/// A [`TraceSink`] that writes every rotation event to the browser console.
///
/// Rejections go to `console.warn`, the rest to `console.log`. For quiet
/// production mounts, leave the default [`NoopSink`] in place instead.
///
/// [`NoopSink`]: zoetrope_core::trace::NoopSink
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

fn log(message: &str) {
    console::log_1(&JsValue::from_str(message));
}

fn warn(message: &str) {
    console::warn_1(&JsValue::from_str(message));
}

impl TraceSink for ConsoleSink {
    fn on_phase_change(&mut self, from: Phase, to: Phase) {
        log(&format!("carousel: phase {from:?} -> {to:?}"));
    }

    fn on_navigate(&mut self, event: &NavigateEvent) {
        log(&format!(
            "carousel: slide {} -> {} of {}",
            event.from, event.to, event.slide_count
        ));
    }

    fn on_navigation_rejected(&mut self, rejection: &NavRejection) {
        match rejection {
            NavRejection::EmptySlideSet => {
                warn("carousel: navigation ignored, no slides bound");
            }
            NavRejection::OutOfRange {
                requested,
                slide_count,
            } => {
                warn(&format!(
                    "carousel: slide {requested} out of range ({slide_count} slides)"
                ));
            }
        }
    }

    fn on_timer_armed(&mut self, period: Duration) {
        log(&format!("carousel: rotation armed every {}ms", period.as_millis()));
    }

    fn on_timer_cancelled(&mut self) {
        log("carousel: rotation cancelled");
    }

    fn on_rebind(&mut self, binding: SlideBinding) {
        log(&format!(
            "carousel: rebound to {} slides, {} indicators",
            binding.slide_count(),
            binding.indicator_count()
        ));
    }
}
