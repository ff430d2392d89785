// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per
//! rotation event to a [`Write`](std::io::Write) destination (default:
//! stderr).

use std::io::Write;
use std::time::Duration;

use zoetrope_core::carousel::Phase;
use zoetrope_core::trace::{NavRejection, NavigateEvent, TraceSink};
use zoetrope_core::view::SlideBinding;

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Uninitialized => "uninitialized",
        Phase::Active => "active",
        Phase::Stopped => "stopped",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_phase_change(&mut self, from: Phase, to: Phase) {
        let _ = writeln!(
            self.writer,
            "[phase] {} -> {}",
            phase_name(from),
            phase_name(to),
        );
    }

    fn on_navigate(&mut self, e: &NavigateEvent) {
        let _ = writeln!(
            self.writer,
            "[nav] {} -> {} ({} slides)",
            e.from, e.to, e.slide_count,
        );
    }

    fn on_navigation_rejected(&mut self, e: &NavRejection) {
        match e {
            NavRejection::EmptySlideSet => {
                let _ = writeln!(self.writer, "[reject] empty slide set");
            }
            NavRejection::OutOfRange {
                requested,
                slide_count,
            } => {
                let _ = writeln!(
                    self.writer,
                    "[reject] index {requested} out of range ({slide_count} slides)",
                );
            }
        }
    }

    fn on_timer_armed(&mut self, period: Duration) {
        let _ = writeln!(self.writer, "[timer] armed {}ms", period.as_millis());
    }

    fn on_timer_cancelled(&mut self) {
        let _ = writeln!(self.writer, "[timer] cancelled");
    }

    fn on_rebind(&mut self, binding: SlideBinding) {
        let _ = writeln!(
            self.writer,
            "[rebind] {} slides, {} indicators",
            binding.slide_count(),
            binding.indicator_count(),
        );
    }
}
