// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON export for zoetrope diagnostics.
//!
//! This crate provides [`TraceSink`](zoetrope_core::trace::TraceSink)
//! implementations for development and tests:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecordingSink`]: shared typed event buffer for assertions.
//! - [`export::export`]: JSON array dump of recorded events.

pub mod export;
pub mod pretty;
pub mod recorder;
