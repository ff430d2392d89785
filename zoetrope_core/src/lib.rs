// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel rotation logic with host-neutral ports.
//!
//! `zoetrope_core` owns the data model and rotation contract of a slide
//! carousel: one current index, one lifecycle phase, and at most one live
//! repeating timer per carousel. It is `no_std` compatible (with `alloc`) and
//! has no host dependencies; platform backends supply the timer, the surface,
//! and the event sources.
//!
//! # Architecture
//!
//! Every state change flows through one controller and back out as a complete
//! derived view:
//!
//! ```text
//!   slide data ──► host materializes markup ──► SlideBinding (counts)
//!                                                       │
//!   user input ──► interaction adapters ──┐             ▼
//!   timer tick ──► advance(Forward) ──────┴──► Carousel (RotationState)
//!                                                       │
//!                              ┌────────────────────────┤
//!                              ▼                        ▼
//!                  ViewFrame ──► SlideView     period ──► RotationTimer
//!                  (total, derived)            (cancel before arm, ≤ 1 live)
//! ```
//!
//! **[`slide`]** — [`SlideRecord`](slide::SlideRecord) /
//! [`SlideSet`](slide::SlideSet) data model, replaced wholesale on reload.
//!
//! **[`carousel`]** — The rotation state machine: start/stop, wrapping
//! navigation, direct jumps, rebinding, and the single-timer discipline.
//!
//! **[`timer`]** — The [`RotationTimer`](timer::RotationTimer) port that
//! platform backends implement over their repeating-timer facility.
//!
//! **[`view`]** — The derived-view contract: captured element counts,
//! total [`ViewFrame`](view::ViewFrame)s, and the
//! [`SlideView`](view::SlideView) port. The surface is never read back.
//!
//! **[`gesture`]** — Touch-drag accumulation and release targeting.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! lifecycle, navigation, and timer diagnostics.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `serde` (disabled by default): Derives (de)serialization for the slide
//!   data model, accepting the feed shapes found in deployed hosts.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod carousel;
pub mod gesture;
pub mod slide;
pub mod timer;
pub mod trace;
pub mod view;
