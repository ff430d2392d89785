// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for zoetrope.
//!
//! This crate pairs the host-neutral [`zoetrope_core`] controller with
//! browser plumbing:
//!
//! - [`IntervalTimer`]: rotation timing over `setInterval`
//! - [`DomSlideView`]: slide visibility and indicator highlight written to
//!   bound DOM elements
//! - [`WebCarousel`] / [`HostParts`]: a fully wired mount with prev/next,
//!   indicator, keyboard, touch, and tab-visibility channels
//! - [`ConsoleSink`]: rotation diagnostics on the browser console

#![no_std]

extern crate alloc;

mod console;
mod dom;
mod host;
mod interval;

pub use console::ConsoleSink;
pub use dom::DomSlideView;
pub use host::{HostParts, MountError, WebCarousel};
pub use interval::IntervalTimer;
pub use zoetrope_core::carousel::{DEFAULT_INTERVAL, Direction, Phase, RotationConfig};
