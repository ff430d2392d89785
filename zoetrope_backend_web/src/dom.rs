// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM projection of rotation state.

use alloc::vec::Vec;
use core::fmt;

use wasm_bindgen::JsCast as _;
use web_sys::{Element, HtmlElement};

use zoetrope_core::view::{SlideBinding, SlideView, ViewFrame};

/// Class toggled onto the indicator matching the current slide.
const ACTIVE_CLASS: &str = "active";

/// A [`SlideView`] that projects each frame onto bound DOM elements.
///
/// Binding captures the child elements of the slide container (and of the
/// indicator rail, when one exists) once; every [`apply`](SlideView::apply)
/// rewrites visibility, `aria-hidden`, and the indicator highlight from the
/// frame alone. Nothing is ever read back from the DOM.
pub struct DomSlideView {
    slides: Vec<HtmlElement>,
    indicators: Vec<HtmlElement>,
}

impl fmt::Debug for DomSlideView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomSlideView")
            .field("slides", &self.slides.len())
            .field("indicators", &self.indicators.len())
            .finish()
    }
}

impl DomSlideView {
    /// Captures the current children of the given containers.
    #[must_use]
    pub fn bind(slides_container: &Element, indicator_rail: Option<&Element>) -> Self {
        Self {
            slides: child_elements(slides_container),
            indicators: indicator_rail.map(child_elements).unwrap_or_default(),
        }
    }

    /// Re-captures container children after the host replaced the markup.
    pub fn rebind(&mut self, slides_container: &Element, indicator_rail: Option<&Element>) {
        *self = Self::bind(slides_container, indicator_rail);
    }

    /// The counts a controller should be driving this view with.
    #[must_use]
    pub fn binding(&self) -> SlideBinding {
        SlideBinding::new(self.slides.len(), self.indicators.len())
    }
}

impl SlideView for DomSlideView {
    fn apply(&mut self, frame: &ViewFrame) {
        // 1. Slide visibility, mirrored onto `aria-hidden`.
        for (index, slide) in self.slides.iter().enumerate() {
            let shown = frame.slide_visible(index);
            let _ = slide
                .style()
                .set_property("display", if shown { "flex" } else { "none" });
            let _ = slide.set_attribute("aria-hidden", if shown { "false" } else { "true" });
        }

        // 2. Indicator highlight.
        for (position, indicator) in self.indicators.iter().enumerate() {
            let _ = indicator
                .class_list()
                .toggle_with_force(ACTIVE_CLASS, frame.indicator_active(position));
        }
    }
}

fn child_elements(container: &Element) -> Vec<HtmlElement> {
    let children = container.children();
    (0..children.length())
        .filter_map(|index| children.item(index))
        .map(Element::unchecked_into)
        .collect()
}
