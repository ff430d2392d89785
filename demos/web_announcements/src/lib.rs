// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: rotating partner announcements with live feed reload.
//!
//! The page is built entirely from code: a slide container, an indicator
//! rail, prev/next controls, and a strip of demo buttons that pause and
//! resume rotation or swap in a second feed. The second feed is shorter
//! than the first, so swapping while a late slide is showing exercises the
//! reload index reclamp.
//!
//! Build with: `wasm-pack build --target web demos/web_announcements`
//! Then serve `demos/web_announcements/` and open `index.html`.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::vec;
use core::cell::RefCell;
use core::time::Duration;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlElement, console};

use zoetrope_backend_web::{ConsoleSink, HostParts, Phase, RotationConfig, WebCarousel};
use zoetrope_core::slide::{SlideRecord, SlideSet};
use zoetrope_core::trace::{NavRejection, NavigateEvent, TraceSink};
use zoetrope_core::view::SlideBinding;

const CONTAINER_ID: &str = "announcementCarousel";
const ROTATION_MS: u64 = 4000;

const FEED_A: &str = r#"{
  "slides": [
    {
      "id": "welcome",
      "title": "Welcome to the partner portal",
      "link": "/partners/announcements/welcome",
      "badge": "New",
      "date": "2026-02-02",
      "description": "Start with the onboarding checklist to unlock co-selling resources."
    },
    {
      "id": "q1-rebates",
      "title": "Q1 rebate program now live",
      "link": "/partners/announcements/q1-rebates",
      "date": "2026-02-16",
      "tag": "Incentives",
      "description": "Registered deals closed before March 31 qualify automatically."
    },
    {
      "id": "cert-refresh",
      "title": "Certification refresh due by May",
      "link": "/partners/announcements/cert-refresh",
      "date": "2026-03-01",
      "tag": "Enablement"
    },
    {
      "id": "price-list",
      "title": "Updated price list published",
      "link": "/partners/announcements/price-list",
      "date": "2026-03-05",
      "description": "Effective April 1. Existing quotes honor the previous list for 30 days."
    },
    {
      "id": "roadshow",
      "title": "Regional roadshow dates announced",
      "link": "/partners/announcements/roadshow",
      "badge": "Event",
      "date": "2026-03-12"
    }
  ]
}"#;

const FEED_B: &str = r#"[
  {
    "id": "maintenance",
    "title": "Scheduled maintenance window",
    "url": "/partners/announcements/maintenance",
    "date": "2026-03-08",
    "tag": "Ops",
    "description": "Portal read-only Saturday 02:00-04:00 UTC."
  },
  {
    "id": "api-v3",
    "title": "API v3 beta now open",
    "url": "/partners/announcements/api-v3",
    "badge": "Beta",
    "description": "Opt in from developer settings to try the new quoting endpoints."
  },
  {
    "id": "summit",
    "title": "Partner summit registration open",
    "url": "/partners/announcements/summit",
    "date": "2026-04-20"
  }
]"#;

struct DemoState {
    carousel: WebCarousel,
    document: Document,
    slides: HtmlElement,
    rail: HtmlElement,
    showing_b: bool,
}

/// Mirrors rotation events onto the demo status line and forwards them all
/// to the browser console.
struct StatusSink {
    line: HtmlElement,
    console: ConsoleSink,
    current: usize,
    count: usize,
    rotating: bool,
}

impl StatusSink {
    fn new(line: HtmlElement, count: usize) -> Self {
        Self {
            line,
            console: ConsoleSink,
            current: 0,
            count,
            rotating: false,
        }
    }

    fn render(&self) {
        let text = if self.count == 0 {
            format!("no announcements | {}", self.mode())
        } else {
            format!(
                "announcement {} / {} | {}",
                self.current + 1,
                self.count,
                self.mode()
            )
        };
        self.line.set_text_content(Some(&text));
    }

    fn mode(&self) -> &'static str {
        if self.rotating { "rotating" } else { "paused" }
    }
}

impl TraceSink for StatusSink {
    fn on_phase_change(&mut self, from: Phase, to: Phase) {
        self.console.on_phase_change(from, to);
    }

    fn on_navigate(&mut self, e: &NavigateEvent) {
        self.console.on_navigate(e);
        self.current = e.to;
        self.count = e.slide_count;
        self.render();
    }

    fn on_navigation_rejected(&mut self, e: &NavRejection) {
        self.console.on_navigation_rejected(e);
    }

    fn on_timer_armed(&mut self, period: Duration) {
        self.console.on_timer_armed(period);
        self.rotating = true;
        self.render();
    }

    fn on_timer_cancelled(&mut self) {
        self.console.on_timer_cancelled();
        self.rotating = false;
        self.render();
    }

    fn on_rebind(&mut self, binding: SlideBinding) {
        self.console.on_rebind(binding);
        self.count = binding.slide_count();
        if self.current >= binding.slide_count() {
            self.current = 0;
        }
        self.render();
    }
}

/// Entry point for the announcements demo.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let document = web_sys::window()
        .expect("window")
        .document()
        .expect("document");

    let shell = create_shell(&document)?;
    document.body().expect("body").append_child(&shell)?;

    let heading = element(&document, "h1")?;
    heading.set_text_content(Some("Partner announcements"));
    style(
        &heading,
        "margin: 0; font: 600 20px/1.2 system-ui, sans-serif; color: #10293f;",
    )?;
    shell.append_child(&heading)?;

    let wrapper = element(&document, "div")?;
    wrapper.set_class_name("carousel-wrapper");
    style(&wrapper, "position: relative; display: grid; gap: 10px;")?;
    shell.append_child(&wrapper)?;

    let slides = element(&document, "div")?;
    slides.set_id(CONTAINER_ID);
    style(
        &slides,
        "min-height: 170px; border-radius: 14px; background: #ffffff; border: 1px solid rgba(22,44,65,0.15); overflow: hidden;",
    )?;
    wrapper.append_child(&slides)?;

    let rail = element(&document, "div")?;
    rail.set_class_name("carousel-indicators");
    style(&rail, "display: flex; gap: 8px; justify-content: center;")?;
    wrapper.append_child(&rail)?;

    let prev = nav_button(&document, "carousel-nav prev", "\u{2039}", "left: 10px;")?;
    prev.set_attribute("aria-label", "Previous announcement")?;
    wrapper.append_child(&prev)?;
    let next = nav_button(&document, "carousel-nav next", "\u{203a}", "right: 10px;")?;
    next.set_attribute("aria-label", "Next announcement")?;
    wrapper.append_child(&next)?;

    let feed = parse_feed(FEED_A);
    populate(&document, &slides, &rail, &feed)?;

    let controls = element(&document, "div")?;
    style(&controls, "display: flex; gap: 10px; align-items: center;")?;
    let pause = demo_button(&document, "Pause")?;
    let resume = demo_button(&document, "Resume")?;
    let swap = demo_button(&document, "Swap feed")?;
    controls.append_child(&pause)?;
    controls.append_child(&resume)?;
    controls.append_child(&swap)?;
    shell.append_child(&controls)?;

    let status = element(&document, "pre")?;
    style(
        &status,
        "margin: 0; padding: 6px 8px; border-radius: 8px; background: rgba(8,16,32,0.88); color: #d7edff; font: 12px/1.2 ui-monospace, SFMono-Regular, Menlo, monospace;",
    )?;
    shell.append_child(&status)?;

    let parts = HostParts::discover(&document, CONTAINER_ID)?;
    let sink = StatusSink::new(status, feed.len());
    let carousel = WebCarousel::mount_with_sink(
        parts,
        RotationConfig::new(Duration::from_millis(ROTATION_MS)),
        Box::new(sink),
    )?;
    carousel.start();

    let state = Rc::new(RefCell::new(DemoState {
        carousel,
        document: document.clone(),
        slides,
        rail,
        showing_b: false,
    }));
    bind_controls(&state, &pause, &resume, &swap)?;

    Ok(())
}

fn bind_controls(
    state: &Rc<RefCell<DemoState>>,
    pause: &HtmlElement,
    resume: &HtmlElement,
    swap: &HtmlElement,
) -> Result<(), JsValue> {
    let pause_state = Rc::clone(state);
    let pause_cb = Closure::wrap(Box::new(move |_event: Event| {
        pause_state.borrow().carousel.stop();
    }) as Box<dyn FnMut(_)>);
    pause.add_event_listener_with_callback("click", pause_cb.as_ref().unchecked_ref())?;
    pause_cb.forget();

    let resume_state = Rc::clone(state);
    let resume_cb = Closure::wrap(Box::new(move |_event: Event| {
        resume_state.borrow().carousel.start();
    }) as Box<dyn FnMut(_)>);
    resume.add_event_listener_with_callback("click", resume_cb.as_ref().unchecked_ref())?;
    resume_cb.forget();

    let swap_state = Rc::clone(state);
    let swap_cb = Closure::wrap(Box::new(move |_event: Event| {
        let mut s = swap_state.borrow_mut();
        s.showing_b = !s.showing_b;
        let feed = parse_feed(if s.showing_b { FEED_B } else { FEED_A });
        let document = s.document.clone();
        let slides = s.slides.clone();
        let rail = s.rail.clone();
        if populate(&document, &slides, &rail, &feed).is_ok() {
            s.carousel.reload();
        }
    }) as Box<dyn FnMut(_)>);
    swap.add_event_listener_with_callback("click", swap_cb.as_ref().unchecked_ref())?;
    swap_cb.forget();

    Ok(())
}

fn parse_feed(json: &str) -> SlideSet {
    serde_json::from_str(json).unwrap_or_else(|err| {
        console::warn_1(&JsValue::from_str(&format!(
            "announcements: feed parse failed, using fallback: {err}"
        )));
        fallback_feed()
    })
}

fn fallback_feed() -> SlideSet {
    SlideSet::from_records(vec![SlideRecord {
        id: "fallback".into(),
        title: "Announcements are unavailable".into(),
        link: "/partners".into(),
        description: Some("Check back in a little while.".into()),
        ..SlideRecord::default()
    }])
}

fn populate(
    document: &Document,
    slides: &HtmlElement,
    rail: &HtmlElement,
    feed: &SlideSet,
) -> Result<(), JsValue> {
    slides.set_inner_html("");
    rail.set_inner_html("");
    for record in feed {
        slides.append_child(&build_slide(document, record)?.into())?;
    }
    for position in 0..feed.len() {
        let dot = element(document, "button")?;
        dot.set_class_name("carousel-indicator");
        dot.set_attribute("aria-label", &format!("Go to announcement {}", position + 1))?;
        style(
            &dot,
            "width: 10px; height: 10px; border-radius: 999px; border: 0; padding: 0; background: rgba(16,41,63,0.3); cursor: pointer;",
        )?;
        rail.append_child(&dot)?;
    }
    Ok(())
}

fn build_slide(document: &Document, record: &SlideRecord) -> Result<HtmlElement, JsValue> {
    let slide = element(document, "article")?;
    slide.set_class_name("carousel-slide");
    style(
        &slide,
        "display: none; flex-direction: column; gap: 6px; padding: 18px 20px; font: 14px/1.45 system-ui, sans-serif; color: #1c3147;",
    )?;

    let top = element(document, "div")?;
    style(&top, "display: flex; gap: 8px; align-items: center;")?;
    if let Some(badge) = &record.badge {
        let chip = element(document, "span")?;
        chip.set_text_content(Some(badge));
        style(
            &chip,
            "padding: 2px 8px; border-radius: 999px; background: #0f5d71; color: #eff8ff; font-size: 11px; font-weight: 600;",
        )?;
        top.append_child(&chip)?;
    }
    if let Some(tag) = &record.tag {
        let chip = element(document, "span")?;
        chip.set_text_content(Some(tag));
        style(
            &chip,
            "padding: 2px 8px; border-radius: 999px; background: rgba(16,41,63,0.12); color: #29415c; font-size: 11px; font-weight: 600;",
        )?;
        top.append_child(&chip)?;
    }
    if let Some(date) = &record.date {
        let when = element(document, "span")?;
        when.set_text_content(Some(date));
        style(&when, "color: #5b7288; font-size: 12px;")?;
        top.append_child(&when)?;
    }
    slide.append_child(&top)?;

    let title = element(document, "a")?;
    title.set_text_content(Some(&record.title));
    title.set_attribute("href", &record.link)?;
    style(
        &title,
        "font-size: 17px; font-weight: 600; color: #10293f; text-decoration: none;",
    )?;
    slide.append_child(&title)?;

    if let Some(description) = &record.description {
        let body = element(document, "p")?;
        body.set_text_content(Some(description));
        style(&body, "margin: 0; color: #29415c;")?;
        slide.append_child(&body)?;
    }

    Ok(slide)
}

fn nav_button(
    document: &Document,
    classes: &str,
    label: &str,
    side: &str,
) -> Result<HtmlElement, JsValue> {
    let button = element(document, "button")?;
    button.set_class_name(classes);
    button.set_text_content(Some(label));
    style(
        &button,
        &format!(
            "position: absolute; top: 66px; {side} z-index: 1; border: 0; border-radius: 999px; width: 34px; height: 34px; background: rgba(16,41,63,0.55); color: #ffffff; font-size: 20px; cursor: pointer;"
        ),
    )?;
    Ok(button)
}

fn demo_button(document: &Document, label: &str) -> Result<HtmlElement, JsValue> {
    let button = element(document, "button")?;
    button.set_text_content(Some(label));
    style(
        &button,
        "border: 0; border-radius: 999px; padding: 8px 16px; background: #0f5d71; color: #eff8ff; font-weight: 600; cursor: pointer;",
    )?;
    Ok(button)
}

fn create_shell(document: &Document) -> Result<HtmlElement, JsValue> {
    let shell = element(document, "section")?;
    style(
        &shell,
        "width: 640px; margin: 40px auto; padding: 24px 28px; border-radius: 20px; background: rgba(255,255,255,0.9); border: 1px solid rgba(22,44,65,0.12); box-shadow: 0 24px 70px rgba(26,43,64,0.18); display: grid; gap: 14px;",
    )?;
    Ok(shell)
}

fn element(document: &Document, tag: &str) -> Result<HtmlElement, JsValue> {
    Ok(document.create_element(tag)?.unchecked_into())
}

fn style(el: &web_sys::Element, css: &str) -> Result<(), JsValue> {
    el.set_attribute("style", css)
}
