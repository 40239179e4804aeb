use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::animation::frame::FrameLoop;
use crate::animation::{Easing, ScrollTween};
use crate::config;
use crate::dom::{self, Listener};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScrollOptions {
    pub duration_ms: f64,
    pub easing: Easing,
    /// Pixels kept clear above the target, e.g. for a fixed header.
    pub offset: f64,
}

impl Default for SmoothScrollOptions {
    fn default() -> Self {
        Self {
            duration_ms: config::SMOOTH_SCROLL_DURATION_MS,
            easing: Easing::from_css(config::SMOOTH_SCROLL_EASING),
            offset: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScrollTarget {
    /// Element id (or selector).
    Element(String),
    /// Absolute document position.
    Position(f64),
}

/// Animate the window to `target`, replacing any scroll already in flight.
fn scroll_to(target: &ScrollTarget, options: &SmoothScrollOptions, active: &Rc<RefCell<Option<FrameLoop>>>) {
    let start = dom::scroll_y();
    let destination = match target {
        ScrollTarget::Position(y) => *y - options.offset,
        ScrollTarget::Element(id) => {
            let Some(element) = dom::element_by_id(id) else {
                debug!("Smooth scroll target #{} not found", id);
                return;
            };
            element.get_bounding_client_rect().top() + start - options.offset
        }
    };

    if active.borrow().as_ref().is_some_and(FrameLoop::is_running) {
        debug!("Interrupting smooth scroll in flight");
    }
    let mut tween = ScrollTween::new(start, destination, options.duration_ms, options.easing);
    let frames = FrameLoop::start(move |now| {
        let sample = tween.sample(now);
        dom::scroll_to_y(sample.position);
        !sample.done
    });
    // Dropping the previous loop cancels it
    *active.borrow_mut() = frames;
}

/// Smooth scrolling for in-page anchors. Clicks on `a[href^="#"]` anywhere in
/// the document are intercepted; the returned callback scrolls on demand.
#[hook]
pub fn use_smooth_scroll(options: SmoothScrollOptions) -> Callback<ScrollTarget> {
    let active = use_mut_ref(|| None::<FrameLoop>);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |options: &SmoothScrollOptions| {
                let options = *options;
                let listener = Listener::on_document("click", move |event| {
                    let link = event
                        .target()
                        .and_then(|t| t.dyn_into::<Element>().ok())
                        .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten());
                    let Some(link) = link else {
                        return;
                    };
                    event.prevent_default();
                    let id = link
                        .get_attribute("href")
                        .map(|href| href.trim_start_matches('#').to_string())
                        .unwrap_or_default();
                    if !id.is_empty() {
                        scroll_to(&ScrollTarget::Element(id), &options, &active);
                    }
                });
                move || {
                    drop(listener);
                }
            },
            options,
        );
    }

    use_callback(
        move |target: ScrollTarget, options: &SmoothScrollOptions| scroll_to(&target, options, &active),
        options,
    )
}
