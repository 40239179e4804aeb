use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::animation::observer::{VisibilityWatch, WatchControl};
use crate::animation::{ParallaxConfig, Point};
use crate::config::PARALLAX_ROOT_MARGIN;
use crate::dom::{self, Listener};

pub struct Parallax {
    pub node_ref: NodeRef,
    /// CSS transform for the current scroll position.
    pub transform: String,
}

/// Scroll-linked offset, tracked only while the element is near the viewport.
#[hook]
pub fn use_parallax(config: ParallaxConfig) -> Parallax {
    let node_ref = use_node_ref();
    let position = use_state_eq(|| Point::ORIGIN);
    let in_viewport = use_state_eq(|| false);

    // Viewport gate
    {
        let in_viewport = in_viewport.clone();
        use_effect_with_deps(
            move |node_ref: &NodeRef| {
                let watch = node_ref.cast::<Element>().and_then(|element| {
                    VisibilityWatch::new(&element, None, Some(PARALLAX_ROOT_MARGIN), move |samples| {
                        if let Some(latest) = samples.last() {
                            in_viewport.set(latest.is_intersecting);
                        }
                        WatchControl::Continue
                    })
                });
                move || drop(watch)
            },
            node_ref.clone(),
        );
    }

    // Scroll tracking while visible
    {
        let position = position.clone();
        let node_ref = node_ref.clone();
        use_effect_with_deps(
            move |&(config, visible): &(ParallaxConfig, bool)| {
                let listener = if visible {
                    // Initial calculation
                    if let Some(offset) = measure(&node_ref, &config) {
                        position.set(offset);
                    }
                    Listener::on_window("scroll", move |_| {
                        if let Some(offset) = measure(&node_ref, &config) {
                            position.set(offset);
                        }
                    })
                } else {
                    None
                };
                move || drop(listener)
            },
            (config, *in_viewport),
        );
    }

    Parallax {
        node_ref,
        transform: config.transform(*position),
    }
}

fn measure(node_ref: &NodeRef, config: &ParallaxConfig) -> Option<Point> {
    let element = node_ref.cast::<HtmlElement>()?;
    let top = element.get_bounding_client_rect().top();
    let height = element.offset_height() as f64;
    Some(config.offset(top, height, dom::viewport_size().y))
}
