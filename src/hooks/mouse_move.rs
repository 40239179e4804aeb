use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{DeviceOrientationEvent, MouseEvent};
use yew::prelude::*;

use crate::animation::frame::FrameLoop;
use crate::animation::smoother::{orientation_target, pointer_target};
use crate::animation::{Point, PointerSmoother};
use crate::config;
use crate::dom::{self, Listener};

// Below this distance the smoothed position stops re-rendering
const SETTLE_EPSILON: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseMoveConfig {
    pub sensitivity: f64,
    pub ease: f64,
}

impl Default for MouseMoveConfig {
    fn default() -> Self {
        Self {
            sensitivity: config::DEFAULT_POINTER_SENSITIVITY,
            ease: config::DEFAULT_POINTER_EASE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseMove {
    /// Smoothed offset.
    pub position: Point,
    /// Latest unsmoothed target.
    pub raw: Point,
    pub is_touch_device: bool,
}

/// Pointer (or device tilt on touch screens) offset from the viewport
/// centre, eased once per frame.
#[hook]
pub fn use_mouse_move(config: MouseMoveConfig) -> MouseMove {
    let position = use_state_eq(|| Point::ORIGIN);
    let raw = use_state_eq(|| Point::ORIGIN);
    let is_touch_device = use_state_eq(dom::is_touch_device);

    {
        let position = position.clone();
        let raw = raw.clone();
        use_effect_with_deps(
            move |&(sensitivity, ease, touch): &(f64, f64, bool)| {
                let smoother = Rc::new(RefCell::new(PointerSmoother::new(ease)));

                let listener = {
                    let smoother = smoother.clone();
                    if touch {
                        debug!("Parallax following device orientation");
                        Listener::on_window("deviceorientation", move |event| {
                            let Some(event) = event.dyn_ref::<DeviceOrientationEvent>() else {
                                return;
                            };
                            let viewport = dom::viewport_size();
                            if let Some(target) = orientation_target(event.beta(), event.gamma(), viewport, sensitivity) {
                                smoother.borrow_mut().update(target);
                            }
                        })
                    } else {
                        Listener::on_window("mousemove", move |event| {
                            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                                return;
                            };
                            let client = Point::new(event.client_x() as f64, event.client_y() as f64);
                            let target = pointer_target(client, dom::viewport_size(), sensitivity);
                            smoother.borrow_mut().update(target);
                        })
                    }
                };

                let frames = FrameLoop::start(move |_| {
                    let mut smoother = smoother.borrow_mut();
                    if !smoother.is_settled(SETTLE_EPSILON) {
                        raw.set(smoother.target());
                        position.set(smoother.step());
                    }
                    true
                });

                move || {
                    drop(frames);
                    drop(listener);
                }
            },
            (config.sensitivity, config.ease, *is_touch_device),
        );
    }

    MouseMove {
        position: *position,
        raw: *raw,
        is_touch_device: *is_touch_device,
    }
}
