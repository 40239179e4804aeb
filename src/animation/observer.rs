//! `IntersectionObserver` binding for the animation controller.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

pub use super::controller::WatchControl;
use super::controller::{AnimationController, PhaseSignal, VisibilitySample};

/// Observes one element; disconnects when dropped.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityWatch {
    /// Watch `element`, calling `on_batch` with every batch of entries the
    /// browser delivers, oldest first.
    pub fn new<F>(element: &Element, threshold: Option<f64>, root_margin: Option<&str>, mut on_batch: F) -> Option<Self>
    where
        F: FnMut(Vec<VisibilitySample>) -> WatchControl + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let samples = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| VisibilitySample::new(entry.is_intersecting(), entry.intersection_ratio()))
                .collect();
            if on_batch(samples) == WatchControl::Stop {
                observer.disconnect();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        if let Some(threshold) = threshold {
            options.set_threshold(&JsValue::from_f64(threshold));
        }
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }

        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(err) => {
                warn!("IntersectionObserver unavailable: {:?}", err);
                return None;
            }
        };
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Live binding between an element and its controller. Dropping the handle
/// stops observation and detaches the controller.
pub struct AnimationHandle {
    watch: Option<VisibilityWatch>,
    controller: Rc<RefCell<AnimationController>>,
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.watch.take();
        if let Ok(mut controller) = self.controller.try_borrow_mut() {
            controller.detach();
        }
    }
}

/// Begin observing `element` for `controller`. Returns `None`, leaving the
/// controller detached, when there is no element or no observer.
pub fn attach(
    element: Option<&Element>,
    controller: Rc<RefCell<AnimationController>>,
    on_signal: Callback<PhaseSignal>,
) -> Option<AnimationHandle> {
    let Some(element) = element else {
        debug!("No element mounted, skipping scroll animation");
        return None;
    };

    let threshold = {
        let mut controller = controller.borrow_mut();
        controller.attach();
        controller.request().threshold()
    };
    let watch = {
        let controller = controller.clone();
        VisibilityWatch::new(element, Some(threshold), None, move |samples| {
            // The borrow ends with this statement; the emit may re-render.
            let (signal, control) = controller.borrow_mut().apply(samples);
            if let Some(signal) = signal {
                debug!("Scroll animation signal: {:?}", signal);
                on_signal.emit(signal);
            }
            control
        })
    };

    let Some(watch) = watch else {
        controller.borrow_mut().detach();
        return None;
    };

    Some(AnimationHandle {
        watch: Some(watch),
        controller,
    })
}
