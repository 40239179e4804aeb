use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{window, Element, Event, EventTarget};

use crate::animation::smoother::Point;

/// Event listener that is removed again when dropped.
pub struct Listener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event_type: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        match target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event_type,
                callback,
            }),
            Err(err) => {
                warn!("Failed to add {} listener: {:?}", event_type, err);
                None
            }
        }
    }

    pub fn on_window<F>(event_type: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = window()?;
        Self::new(window.as_ref(), event_type, handler)
    }

    pub fn on_document<F>(event_type: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let document = window()?.document()?;
        Self::new(document.as_ref(), event_type, handler)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref());
    }
}

/// Inner width and height of the window.
pub fn viewport_size() -> Point {
    let Some(window) = window() else {
        return Point::ORIGIN;
    };
    let read = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Point::new(read(window.inner_width()), read(window.inner_height()))
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn scroll_to_y(y: f64) {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, y);
    }
}

/// Total scrollable height of the document.
pub fn document_height() -> f64 {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0)
}

pub fn document_element() -> Option<Element> {
    window()?.document()?.document_element()
}

pub fn element_by_id(id: &str) -> Option<Element> {
    let document = window()?.document()?;
    document
        .get_element_by_id(id)
        .or_else(|| document.query_selector(id).ok().flatten())
}

/// Touch-capable devices drive the parallax from device orientation.
pub fn is_touch_device() -> bool {
    let Some(window) = window() else {
        return false;
    };
    let has_touch_events = js_has(window.as_ref(), "ontouchstart");
    has_touch_events || window.navigator().max_touch_points() > 0
}

fn js_has(target: &JsValue, property: &str) -> bool {
    web_sys::js_sys::Reflect::has(target, &JsValue::from_str(property)).unwrap_or(false)
}
