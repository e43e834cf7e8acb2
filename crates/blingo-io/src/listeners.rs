//! Window-level pointer listeners.
//!
//! A dragged slider must keep tracking after the pointer leaves its
//! container, so move and release events are observed on `window`.
//! [`attach_window_listeners`] registers one listener per
//! [`GlobalEvent`] and hands back a [`ListenerSet`] whose drop removes
//! them all again.

use std::rc::Rc;

use blingo_core::{Detach, Geometry, GlobalEvent, ListenerSet, PointerSample, PointerSource};
use dioxus::logger::tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

/// Errors that can occur while registering window listeners.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    /// There is no global `window` (not running in a browser page).
    #[error("no global window")]
    NoWindow,

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for ListenerError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// A callback registered on `window` for one event type.
///
/// Owns the JS closure; the closure must outlive its registration, so it
/// is only dropped after [`Detach::detach`] has removed it.
pub struct WindowListener {
    window: web_sys::Window,
    event: GlobalEvent,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Detach for WindowListener {
    fn detach(self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback(self.event.dom_name(), self.callback.as_ref().unchecked_ref())
        {
            warn!(event = %self.event, error = ?e, "failed to remove window listener");
        }
    }
}

/// Register `on_event` for every [`GlobalEvent`] on `window`.
///
/// # Errors
///
/// Returns [`ListenerError::NoWindow`] outside a browser page, or
/// [`ListenerError::JsError`] if registration fails.  Listeners attached
/// before a failure are removed before returning.
pub fn attach_window_listeners(
    on_event: impl Fn(GlobalEvent, &web_sys::Event) + 'static,
) -> Result<ListenerSet<WindowListener>, ListenerError> {
    let window = web_sys::window().ok_or(ListenerError::NoWindow)?;
    let on_event: Rc<dyn Fn(GlobalEvent, &web_sys::Event)> = Rc::new(on_event);

    ListenerSet::acquire(GlobalEvent::ALL, |event| {
        let handler = Rc::clone(&on_event);
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |raw: web_sys::Event| {
            handler(event, &raw);
        });
        window.add_event_listener_with_callback(event.dom_name(), callback.as_ref().unchecked_ref())?;
        Ok(WindowListener {
            window: window.clone(),
            event,
            callback,
        })
    })
}

/// Extract the normalized pointer position from a raw window event.
///
/// Mouse events yield their `clientX`; touch events yield the first
/// active touch, or `None` once every finger has lifted.
#[must_use]
pub fn pointer_sample(event: GlobalEvent, raw: &web_sys::Event) -> Option<PointerSample> {
    match event.source() {
        PointerSource::Mouse => raw
            .dyn_ref::<web_sys::MouseEvent>()
            .map(|m| PointerSample::mouse(f64::from(m.client_x()))),
        PointerSource::Touch => {
            let touches = raw.dyn_ref::<web_sys::TouchEvent>()?.touches();
            PointerSample::first_touch(
                (0..touches.length())
                    .filter_map(|i| touches.get(i))
                    .map(|t| f64::from(t.client_x())),
            )
        }
    }
}

/// Measure the slider container's horizontal extent in client coordinates.
///
/// Returns `None` while the element has no layout width (hidden, not yet
/// laid out).
#[must_use]
pub fn measure_container(container: &web_sys::Element) -> Option<Geometry> {
    let rect = container.get_bounding_client_rect();
    Geometry::new(rect.left(), rect.width())
}
