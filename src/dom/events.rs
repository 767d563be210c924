// ============================================================================
// EVENT HANDLING - Listeners sobre elementos
// ============================================================================
// GESTIÓN DE MEMORIA:
// - Cada helper devuelve el EventListener (gloo-events). Mientras el handle
//   vive, el closure vive; al soltarlo se quita el listener y se libera el
//   closure. Las vistas los guardan en ViewContext y la App los suelta en el
//   siguiente render o en unmount.
// - Nunca closure.forget() aquí: el closure de Rust no se libera aunque el
//   elemento salga del DOM.
// ============================================================================

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

/// Click handler (permite prevent_default)
pub fn on_click<F>(element: &Element, mut handler: F) -> EventListener
where
    F: FnMut(&MouseEvent) + 'static,
{
    EventListener::new_with_options(
        element,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                handler(mouse);
            }
        },
    )
}

/// Input handler
pub fn on_input<F>(element: &Element, handler: F) -> EventListener
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new(element, "input", handler)
}

/// Submit de formularios (permite prevent_default)
pub fn on_submit<F>(element: &Element, handler: F) -> EventListener
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new_with_options(
        element,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        handler,
    )
}
