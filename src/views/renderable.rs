// ============================================================================
// RENDERABLE - Capacidad común de todas las vistas
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::router::Navigator;

/// Una vista que sabe renderizarse como un árbol DOM
pub trait Renderable {
    /// Nombre estable de la vista (logs y tests)
    fn name(&self) -> &'static str;

    /// Construir el árbol DOM de la vista; los listeners van a `ctx.keep()`
    fn render(&self, ctx: &ViewContext) -> Result<Element, JsValue>;
}

/// Contexto de un render: navigator + listeners del árbol construido
#[derive(Clone, Default)]
pub struct ViewContext {
    navigator: Option<Navigator>,
    listeners: Rc<RefCell<Vec<EventListener>>>,
}

impl ViewContext {
    pub fn new(navigator: Option<Navigator>) -> Self {
        Self {
            navigator,
            listeners: Rc::default(),
        }
    }

    /// Navigator adjunto a la app (None si la app no tiene router)
    pub fn navigator(&self) -> Option<&Navigator> {
        self.navigator.as_ref()
    }

    /// Mantener vivo un listener mientras viva el árbol renderizado
    pub fn keep(&self, listener: EventListener) {
        self.listeners.borrow_mut().push(listener);
    }

    /// Entregar los listeners al dueño del árbol (la App)
    pub fn take_listeners(&self) -> Vec<EventListener> {
        std::mem::take(&mut *self.listeners.borrow_mut())
    }
}
