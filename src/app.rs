// ============================================================================
// APP - Aplicación principal: vista raíz + navigator + montaje en el host
// ============================================================================
// Estados: Unmounted -> Mounted (mount). Un segundo mount re-renderiza y
// reemplaza la salida anterior (también si cambia el target).
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, clear_children, document, query_selector};
use crate::error::{describe_js, MountError};
use crate::router::{Navigator, WeakNavigator};
use crate::views::{Renderable, ViewContext};

// Estado compartido con la suscripción de navegación
#[derive(Default)]
struct Mounted {
    target: RefCell<Option<Element>>,
    // Listeners del árbol actual; se sueltan al reemplazarlo
    listeners: RefCell<Vec<EventListener>>,
    render_scheduled: Cell<bool>,
    renders: Cell<u32>,
    // Navigator vigente; las suscripciones de uno anterior se ignoran
    generation: Cell<u32>,
}

/// Aplicación principal
pub struct App {
    root_view: Rc<dyn Renderable>,
    navigator: Option<Navigator>,
    mounted: Rc<Mounted>,
    subscribed: bool,
}

impl App {
    /// Crear aplicación a partir de la vista raíz
    pub fn new(root_view: impl Renderable + 'static) -> Self {
        log::info!("🏗️ [APP] App creada con vista raíz {}", root_view.name());
        Self {
            root_view: Rc::new(root_view),
            navigator: None,
            mounted: Rc::new(Mounted::default()),
            subscribed: false,
        }
    }

    /// Registrar el navigator para que las vistas puedan navegar
    pub fn use_navigator(&mut self, navigator: Navigator) {
        if self.navigator.is_some() {
            log::warn!("⚠️ [APP] Reemplazando navigator ya adjunto");
        }
        self.navigator = Some(navigator);
        self.mounted.generation.set(self.mounted.generation.get().wrapping_add(1));
        self.subscribed = false;
        if self.is_mounted() {
            self.subscribe_to_navigation();
        }
    }

    pub fn navigator(&self) -> Option<&Navigator> {
        self.navigator.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.target.borrow().is_some()
    }

    /// Renders completos hechos desde que se creó la app
    pub fn render_count(&self) -> u32 {
        self.mounted.renders.get()
    }

    /// Listeners vivos del árbol montado
    pub fn listener_count(&self) -> usize {
        self.mounted.listeners.borrow().len()
    }

    /// Montar en el elemento del host que coincide con `selector`
    pub fn mount(&mut self, selector: &str) -> Result<(), MountError> {
        if document().is_none() {
            return Err(MountError::NoDocument);
        }
        let target = match query_selector(selector) {
            Ok(Some(element)) => element,
            Ok(None) => {
                return Err(MountError::TargetNotFound {
                    selector: selector.to_string(),
                })
            }
            Err(e) => {
                log::error!("❌ [APP] Selector inválido '{}': {}", selector, describe_js(&e));
                return Err(MountError::TargetNotFound {
                    selector: selector.to_string(),
                });
            }
        };

        let ctx = self.context();
        let tree = self
            .root_view
            .render(&ctx)
            .map_err(|e| MountError::Render(describe_js(&e)))?;

        let previous = self.mounted.target.borrow_mut().replace(target.clone());
        if let Some(previous) = previous {
            log::info!("🔁 [APP] Re-montando, reemplazando salida anterior");
            clear_children(&previous);
        }

        attach_tree(&self.mounted, &target, &tree, &ctx)?;
        log::info!("✅ [APP] Montada en '{}'", selector);

        self.subscribe_to_navigation();
        Ok(())
    }

    /// Re-render completo en el target actual (no-op si no está montada)
    pub fn render(&self) -> Result<(), MountError> {
        render_into(&self.mounted, &self.root_view, self.navigator.clone())
    }

    /// Desmontar: vaciar el target, soltar listeners y volver a Unmounted
    pub fn unmount(&mut self) {
        if let Some(target) = self.mounted.target.borrow_mut().take() {
            clear_children(&target);
            log::info!("👋 [APP] Desmontada");
        }
        self.mounted.listeners.borrow_mut().clear();
    }

    fn context(&self) -> ViewContext {
        ViewContext::new(self.navigator.clone())
    }

    // Cada cambio de path programa UN re-render (Timeout 0 agrupa cambios seguidos)
    fn subscribe_to_navigation(&mut self) {
        if self.subscribed {
            return;
        }
        let Some(navigator) = &self.navigator else {
            return;
        };

        let mounted = self.mounted.clone();
        let root_view = self.root_view.clone();
        let generation = mounted.generation.get();
        let weak: WeakNavigator = navigator.downgrade();

        navigator.subscribe(move || {
            if mounted.generation.get() != generation {
                return;
            }
            if mounted.render_scheduled.replace(true) {
                return;
            }
            let mounted = mounted.clone();
            let root_view = root_view.clone();
            let weak = weak.clone();
            Timeout::new(0, move || {
                mounted.render_scheduled.set(false);
                if mounted.generation.get() != generation {
                    return;
                }
                if let Err(e) = render_into(&mounted, &root_view, weak.upgrade()) {
                    log::error!("❌ [APP] Error re-renderizando: {}", e);
                }
            })
            .forget();
        });
        self.subscribed = true;
    }
}

/// Construye el árbol completo y luego reemplaza el contenido del target;
/// si el render falla el contenido anterior queda intacto.
fn render_into(
    mounted: &Mounted,
    root_view: &Rc<dyn Renderable>,
    navigator: Option<Navigator>,
) -> Result<(), MountError> {
    let Some(target) = mounted.target.borrow().clone() else {
        return Ok(());
    };
    let ctx = ViewContext::new(navigator);
    let tree = root_view
        .render(&ctx)
        .map_err(|e| MountError::Render(describe_js(&e)))?;
    attach_tree(mounted, &target, &tree, &ctx)
}

fn attach_tree(
    mounted: &Mounted,
    target: &Element,
    tree: &Element,
    ctx: &ViewContext,
) -> Result<(), MountError> {
    clear_children(target);
    append_child(target, tree).map_err(|e: JsValue| MountError::Render(describe_js(&e)))?;

    // Los listeners del árbol anterior se sueltan aquí
    *mounted.listeners.borrow_mut() = ctx.take_listeners();
    mounted.renders.set(mounted.renders.get() + 1);
    log::debug!(
        "🎨 [APP] Render #{} ({} listeners)",
        mounted.renders.get(),
        mounted.listeners.borrow().len()
    );
    Ok(())
}
