// ============================================================================
// NAVIGATOR - Resuelve paths contra la tabla y conduce el history
// ============================================================================
// El Navigator es barato de clonar (Rc interno): la app, las vistas y el
// listener de popstate comparten la misma instancia.
// ============================================================================

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::RouterError;
use crate::router::history::{path_only, History};
use crate::router::route::{Route, RouteMatch, RouteTable};
use crate::state::ReactiveState;

struct NavigatorInner {
    routes: RouteTable,
    history: RefCell<Box<dyn History>>,
    current: ReactiveState<String>,
}

#[derive(Clone)]
pub struct Navigator {
    inner: Rc<NavigatorInner>,
}

/// Referencia débil para closures que no deben mantener vivo al Navigator
#[derive(Clone)]
pub struct WeakNavigator {
    inner: Weak<NavigatorInner>,
}

impl WeakNavigator {
    pub fn upgrade(&self) -> Option<Navigator> {
        self.inner.upgrade().map(|inner| Navigator { inner })
    }
}

impl Navigator {
    /// Crear navigator sobre una tabla de rutas y un backend de historial
    pub fn new(routes: RouteTable, history: impl History + 'static) -> Self {
        let current = path_only(&history.location()).to_string();
        log::info!("🧭 [ROUTER] Navigator creado ({} rutas), path inicial: {}", routes.len(), current);
        Self {
            inner: Rc::new(NavigatorInner {
                routes,
                history: RefCell::new(Box::new(history)),
                current: ReactiveState::new(current),
            }),
        }
    }

    pub fn downgrade(&self) -> WeakNavigator {
        WeakNavigator {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Resolver un path (query y fragment se ignoran)
    pub fn resolve(&self, path: &str) -> RouteMatch<'_> {
        self.inner.routes.resolve(path_only(path))
    }

    pub fn current_path(&self) -> String {
        self.inner.current.get()
    }

    /// Ruta que corresponde al path actual (None = sin match)
    pub fn current_route(&self) -> Option<&Route> {
        let path = self.current_path();
        self.inner.routes.resolve(&path).route()
    }

    /// Navegar a una URL creando entrada nueva en el historial
    pub fn push(&self, url: &str) -> Result<(), RouterError> {
        if path_only(url) == self.current_path() && self.inner.history.borrow().location() == url {
            log::debug!("[ROUTER] push a la URL actual ignorado: {}", url);
            return Ok(());
        }
        self.inner.history.borrow_mut().push(url)?;
        self.log_target(url);
        self.sync();
        Ok(())
    }

    /// Navegar reemplazando la entrada actual
    pub fn replace(&self, url: &str) -> Result<(), RouterError> {
        self.inner.history.borrow_mut().replace(url)?;
        self.log_target(url);
        self.sync();
        Ok(())
    }

    pub fn back(&self) -> Result<(), RouterError> {
        self.go(-1)
    }

    pub fn forward(&self) -> Result<(), RouterError> {
        self.go(1)
    }

    /// En el navegador el cambio llega luego por popstate; en memoria es inmediato
    pub fn go(&self, delta: i32) -> Result<(), RouterError> {
        self.inner.history.borrow_mut().go(delta)?;
        self.sync();
        Ok(())
    }

    /// Callback tras cada cambio del path actual
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.inner.current.subscribe(callback);
    }

    /// Escuchar navegaciones externas (back/forward del navegador)
    pub fn listen(&self) -> Result<(), RouterError> {
        let weak = self.downgrade();
        self.inner.history.borrow_mut().listen(Box::new(move || {
            if let Some(navigator) = weak.upgrade() {
                navigator.sync();
            }
        }))
    }

    /// Releer la ubicación del history y publicar el path si cambió
    pub fn sync(&self) -> bool {
        let location = self.inner.history.borrow().location();
        self.inner.current.set(path_only(&location).to_string())
    }

    fn log_target(&self, url: &str) {
        match self.resolve(url) {
            RouteMatch::Found(route) => log::info!("🧭 [ROUTER] {} -> {}", url, route.view_name()),
            RouteMatch::NoMatch => log::warn!("⚠️ [ROUTER] {} no coincide con ninguna ruta", url),
        }
    }
}
