// ============================================================================
// ROUTE TABLE - Rutas literales e inmutables
// ============================================================================
// Matching exacto (sensible a mayúsculas, sin '/' final, sin parámetros).
// Se respeta el orden de inserción y gana la primera ruta que coincide.
// ============================================================================

use std::fmt;
use std::rc::Rc;

use crate::error::RouterError;
use crate::views::Renderable;

/// Binding path -> vista
#[derive(Clone)]
pub struct Route {
    path: String,
    view: Rc<dyn Renderable>,
}

impl Route {
    pub fn new(path: impl Into<String>, view: impl Renderable + 'static) -> Self {
        Self {
            path: path.into(),
            view: Rc::new(view),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn view(&self) -> &Rc<dyn Renderable> {
        &self.view
    }

    pub fn view_name(&self) -> &'static str {
        self.view.name()
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("view", &self.view.name())
            .finish()
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.view.name() == other.view.name()
    }
}

/// Resultado de resolver un path contra la tabla
#[derive(Debug, Clone, Copy)]
pub enum RouteMatch<'a> {
    Found(&'a Route),
    NoMatch,
}

impl<'a> RouteMatch<'a> {
    pub fn route(&self) -> Option<&'a Route> {
        match self {
            RouteMatch::Found(route) => Some(route),
            RouteMatch::NoMatch => None,
        }
    }

    pub fn view_name(&self) -> Option<&'static str> {
        self.route().map(Route::view_name)
    }

    pub fn is_match(&self) -> bool {
        matches!(self, RouteMatch::Found(_))
    }
}

/// Secuencia ordenada e inmutable de rutas
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Construir la tabla validando que cada path empiece por '/' y sea único
    pub fn new(routes: Vec<Route>) -> Result<Self, RouterError> {
        for (i, route) in routes.iter().enumerate() {
            if !route.path.starts_with('/') {
                return Err(RouterError::InvalidPath(route.path.clone()));
            }
            if routes[..i].iter().any(|r| r.path == route.path) {
                return Err(RouterError::DuplicatePath(route.path.clone()));
            }
        }
        Ok(Self { routes })
    }

    /// Primera ruta cuyo path es exactamente igual al pedido
    pub fn resolve(&self, path: &str) -> RouteMatch<'_> {
        self.routes
            .iter()
            .find(|route| route.path == path)
            .map_or(RouteMatch::NoMatch, RouteMatch::Found)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
