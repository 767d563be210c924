// ============================================================================
// HISTORY - Backends de historial (History API del navegador / memoria)
// ============================================================================
// GESTIÓN DE LISTENERS:
// - El listener de "popstate" es global (window): hay como mucho UNO por
//   página. Vive en POPSTATE_LISTENER; registrar otro suelta el anterior.
// ============================================================================

use std::cell::RefCell;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use crate::error::{describe_js, RouterError};

thread_local! {
    static POPSTATE_LISTENER: RefCell<Option<EventListener>> = RefCell::new(None);
}

/// Backend de historial sobre el que trabaja el Navigator
pub trait History {
    /// URL actual relativa a la base (path + query/fragment si existen)
    fn location(&self) -> String;

    /// Nueva entrada en el historial
    fn push(&mut self, url: &str) -> Result<(), RouterError>;

    /// Reemplazar la entrada actual
    fn replace(&mut self, url: &str) -> Result<(), RouterError>;

    /// Moverse `delta` entradas (negativo = atrás)
    fn go(&mut self, delta: i32) -> Result<(), RouterError>;

    /// Registrar callback para navegaciones externas (back/forward del navegador)
    fn listen(&mut self, on_pop: Box<dyn Fn()>) -> Result<(), RouterError>;
}

/// Parte path de una URL (sin query ni fragment), la que se usa para el matching
pub fn path_only(url: &str) -> &str {
    match url.find(|c: char| c == '?' || c == '#') {
        Some(idx) => &url[..idx],
        None => url,
    }
}

/// Normalizar base: "" | "/portal" (sin '/' final, con '/' inicial)
pub fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Quitar la base de un pathname del navegador
pub fn strip_base(base: &str, pathname: &str) -> String {
    if base.is_empty() {
        return pathname.to_string();
    }
    match pathname.strip_prefix(base) {
        Some("") => "/".to_string(),
        Some(rest) if rest.starts_with(|c: char| c == '/' || c == '?' || c == '#') => {
            if rest.starts_with('/') {
                rest.to_string()
            } else {
                format!("/{}", rest)
            }
        }
        _ => pathname.to_string(),
    }
}

/// Anteponer la base a una URL interna
pub fn join_base(base: &str, url: &str) -> String {
    format!("{}{}", base, url)
}

// ============================================================================
// BROWSER HISTORY - window.history + popstate
// ============================================================================

pub struct BrowserHistory {
    base: String,
}

impl BrowserHistory {
    pub fn new(base: &str) -> Self {
        Self {
            base: normalize_base(base),
        }
    }

    /// Quitar el listener de popstate de la página (si hay uno)
    pub fn unlisten() {
        let previous = POPSTATE_LISTENER.with(|slot| slot.borrow_mut().take());
        if previous.is_some() {
            log::info!("🔇 [ROUTER] Listener de popstate eliminado");
        }
    }

    fn history(&self) -> Result<web_sys::History, RouterError> {
        web_sys::window()
            .ok_or_else(|| RouterError::History("No window".to_string()))?
            .history()
            .map_err(|e| RouterError::History(describe_js(&e)))
    }
}

impl History for BrowserHistory {
    fn location(&self) -> String {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return "/".to_string();
        };
        let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
        let search = location.search().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        strip_base(&self.base, &format!("{}{}{}", pathname, search, hash))
    }

    fn push(&mut self, url: &str) -> Result<(), RouterError> {
        self.history()?
            .push_state_with_url(&JsValue::NULL, "", Some(&join_base(&self.base, url)))
            .map_err(|e| RouterError::History(describe_js(&e)))
    }

    fn replace(&mut self, url: &str) -> Result<(), RouterError> {
        self.history()?
            .replace_state_with_url(&JsValue::NULL, "", Some(&join_base(&self.base, url)))
            .map_err(|e| RouterError::History(describe_js(&e)))
    }

    fn go(&mut self, delta: i32) -> Result<(), RouterError> {
        self.history()?
            .go_with_delta(delta)
            .map_err(|e| RouterError::History(describe_js(&e)))
    }

    fn listen(&mut self, on_pop: Box<dyn Fn()>) -> Result<(), RouterError> {
        let window = web_sys::window().ok_or_else(|| RouterError::History("No window".to_string()))?;
        let listener = EventListener::new(&window, "popstate", move |_| on_pop());

        let previous = POPSTATE_LISTENER.with(|slot| slot.borrow_mut().replace(listener));
        if previous.is_some() {
            log::warn!("⚠️ [ROUTER] popstate ya registrado, reemplazando listener anterior");
        }
        Ok(())
    }
}

// ============================================================================
// MEMORY HISTORY - pila de entradas + cursor (fuera del navegador y tests)
// ============================================================================

#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![initial.to_string()],
            index: 0,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        self.entries[self.index].clone()
    }

    fn push(&mut self, url: &str) -> Result<(), RouterError> {
        self.entries.truncate(self.index + 1);
        self.entries.push(url.to_string());
        self.index = self.entries.len() - 1;
        Ok(())
    }

    fn replace(&mut self, url: &str) -> Result<(), RouterError> {
        self.entries[self.index] = url.to_string();
        Ok(())
    }

    fn go(&mut self, delta: i32) -> Result<(), RouterError> {
        let target = self.index as i64 + delta as i64;
        // Fuera de rango: no-op, igual que history.go()
        if target >= 0 && (target as usize) < self.entries.len() {
            self.index = target as usize;
        }
        Ok(())
    }

    fn listen(&mut self, _on_pop: Box<dyn Fn()>) -> Result<(), RouterError> {
        // go() ya es síncrono aquí, el Navigator sincroniza después de cada llamada
        Ok(())
    }
}
