// ============================================================================
// DISPATCH PORTAL - FRONTEND (RUST PURO + WASM)
// ============================================================================
// - Router: tabla de rutas estática + Navigator sobre la History API
// - Views: funciones/structs que renderizan DOM (Renderable)
// - App: vista raíz + navigator, montada en #app
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;
use crate::error::MountError;
use crate::router::{BrowserHistory, Navigator};
use crate::routes::build_route_table;
use crate::views::AppShell;

// Única instancia de la app; solo accesible vía init()/teardown()
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

/// Punto de entrada desde main(): panic hook + logging + init()
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.level()));
    }
    log::info!("🚀 Dispatch Portal ({})", CONFIG.environment);

    init().map_err(|e| {
        log::error!("❌ [START] No se pudo arrancar la app: {}", e);
        JsValue::from(e)
    })
}

/// Construir rutas + navigator + app y montarla. Idempotente.
pub fn init() -> Result<(), MountError> {
    if APP.with(|cell| cell.borrow().is_some()) {
        log::warn!("⚠️ [START] init() llamado con la app ya montada, ignorando");
        return Ok(());
    }

    let routes = build_route_table()?;
    let navigator = Navigator::new(routes, BrowserHistory::new(&CONFIG.router_base));
    navigator.listen()?;

    let mut app = App::new(AppShell);
    app.use_navigator(navigator);
    if let Err(e) = app.mount(&CONFIG.mount_selector) {
        // Sin app montada el popstate no tiene a quién re-renderizar
        BrowserHistory::unlisten();
        return Err(e);
    }

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });
    Ok(())
}

/// Desmontar y soltar la instancia (callable desde JavaScript)
#[wasm_bindgen(js_name = teardownApp)]
pub fn teardown() {
    APP.with(|cell| {
        if let Some(mut app) = cell.borrow_mut().take() {
            app.unmount();
        }
    });
    BrowserHistory::unlisten();
}

/// Navegación programática desde JavaScript
#[wasm_bindgen(js_name = navigateTo)]
pub fn navigate_to(url: &str) -> Result<(), JsValue> {
    APP.with(|cell| {
        let app = cell.borrow();
        let navigator = app
            .as_ref()
            .and_then(App::navigator)
            .ok_or_else(|| JsValue::from_str("App no está inicializada"))?;
        navigator.push(url).map_err(JsValue::from)
    })
}
