// ============================================================================
// ROUTES - Tabla de rutas de la aplicación
// ============================================================================

use crate::error::RouterError;
use crate::router::{Route, RouteTable};
use crate::views::{AdminLogin, DriverLogin, Home};

pub const HOME_PATH: &str = "/";
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";
pub const DRIVER_LOGIN_PATH: &str = "/driver/login";

/// Tabla estática: sin parámetros, sin wildcard, sin fallback
pub fn build_route_table() -> Result<RouteTable, RouterError> {
    RouteTable::new(vec![
        Route::new(HOME_PATH, Home),
        Route::new(ADMIN_LOGIN_PATH, AdminLogin),
        Route::new(DRIVER_LOGIN_PATH, DriverLogin),
    ])
}
