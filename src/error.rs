// ============================================================================
// ERRORES - Taxonomía de errores de arranque y de routing
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errores del router (tabla de rutas + history)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("invalid route path '{0}': must start with '/'")]
    InvalidPath(String),

    #[error("duplicate route path '{0}'")]
    DuplicatePath(String),

    #[error("history error: {0}")]
    History(String),
}

/// Fallo de arranque: la app no pudo construirse o montarse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("no document available in this environment")]
    NoDocument,

    #[error("mount target '{selector}' not found in host page")]
    TargetNotFound { selector: String },

    #[error("render failed: {0}")]
    Render(String),

    #[error(transparent)]
    Routes(#[from] RouterError),
}

/// Convierte un JsValue de web-sys en texto legible para los errores
pub(crate) fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<RouterError> for JsValue {
    fn from(err: RouterError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
