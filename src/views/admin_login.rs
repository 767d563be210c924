use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::views::login_form::{render_login_form, LoginRole};
use crate::views::{Renderable, ViewContext};

/// Login de administradores
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminLogin;

impl Renderable for AdminLogin {
    fn name(&self) -> &'static str {
        "AdminLogin"
    }

    fn render(&self, ctx: &ViewContext) -> Result<Element, JsValue> {
        render_login_form(LoginRole::Admin, ctx)
    }
}
