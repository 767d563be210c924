use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::views::login_form::{render_login_form, LoginRole};
use crate::views::{Renderable, ViewContext};

/// Login de conductores
#[derive(Debug, Clone, Copy, Default)]
pub struct DriverLogin;

impl Renderable for DriverLogin {
    fn name(&self) -> &'static str {
        "DriverLogin"
    }

    fn render(&self, ctx: &ViewContext) -> Result<Element, JsValue> {
        render_login_form(LoginRole::Driver, ctx)
    }
}
