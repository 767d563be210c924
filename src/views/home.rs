// ============================================================================
// HOME - Página de inicio con acceso a los dos logins
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::routes::{ADMIN_LOGIN_PATH, DRIVER_LOGIN_PATH};
use crate::views::link::render_link;
use crate::views::{Renderable, ViewContext};

#[derive(Debug, Clone, Copy, Default)]
pub struct Home;

impl Renderable for Home {
    fn name(&self) -> &'static str {
        "Home"
    }

    fn render(&self, ctx: &ViewContext) -> Result<Element, JsValue> {
        let home = ElementBuilder::new("section")?
            .class("home")
            .build();

        let title = ElementBuilder::new("h1")?
            .text("Dispatch Portal")
            .build();

        let subtitle = ElementBuilder::new("p")?
            .class("home-subtitle")
            .text("Choose how you want to sign in")
            .build();

        let actions = ElementBuilder::new("div")?
            .class("home-actions")
            .child(render_link(ctx, ADMIN_LOGIN_PATH, "Admin login", "btn btn-admin")?)?
            .child(render_link(ctx, DRIVER_LOGIN_PATH, "Driver login", "btn btn-driver")?)?
            .build();

        append_child(&home, &title)?;
        append_child(&home, &subtitle)?;
        append_child(&home, &actions)?;
        Ok(home)
    }
}
