// ============================================================================
// APP SHELL - Vista raíz: header + outlet del router
// ============================================================================
// El outlet muestra la vista de la ruta actual. Sin match no se renderiza
// nada (no hay ruta fallback).
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::routes::HOME_PATH;
use crate::views::link::render_link;
use crate::views::{Renderable, ViewContext};

pub const OUTLET_CLASS: &str = "router-view";

#[derive(Debug, Clone, Copy, Default)]
pub struct AppShell;

impl Renderable for AppShell {
    fn name(&self) -> &'static str {
        "App"
    }

    fn render(&self, ctx: &ViewContext) -> Result<Element, JsValue> {
        let shell = ElementBuilder::new("div")?
            .class("app-shell")
            .build();

        let header = ElementBuilder::new("header")?
            .class("app-header")
            .child(render_link(ctx, HOME_PATH, "Dispatch Portal", "brand")?)?
            .build();

        let outlet = ElementBuilder::new("main")?
            .class(OUTLET_CLASS)
            .build();

        if let Some(route) = ctx.navigator().and_then(|nav| nav.current_route()) {
            log::debug!("[SHELL] Renderizando {} en el outlet", route.view_name());
            let view = route.view().render(ctx)?;
            append_child(&outlet, &view)?;
        }

        append_child(&shell, &header)?;
        append_child(&shell, &outlet)?;
        Ok(shell)
    }
}
