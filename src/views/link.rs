// ============================================================================
// LINK - Enlaces internos que navegan sin recargar la página
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};
use crate::config::CONFIG;
use crate::dom::{on_click, ElementBuilder};
use crate::router::history::{join_base, normalize_base};
use crate::router::Navigator;
use crate::views::ViewContext;

/// Clicks que abren pestaña/ventana nueva se dejan al navegador
pub fn should_intercept(button: i16, ctrl: bool, meta: bool, shift: bool, alt: bool) -> bool {
    button == 0 && !(ctrl || meta || shift || alt)
}

/// `<a href>` real (funciona sin JS / con click medio) + navegación vía Navigator
pub fn render_link(ctx: &ViewContext, to: &str, text: &str, class: &str) -> Result<Element, JsValue> {
    let href = join_base(&normalize_base(&CONFIG.router_base), to);
    let anchor = ElementBuilder::new("a")?
        .class(class)
        .attr("href", &href)?
        .text(text)
        .build();

    // Débil: el listener vive en la App y no debe mantener vivo al Navigator
    if let Some(navigator) = ctx.navigator().map(Navigator::downgrade) {
        let target = to.to_string();
        ctx.keep(on_click(&anchor, move |e: &MouseEvent| {
            if e.default_prevented()
                || !should_intercept(e.button(), e.ctrl_key(), e.meta_key(), e.shift_key(), e.alt_key())
            {
                return;
            }
            e.prevent_default();
            let Some(navigator) = navigator.upgrade() else {
                return;
            };
            if let Err(err) = navigator.push(&target) {
                log::error!("❌ [LINK] Error navegando a {}: {}", target, err);
            }
        }));
    }

    Ok(anchor)
}
