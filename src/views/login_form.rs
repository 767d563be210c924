// ============================================================================
// LOGIN FORM - Formulario compartido por AdminLogin y DriverLogin
// ============================================================================
// Solo recoge y valida campos. La autenticación la hace quien escuche el
// evento "loginRequested" (nunca viaja el password en el evento).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, CustomEventInit, Element, HtmlInputElement};

use crate::dom::{append_child, create_element, on_input, on_submit, remove_attribute, set_attribute, set_text_content, ElementBuilder};
use crate::routes::HOME_PATH;
use crate::views::link::render_link;
use crate::views::ViewContext;

pub const LOGIN_REQUESTED_EVENT: &str = "loginRequested";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginRole {
    Admin,
    Driver,
}

impl LoginRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginRole::Admin => "admin",
            LoginRole::Driver => "driver",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LoginRole::Admin => "Admin",
            LoginRole::Driver => "Driver",
        }
    }
}

/// Payload del evento "loginRequested"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub role: LoginRole,
    pub username: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFormError {
    MissingFields,
}

impl LoginFormError {
    pub fn message(&self) -> &'static str {
        match self {
            LoginFormError::MissingFields => "Please fill in all fields",
        }
    }
}

/// Username sin espacios alrededor; password tal cual pero no vacío
pub fn validate_credentials(role: LoginRole, username: &str, password: &str) -> Result<LoginRequest, LoginFormError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(LoginFormError::MissingFields);
    }
    Ok(LoginRequest {
        role,
        username: username.to_string(),
    })
}

/// Renderizar formulario de login para un rol
pub fn render_login_form(role: LoginRole, ctx: &ViewContext) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login_form({})", role.as_str());

    let username = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));

    let screen = ElementBuilder::new("section")?
        .class(&format!("login-screen {}-login", role.as_str()))
        .build();

    let title = ElementBuilder::new("h1")?
        .text(&format!("{} Login", role.display_name()))
        .build();

    let form = ElementBuilder::new("form")?
        .class("login-form")
        .attr("novalidate", "")?
        .build();

    let username_group = create_form_group(
        ctx,
        &format!("{}-username", role.as_str()),
        "Username",
        "text",
        username.clone(),
    )?;
    let password_group = create_form_group(
        ctx,
        &format!("{}-password", role.as_str()),
        "Password",
        "password",
        password.clone(),
    )?;

    let error_box = ElementBuilder::new("p")?
        .class("form-error")
        .attr("role", "alert")?
        .attr("hidden", "")?
        .build();

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-login")
        .text("Sign in")
        .build();

    {
        let error_box = error_box.clone();
        ctx.keep(on_submit(&form, move |e: &web_sys::Event| {
            e.prevent_default();

            match validate_credentials(role, &username.borrow(), &password.borrow()) {
                Ok(request) => {
                    if let Err(err) = set_attribute(&error_box, "hidden", "") {
                        log::error!("❌ [LOGIN] No se pudo ocultar el error: {:?}", err);
                    }
                    set_text_content(&error_box, "");
                    if let Err(err) = dispatch_login_request(&request) {
                        log::error!("❌ [LOGIN] Error disparando {}: {:?}", LOGIN_REQUESTED_EVENT, err);
                    }
                }
                Err(err) => {
                    log::warn!("⚠️ [LOGIN] Formulario {} incompleto", role.as_str());
                    set_text_content(&error_box, err.message());
                    if let Err(err) = remove_attribute(&error_box, "hidden") {
                        log::error!("❌ [LOGIN] No se pudo mostrar el error: {:?}", err);
                    }
                }
            }
        }));
    }

    append_child(&form, &username_group)?;
    append_child(&form, &password_group)?;
    append_child(&form, &error_box)?;
    append_child(&form, &submit_btn)?;

    let back = render_link(ctx, HOME_PATH, "← Back", "login-back")?;

    append_child(&screen, &title)?;
    append_child(&screen, &form)?;
    append_child(&screen, &back)?;

    Ok(screen)
}

fn create_form_group(
    ctx: &ViewContext,
    id: &str,
    label_text: &str,
    input_type: &str,
    value: Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?
        .class("form-group")
        .build();

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let input = create_element("input")?;
    set_attribute(&input, "type", input_type)?;
    set_attribute(&input, "id", id)?;
    set_attribute(&input, "name", id)?;
    input.set_class_name("form-input");
    if input_type == "password" {
        set_attribute(&input, "autocomplete", "current-password")?;
    }

    ctx.keep(on_input(&input, move |e: &web_sys::Event| {
        if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
            *value.borrow_mut() = target.value();
        }
    }));

    append_child(&group, &label)?;
    append_child(&group, &input)?;

    Ok(group)
}

fn dispatch_login_request(request: &LoginRequest) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let init = CustomEventInit::new();
    init.set_detail(&serde_wasm_bindgen::to_value(request)?);
    let event = CustomEvent::new_with_event_init_dict(LOGIN_REQUESTED_EVENT, &init)?;
    window.dispatch_event(&event)?;
    log::info!("✅ [LOGIN] {} ({}) disparado", LOGIN_REQUESTED_EVENT, request.role.as_str());
    Ok(())
}
