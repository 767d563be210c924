//! Browser tests for mounting and rendering.
//!
//! Run with: wasm-pack test --headless --chrome

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use dispatch_portal::app::App;
use dispatch_portal::error::MountError;
use dispatch_portal::router::{BrowserHistory, MemoryHistory, Navigator};
use dispatch_portal::routes::build_route_table;
use dispatch_portal::views::login_form::LOGIN_REQUESTED_EVENT;
use dispatch_portal::views::{AdminLogin, AppShell, Renderable, ViewContext};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{CustomEvent, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, PopStateEvent};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Creates a fresh host element attached to <body>
fn host(id: &str) -> Element {
    let doc = document();
    if let Some(old) = doc.get_element_by_id(id) {
        old.remove();
    }
    let el = doc.create_element("div").unwrap();
    el.set_id(id);
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

fn app_at(path: &str) -> (App, Navigator) {
    let navigator = Navigator::new(build_route_table().unwrap(), MemoryHistory::new(path));
    let mut app = App::new(AppShell);
    app.use_navigator(navigator.clone());
    (app, navigator)
}

#[wasm_bindgen_test]
fn mount_with_target_present_renders_shell() {
    let target = host("mount-ok");
    let (mut app, navigator) = app_at("/");

    app.mount("#mount-ok").expect("mount should succeed");

    assert!(app.is_mounted());
    assert!(target.query_selector(".app-shell").unwrap().is_some());
    assert!(target.query_selector(".router-view .home").unwrap().is_some());
    assert_eq!(navigator.resolve("/admin/login").view_name(), Some("AdminLogin"));

    target.remove();
}

#[wasm_bindgen_test]
fn mount_with_target_absent_fails_and_renders_nothing() {
    let (mut app, _navigator) = app_at("/");

    let err = app.mount("#no-such-anchor").unwrap_err();

    assert_eq!(
        err,
        MountError::TargetNotFound {
            selector: "#no-such-anchor".to_string()
        }
    );
    assert!(!app.is_mounted());
    assert!(document().query_selector(".app-shell").unwrap().is_none());
}

#[wasm_bindgen_test]
fn second_mount_replaces_previous_output() {
    let target = host("mount-twice");
    let (mut app, _navigator) = app_at("/");

    app.mount("#mount-twice").unwrap();
    app.mount("#mount-twice").unwrap();

    assert_eq!(target.child_element_count(), 1);
    assert_eq!(target.query_selector_all(".app-shell").unwrap().length(), 1);

    target.remove();
}

#[wasm_bindgen_test]
fn remount_into_other_target_clears_the_first() {
    let first = host("mount-first");
    let second = host("mount-second");
    let (mut app, _navigator) = app_at("/");

    app.mount("#mount-first").unwrap();
    app.mount("#mount-second").unwrap();

    assert_eq!(first.child_element_count(), 0);
    assert_eq!(second.child_element_count(), 1);

    first.remove();
    second.remove();
}

#[wasm_bindgen_test]
fn outlet_follows_current_route() {
    let target = host("mount-nav");
    let (mut app, navigator) = app_at("/admin/login");

    app.mount("#mount-nav").unwrap();
    assert!(target.query_selector(".router-view .admin-login").unwrap().is_some());

    navigator.push("/driver/login").unwrap();
    app.render().unwrap();
    assert!(target.query_selector(".router-view .driver-login").unwrap().is_some());
    assert!(target.query_selector(".admin-login").unwrap().is_none());

    target.remove();
}

#[wasm_bindgen_test]
fn unknown_route_leaves_outlet_empty() {
    let target = host("mount-unknown");
    let (mut app, _navigator) = app_at("/loads");

    app.mount("#mount-unknown").unwrap();

    let outlet = target.query_selector(".router-view").unwrap().unwrap();
    assert_eq!(outlet.child_element_count(), 0);

    target.remove();
}

#[wasm_bindgen_test]
fn unmount_clears_target() {
    let target = host("mount-unmount");
    let (mut app, _navigator) = app_at("/");

    app.mount("#mount-unmount").unwrap();
    app.unmount();

    assert!(!app.is_mounted());
    assert_eq!(target.child_element_count(), 0);

    target.remove();
}

// El ctx se devuelve porque es el dueño de los listeners del formulario
fn render_admin_login(target: &Element) -> (HtmlFormElement, ViewContext) {
    let ctx = ViewContext::default();
    let view = AdminLogin.render(&ctx).unwrap();
    target.append_child(&view).unwrap();
    let form = target
        .query_selector("form.login-form")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlFormElement>()
        .unwrap();
    (form, ctx)
}

fn type_into(target: &Element, selector: &str, value: &str) {
    let input = target
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    input.set_value(value);
    input.dispatch_event(&Event::new("input").unwrap()).unwrap();
}

#[wasm_bindgen_test]
fn empty_login_shows_inline_error() {
    let target = host("login-empty");
    let (form, _ctx) = render_admin_login(&target);

    form.request_submit().unwrap();

    let error = target.query_selector(".form-error").unwrap().unwrap();
    assert!(!error.has_attribute("hidden"));
    assert_eq!(error.text_content().unwrap(), "Please fill in all fields");

    target.remove();
}

#[wasm_bindgen_test]
fn valid_login_dispatches_request_event() {
    let target = host("login-valid");
    let (form, _ctx) = render_admin_login(&target);

    let seen: Rc<RefCell<Option<JsValue>>> = Rc::new(RefCell::new(None));
    let sink = seen.clone();
    let listener = Closure::wrap(Box::new(move |e: CustomEvent| {
        *sink.borrow_mut() = Some(e.detail());
    }) as Box<dyn FnMut(CustomEvent)>);
    let window = web_sys::window().unwrap();
    window
        .add_event_listener_with_callback(LOGIN_REQUESTED_EVENT, listener.as_ref().unchecked_ref())
        .unwrap();

    type_into(&target, "#admin-username", " dispatcher ");
    type_into(&target, "#admin-password", "hunter2");
    form.request_submit().unwrap();

    window
        .remove_event_listener_with_callback(LOGIN_REQUESTED_EVENT, listener.as_ref().unchecked_ref())
        .unwrap();

    let detail = seen.borrow().clone().expect("loginRequested not dispatched");
    let role = js_sys::Reflect::get(&detail, &"role".into()).unwrap();
    let username = js_sys::Reflect::get(&detail, &"username".into()).unwrap();
    let password = js_sys::Reflect::get(&detail, &"password".into()).unwrap();
    assert_eq!(role.as_string().as_deref(), Some("admin"));
    assert_eq!(username.as_string().as_deref(), Some("dispatcher"));
    assert!(password.is_undefined());

    target.remove();
}

// ============================================================================
// Listeners y re-render
// ============================================================================

#[wasm_bindgen_test]
fn rerenders_do_not_accumulate_listeners() {
    let target = host("mount-listeners");
    let (mut app, _navigator) = app_at("/");

    app.mount("#mount-listeners").unwrap();
    // brand + dos botones de la home
    assert_eq!(app.listener_count(), 3);

    for _ in 0..5 {
        app.render().unwrap();
    }
    assert_eq!(app.listener_count(), 3);

    app.unmount();
    assert_eq!(app.listener_count(), 0);

    target.remove();
}

#[wasm_bindgen_test]
fn listeners_follow_the_rendered_view() {
    let target = host("mount-listeners-view");
    let (mut app, navigator) = app_at("/");

    app.mount("#mount-listeners-view").unwrap();
    navigator.push("/admin/login").unwrap();
    app.render().unwrap();

    // brand + submit + dos inputs + back
    assert_eq!(app.listener_count(), 5);

    target.remove();
}

#[wasm_bindgen_test]
async fn navigation_schedules_a_single_batched_render() {
    let target = host("mount-batched");
    let (mut app, navigator) = app_at("/");
    app.mount("#mount-batched").unwrap();
    let before = app.render_count();

    navigator.push("/admin/login").unwrap();
    navigator.push("/driver/login").unwrap();
    // Aún no: el re-render va en un Timeout(0)
    assert_eq!(app.render_count(), before);

    TimeoutFuture::new(20).await;

    assert_eq!(app.render_count(), before + 1);
    assert!(target.query_selector(".router-view .driver-login").unwrap().is_some());
    assert!(target.query_selector(".router-view .home").unwrap().is_none());

    target.remove();
}

#[wasm_bindgen_test]
async fn replaced_navigator_no_longer_drives_rendering() {
    let target = host("mount-replaced");
    let (mut app, first) = app_at("/");
    app.mount("#mount-replaced").unwrap();

    let second = Navigator::new(build_route_table().unwrap(), MemoryHistory::new("/admin/login"));
    app.use_navigator(second.clone());
    app.render().unwrap();
    let before = app.render_count();

    first.push("/driver/login").unwrap();
    TimeoutFuture::new(20).await;

    assert_eq!(app.render_count(), before);
    assert!(target.query_selector(".router-view .admin-login").unwrap().is_some());

    second.push("/").unwrap();
    TimeoutFuture::new(20).await;

    assert_eq!(app.render_count(), before + 1);
    assert!(target.query_selector(".router-view .home").unwrap().is_some());

    target.remove();
}

// ============================================================================
// BrowserHistory (window.history real)
// ============================================================================

fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

fn pathname() -> String {
    window().location().pathname().unwrap()
}

fn dispatch_popstate() {
    window()
        .dispatch_event(&PopStateEvent::new("popstate").unwrap())
        .unwrap();
}

/// Restaura la URL de la página de tests y quita el popstate al salir
struct UrlGuard(String);

impl UrlGuard {
    fn at(path: &str) -> Self {
        let location = window().location();
        let original = format!(
            "{}{}{}",
            location.pathname().unwrap(),
            location.search().unwrap(),
            location.hash().unwrap()
        );
        window()
            .history()
            .unwrap()
            .replace_state_with_url(&JsValue::NULL, "", Some(path))
            .unwrap();
        UrlGuard(original)
    }
}

impl Drop for UrlGuard {
    fn drop(&mut self) {
        BrowserHistory::unlisten();
        let _ = window()
            .history()
            .unwrap()
            .replace_state_with_url(&JsValue::NULL, "", Some(&self.0));
    }
}

fn browser_navigator(base: &str) -> Navigator {
    Navigator::new(build_route_table().unwrap(), BrowserHistory::new(base))
}

#[wasm_bindgen_test]
fn browser_push_updates_the_address_bar() {
    let _guard = UrlGuard::at("/");
    let navigator = browser_navigator("");
    assert_eq!(navigator.current_path(), "/");

    navigator.push("/admin/login?next=loads").unwrap();

    assert_eq!(pathname(), "/admin/login");
    assert_eq!(window().location().search().unwrap(), "?next=loads");
    assert_eq!(navigator.current_path(), "/admin/login");
}

#[wasm_bindgen_test]
fn browser_replace_keeps_history_length() {
    let _guard = UrlGuard::at("/");
    let navigator = browser_navigator("");
    let length = window().history().unwrap().length().unwrap();

    navigator.replace("/driver/login").unwrap();

    assert_eq!(window().history().unwrap().length().unwrap(), length);
    assert_eq!(pathname(), "/driver/login");
    assert_eq!(navigator.current_path(), "/driver/login");
}

#[wasm_bindgen_test]
fn browser_base_path_round_trip() {
    let _guard = UrlGuard::at("/portal/");
    let navigator = browser_navigator("/portal");
    assert_eq!(navigator.current_path(), "/");

    navigator.push("/driver/login").unwrap();

    assert_eq!(pathname(), "/portal/driver/login");
    assert_eq!(navigator.current_path(), "/driver/login");
    assert_eq!(navigator.current_route().map(|r| r.view_name()), Some("DriverLogin"));
}

#[wasm_bindgen_test]
fn popstate_resyncs_the_navigator() {
    let _guard = UrlGuard::at("/");
    let navigator = browser_navigator("");
    navigator.listen().unwrap();

    // Cambio externo (como back/forward): el navigator no se entera hasta el popstate
    window()
        .history()
        .unwrap()
        .push_state_with_url(&JsValue::NULL, "", Some("/admin/login"))
        .unwrap();
    assert_eq!(navigator.current_path(), "/");

    dispatch_popstate();

    assert_eq!(navigator.current_path(), "/admin/login");
}

#[wasm_bindgen_test]
fn second_listen_replaces_the_popstate_listener() {
    let _guard = UrlGuard::at("/");
    let first = browser_navigator("");
    let second = browser_navigator("");
    first.listen().unwrap();
    second.listen().unwrap();

    window()
        .history()
        .unwrap()
        .push_state_with_url(&JsValue::NULL, "", Some("/driver/login"))
        .unwrap();
    dispatch_popstate();

    assert_eq!(second.current_path(), "/driver/login");
    assert_eq!(first.current_path(), "/");
}

#[wasm_bindgen_test]
async fn clicking_a_link_navigates_without_reload() {
    let _guard = UrlGuard::at("/");
    let target = host("mount-click");
    let navigator = browser_navigator("");
    let mut app = App::new(AppShell);
    app.use_navigator(navigator.clone());
    app.mount("#mount-click").unwrap();

    // Un re-render antes del click: los listeners vigentes son los del árbol nuevo
    app.render().unwrap();
    let link = target
        .query_selector("a.btn-admin")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    link.click();

    assert_eq!(pathname(), "/admin/login");
    assert_eq!(navigator.current_path(), "/admin/login");

    TimeoutFuture::new(20).await;
    assert!(target.query_selector(".router-view .admin-login").unwrap().is_some());

    app.unmount();
    target.remove();
}

#[wasm_bindgen_test]
fn init_without_app_anchor_reports_target_not_found() {
    assert!(document().query_selector("#app").unwrap().is_none());

    let err = dispatch_portal::init().unwrap_err();

    assert_eq!(
        err,
        MountError::TargetNotFound {
            selector: "#app".to_string()
        }
    );
}
