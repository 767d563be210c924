pub mod renderable;
pub mod link;
pub mod login_form;
pub mod shell;
pub mod home;
pub mod admin_login;
pub mod driver_login;

pub use renderable::{Renderable, ViewContext};
pub use link::render_link;
pub use login_form::{render_login_form, validate_credentials, LoginRequest, LoginRole};
pub use shell::AppShell;
pub use home::Home;
pub use admin_login::AdminLogin;
pub use driver_login::DriverLogin;
