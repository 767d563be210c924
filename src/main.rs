#[cfg(target_arch = "wasm32")]
fn main() {
    // El error ya quedó en consola; la página queda en blanco
    if let Err(e) = dispatch_portal::start() {
        web_sys::console::error_1(&e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {}
