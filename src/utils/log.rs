//! Browser console logging.
//!
//! Off `wasm32` these are no-ops so native tests stay quiet.

#[allow(unused_variables)]
pub fn info(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&message.into());
}

#[allow(unused_variables)]
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
}
