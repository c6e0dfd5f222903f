/// Blocking, user-facing notice. Uses the browser alert dialog; native
/// builds (host tests) only log.
pub fn blocking_notice(message: &str) {
    log::warn!("🔔 {}", message);

    #[cfg(target_arch = "wasm32")]
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
