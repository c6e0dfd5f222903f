use casellese_web::config::CONFIG;
use casellese_web::App;

fn main() {
    console_error_panic_hook::set_once();
    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🧀 Casellese Storefront startet ({})", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
