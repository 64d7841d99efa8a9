//! Landing page entry point.
//!
//! Mounts the scroll-aware header and the swipeable slider over the stock
//! markup (`.header`, `#sliderTrack`, three `.dot`s).

use vitrine_app::PageLauncher;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn create_launcher() -> PageLauncher {
    PageLauncher::new().with_total_slides(3)
}

/// WASM entry point, run by the generated bindings on module load.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("mounting landing page behaviors");
    create_launcher().run()
}
