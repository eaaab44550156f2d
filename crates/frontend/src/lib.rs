pub mod app;
pub mod embed;
pub mod shared;

use contracts::shared::code_tabs::{CodeTabsConfig, CodeTabsError};
use wasm_bindgen::prelude::{wasm_bindgen, JsValue};

fn init_logging() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}

/// Mounts the showcase page to `<body>`
#[wasm_bindgen]
pub fn mount_demo() {
    init_logging();
    leptos::mount::mount_to_body(app::App);
}

/// Mounts a code tabs block into `host` from a plain JS config object
#[wasm_bindgen]
pub fn mount_code_tabs(host: web_sys::HtmlElement, config: JsValue) -> Result<(), JsValue> {
    let config: CodeTabsConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|err| CodeTabsError::InvalidConfig(err.to_string()))
        .map_err(embed::to_js_error)?;
    embed::mount_config(host, config).map_err(embed::to_js_error)
}

#[wasm_bindgen(start)]
pub fn start() {
    init_logging();

    let mounted = embed::mount_embedded();
    log::debug!("mounted {} embedded code tabs blocks", mounted);
}
