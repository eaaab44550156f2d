//! Clipboard utilities for copying code samples
//!
//! The primary path selects a hidden mirror `<textarea>` and runs the
//! document `copy` command. Where that command is unavailable the Web
//! Clipboard API is used instead. Failures are never surfaced to the user.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

/// Copy the full text of a mirror field to the system clipboard
pub fn copy_mirror_text(mirror: &HtmlTextAreaElement) {
    mirror.select();

    if exec_copy_command() {
        return;
    }

    log::debug!("copy command unavailable, falling back to Clipboard API");
    copy_to_clipboard(&mirror.value());
}

/// Runs `document.execCommand("copy")` on the current selection.
fn exec_copy_command() -> bool {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return false,
    };

    match document.dyn_into::<HtmlDocument>() {
        Ok(html_document) => html_document.exec_command("copy").unwrap_or(false),
        Err(_) => false,
    }
}

/// Copy text to the system clipboard
///
/// Uses the Web Clipboard API. The write is asynchronous and its result is
/// only logged.
pub fn copy_to_clipboard(text: &str) {
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let navigator = window.navigator();
            // Missing outside secure contexts
            if !js_sys::Reflect::has(&navigator, &JsValue::from_str("clipboard")).unwrap_or(false) {
                log::debug!("Clipboard API unavailable");
                return;
            }
            let clipboard = navigator.clipboard();
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
                log::debug!("clipboard write failed: {:?}", err);
            }
        }
    });
}
