//! Mounting code tabs blocks embedded in documentation pages.
//!
//! A page embeds a block as
//! `<script type="application/json" data-code-tabs>{ ...config... }</script>`.
//! The widget is mounted into a host `<div>` inserted right before the script.

use contracts::shared::code_tabs::{CodeGroup, CodeTabsConfig, CodeTabsError, Theme};
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::shared::code_tabs::CodeTabs;

pub const EMBED_SELECTOR: &str = r#"script[type="application/json"][data-code-tabs]"#;
pub const HOST_CLASS: &str = "code-tabs-host";

pub fn to_js_error(err: CodeTabsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Mounts every embedded block in the current document.
///
/// Blocks with invalid configs are logged and skipped. Returns the number of
/// mounted blocks.
pub fn mount_embedded() -> usize {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return 0,
    };

    let scripts = match document.query_selector_all(EMBED_SELECTOR) {
        Ok(list) => list,
        Err(err) => {
            log::error!("code tabs lookup failed: {:?}", err);
            return 0;
        }
    };

    let mut mounted = 0;
    for i in 0..scripts.length() {
        let Some(script) = scripts.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };

        let json = script.text_content().unwrap_or_default();
        let config = match CodeTabsConfig::from_json(&json) {
            Ok(config) => config,
            Err(err) => {
                log::error!("skipping code tabs block {}: {}", i, err);
                continue;
            }
        };

        let host = match insert_host(&document, &script) {
            Ok(host) => host,
            Err(err) => {
                log::error!("cannot insert code tabs host {}: {:?}", i, err);
                continue;
            }
        };

        match mount_config(host, config) {
            Ok(()) => mounted += 1,
            Err(err) => log::error!("skipping code tabs block {}: {}", i, err),
        }
    }

    mounted
}

/// Validates `config` and mounts the widget into `host`.
pub fn mount_config(host: HtmlElement, config: CodeTabsConfig) -> Result<(), CodeTabsError> {
    let theme = config.theme;
    let groups = config.into_groups()?;
    mount_groups(host, theme, groups);
    Ok(())
}

fn mount_groups(host: HtmlElement, theme: Theme, groups: Vec<CodeGroup>) {
    let handle = leptos::mount::mount_to(host, move || {
        view! { <CodeTabs groups=groups theme=theme /> }
    });
    // Blocks live as long as the page
    handle.forget();
}

fn insert_host(document: &Document, script: &Element) -> Result<HtmlElement, JsValue> {
    let host = document.create_element("div")?;
    host.set_class_name(HOST_CLASS);
    script.before_with_node_1(&host)?;
    host.dyn_into::<HtmlElement>().map_err(JsValue::from)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::shared::code_tabs::test_support::settle;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    async fn test_mount_embedded_inserts_host_before_script() {
        let document = web_sys::window().unwrap().document().unwrap();
        let script = document.create_element("script").unwrap();
        script.set_attribute("type", "application/json").unwrap();
        script.set_attribute("data-code-tabs", "").unwrap();
        script.set_text_content(Some(
            r#"{ "languages": "Rust", "heading1": "Hello", "code1": "println!(\"hi\");" }"#,
        ));
        document.body().unwrap().append_child(&script).unwrap();

        assert_eq!(mount_embedded(), 1);
        settle().await;

        let host = script.previous_element_sibling().unwrap();
        assert_eq!(host.class_name(), HOST_CLASS);
        let panels = host.query_selector_all(".code-tabs__panel").unwrap();
        assert_eq!(panels.length(), 1);
    }
}
