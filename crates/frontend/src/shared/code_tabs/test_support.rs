use contracts::shared::code_tabs::group_slots;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::wasm_bindgen_test_configure;
use web_sys::{Element, HtmlElement};

use super::CodeTabs;

wasm_bindgen_test_configure!(run_in_browser);

pub const JS_CODE: &str = "console.log(1);";
pub const TS_CODE: &str = "const one: number = 1;\nconsole.log(one);";
pub const PY_CODE: &str = "print(1)";

/// Mounts a JS/TS + Python block into a fresh host attached to `<body>`.
pub fn mount_sample() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let host: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    document.body().unwrap().append_child(&host).unwrap();

    let groups = group_slots(
        &["JS", "JS", "Python"],
        &[JS_CODE, TS_CODE, PY_CODE],
        "JavaScript,TypeScript,Python",
    )
    .unwrap();

    leptos::mount::mount_to(host.clone(), move || view! { <CodeTabs groups=groups /> }).forget();
    host
}

/// Panels without the `hidden` attribute
pub fn visible_panels(host: &HtmlElement) -> Vec<Element> {
    let panels = host.query_selector_all(".code-tabs__panel").unwrap();
    (0..panels.length())
        .filter_map(|i| panels.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .filter(|panel| !panel.has_attribute("hidden"))
        .collect()
}

pub fn click_tab(host: &HtmlElement, index: u32) {
    let tabs = host.query_selector_all(".code-tabs__tab").unwrap();
    tabs.item(index)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

/// Lets pending reactive updates reach the DOM.
pub async fn settle() {
    TimeoutFuture::new(10).await;
}
