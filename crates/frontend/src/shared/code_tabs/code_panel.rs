use contracts::shared::code_tabs::{CodeVariant, SelectionState};
use leptos::html::Textarea;
use leptos::prelude::*;

use super::copy_button::CopyButton;

/// Keeps the mirror out of view on pages that don't load the stylesheet.
const MIRROR_STYLE: &str = "position: fixed; left: -9999px; top: 0; opacity: 0;";

/// One (tab, language) code panel.
///
/// Every panel stays mounted; only the one matching the selection is shown.
/// The off-screen read-only `<textarea>` mirrors the code text and is what
/// the copy button selects, so the clipboard never sees highlighting markup.
#[component]
pub fn CodePanel(
    tab_index: usize,
    language_index: usize,
    variant: CodeVariant,
    selection: RwSignal<SelectionState>,
    panel_id: String,
    tab_id: String,
) -> impl IntoView {
    let mirror_ref = NodeRef::<Textarea>::new();
    let is_visible = move || selection.get().is_panel_visible(tab_index, language_index);
    let code_class = language_class(&variant.language);
    let code_text = variant.code.clone();

    view! {
        <div
            class="code-tabs__panel"
            class:code-tabs__panel--hidden=move || !is_visible()
            hidden=move || !is_visible()
            role="tabpanel"
            id=panel_id
            aria-labelledby=tab_id
            aria-hidden=move || (!is_visible()).to_string()
            data-language=variant.language
        >
            <pre class="code-tabs__pre">
                <code class=code_class>{code_text}</code>
            </pre>
            <textarea
                node_ref=mirror_ref
                class="code-tabs__mirror"
                readonly=true
                tabindex="-1"
                aria-hidden="true"
                style=MIRROR_STYLE
                prop:value=variant.code
            ></textarea>
            <CopyButton mirror=mirror_ref />
        </div>
    }
}

/// `language-*` class for syntax highlighters, e.g. `C++` → `language-cpp`.
pub fn language_class(language: &str) -> String {
    let lower = language.trim().to_lowercase();
    let slug = match lower.as_str() {
        "c++" => "cpp".to_string(),
        "c#" => "csharp".to_string(),
        "f#" => "fsharp".to_string(),
        _ => {
            let mut slug = String::with_capacity(lower.len());
            for ch in lower.chars() {
                if ch.is_alphanumeric() {
                    slug.push(ch);
                } else if !slug.ends_with('-') {
                    slug.push('-');
                }
            }
            slug.trim_matches('-').to_string()
        }
    };

    if slug.is_empty() {
        "language-none".to_string()
    } else {
        format!("language-{}", slug)
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::{HtmlElement, HtmlTextAreaElement};

    use crate::shared::code_tabs::test_support::{
        click_tab, mount_sample, settle, visible_panels, JS_CODE, PY_CODE,
    };

    fn mirror_of(panel: &web_sys::Element) -> HtmlTextAreaElement {
        panel
            .query_selector(".code-tabs__mirror")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap()
    }

    #[wasm_bindgen_test]
    async fn test_single_visible_panel_follows_selection() {
        let host = mount_sample();
        settle().await;

        let visible = visible_panels(&host);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].get_attribute("data-language").as_deref(), Some("JavaScript"));
        assert_eq!(mirror_of(&visible[0]).value(), JS_CODE);

        click_tab(&host, 1);
        settle().await;

        let visible = visible_panels(&host);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].get_attribute("data-language").as_deref(), Some("Python"));
        assert_eq!(mirror_of(&visible[0]).value(), PY_CODE);
    }

    #[wasm_bindgen_test]
    async fn test_copy_selects_exactly_the_active_code() {
        let host = mount_sample();
        settle().await;

        let visible = visible_panels(&host);
        let mirror = mirror_of(&visible[0]);
        let copy_button: HtmlElement = visible[0]
            .query_selector(".code-tabs__copy")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        copy_button.click();

        assert_eq!(mirror.value(), JS_CODE);
        assert_eq!(mirror.selection_start().unwrap(), Some(0));
        assert_eq!(mirror.selection_end().unwrap(), Some(JS_CODE.len() as u32));
    }

    #[wasm_bindgen_test]
    async fn test_mirror_is_kept_off_screen_inline() {
        let host = mount_sample();
        settle().await;

        let mirror = mirror_of(&visible_panels(&host)[0]);
        let style = mirror.get_attribute("style").unwrap_or_default();
        assert!(style.contains("position: fixed"));
        assert!(mirror.read_only());
    }
}
