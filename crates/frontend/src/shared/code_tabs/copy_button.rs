use leptos::html::Textarea;
use leptos::prelude::*;

use crate::shared::clipboard::copy_mirror_text;
use crate::shared::icons::icon;

/// Copies the text of its panel's mirror field
#[component]
pub fn CopyButton(mirror: NodeRef<Textarea>) -> impl IntoView {
    let handle_copy = move |_| {
        if let Some(textarea) = mirror.get_untracked() {
            copy_mirror_text(&textarea);
        }
    };

    view! {
        <button
            type="button"
            class="code-tabs__copy"
            title="Copy to clipboard"
            aria-label="Copy to clipboard"
            on:click=handle_copy
        >
            {icon("copy")}
        </button>
    }
}
