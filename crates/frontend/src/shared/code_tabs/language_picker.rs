use contracts::shared::code_tabs::{CodeGroup, SelectionState};
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Language selector for the active tab.
///
/// Rendered only while the active group has more than one variant.
#[component]
pub fn LanguagePicker(
    groups: StoredValue<Vec<CodeGroup>>,
    selection: RwSignal<SelectionState>,
) -> impl IntoView {
    let active_tab = Memo::new(move |_| selection.get().tab_index);

    let languages = move || {
        let tab_index = active_tab.get();
        groups.with_value(|groups| {
            groups
                .get(tab_index)
                .filter(|g| g.has_multiple_variants())
                .map(|g| {
                    g.languages()
                        .into_iter()
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
        })
    };

    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let Ok(language_index) = value.parse::<usize>() else {
            log::debug!("ignoring language option `{}`", value);
            return;
        };
        let accepted = groups.with_value(|groups| {
            let mut next = selection.get_untracked();
            let accepted = next.select_language(groups, language_index);
            if accepted {
                selection.set(next);
            }
            accepted
        });
        if accepted {
            log::debug!("code language {} selected", language_index);
        }
    };

    move || {
        languages().map(|languages| {
            view! {
                <label class="code-tabs__picker">
                    <select
                        class="code-tabs__select"
                        aria-label="Language"
                        prop:value=move || selection.get().language_index.to_string()
                        on:change=on_change
                    >
                        {languages
                            .into_iter()
                            .enumerate()
                            .map(|(index, language)| {
                                let is_selected = move || selection.get().language_index == index;
                                view! {
                                    <option value=index.to_string() selected=is_selected>
                                        {language}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    {icon("chevron-down")}
                </label>
            }
        })
    }
}
