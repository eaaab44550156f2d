use contracts::shared::code_tabs::{CodeGroup, SelectionState, Theme};
use leptos::prelude::*;

use super::code_panel::CodePanel;
use super::ids::WidgetIds;
use super::language_picker::LanguagePicker;
use super::tab_bar::TabBar;
use crate::shared::theme::{container_class, style_vars};

/// Tabbed, multi-language code block.
///
/// `groups` must already be validated (see `CodeTabsConfig::into_groups`).
/// Each group is one tab; groups with several variants get a language
/// picker. Selecting a tab always shows its first variant.
#[component]
pub fn CodeTabs(
    groups: Vec<CodeGroup>,
    /// Colour scheme, dark by default
    #[prop(optional)]
    theme: Theme,
) -> impl IntoView {
    let ids = WidgetIds::new();
    let selection = RwSignal::new(SelectionState::default());

    log::debug!(
        "code tabs {} created with {} tabs",
        ids.instance(),
        groups.len()
    );

    let headings: Vec<String> = groups.iter().map(|g| g.heading.clone()).collect();
    let panels: Vec<_> = groups
        .iter()
        .enumerate()
        .flat_map(|(tab_index, group)| {
            group
                .variants
                .iter()
                .cloned()
                .enumerate()
                .map(move |(language_index, variant)| (tab_index, language_index, variant))
        })
        .collect();
    let groups = StoredValue::new(groups);

    let panels = panels
        .into_iter()
        .map(|(tab_index, language_index, variant)| {
            view! {
                <CodePanel
                    tab_index=tab_index
                    language_index=language_index
                    variant=variant
                    selection=selection
                    panel_id=ids.panel(tab_index, language_index)
                    tab_id=ids.tab(tab_index)
                />
            }
        })
        .collect_view();

    view! {
        <div class=container_class(theme) style=style_vars(theme) data-code-tabs=ids.instance().to_string()>
            <div class="code-tabs__header">
                <TabBar headings=headings selection=selection ids=ids.clone() />
                <LanguagePicker groups=groups selection=selection />
            </div>
            <div class="code-tabs__body">{panels}</div>
        </div>
    }
}
