use contracts::shared::code_tabs::SelectionState;
use leptos::html::Button;
use leptos::prelude::*;

use super::ids::WidgetIds;
use super::indicator::{on_fonts_ready, IndicatorGeometry};

/// Row of tabs, one per code group, with a sliding indicator under the
/// selected tab.
///
/// The indicator follows the selected tab's offset and width. It is
/// recomputed whenever the selection or the tab elements change, and once
/// more after the fonts have loaded.
#[component]
pub fn TabBar(
    /// Tab captions in tab order
    headings: Vec<String>,
    /// Shared selection of the widget
    selection: RwSignal<SelectionState>,
    ids: WidgetIds,
) -> impl IntoView {
    let tab_refs = StoredValue::new(
        headings
            .iter()
            .map(|_| NodeRef::<Button>::new())
            .collect::<Vec<_>>(),
    );
    let indicator = RwSignal::new(IndicatorGeometry::default());
    let active_tab = Memo::new(move |_| selection.get().tab_index);

    // Tab elements are only refs here; the selection signal stays the source of truth
    Effect::new(move |_| {
        let tab_index = active_tab.get();
        let element = tab_refs.with_value(|refs| refs.get(tab_index).and_then(|r| r.get()));
        if let Some(element) = element {
            indicator.set(IndicatorGeometry::from_element(&element));
        }
    });

    on_fonts_ready(move || {
        let tab_index = active_tab.get_untracked();
        let element =
            tab_refs.with_value(|refs| refs.get(tab_index).and_then(|r| r.get_untracked()));
        if let Some(element) = element {
            let geometry = IndicatorGeometry::from_element(&element);
            log::debug!("fonts ready, indicator moved to {:?}", geometry);
            indicator.set(geometry);
        }
    });

    let tabs = headings
        .into_iter()
        .enumerate()
        .map(|(index, heading)| {
            let node_ref = tab_refs.with_value(|refs| refs[index]);
            let is_active = move || active_tab.get() == index;

            view! {
                <button
                    type="button"
                    role="tab"
                    node_ref=node_ref
                    id=ids.tab(index)
                    aria-controls=ids.panel(index, 0)
                    aria-selected=move || is_active().to_string()
                    class="code-tabs__tab"
                    class:code-tabs__tab--active=is_active
                    on:click=move |_| {
                        log::debug!("code tab {} selected", index);
                        selection.update(|s| s.select_tab(index));
                    }
                >
                    {heading}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="code-tabs__tabs" role="tablist">
            {tabs}
            <span
                class="code-tabs__indicator"
                aria-hidden="true"
                style=move || indicator.get().style()
            ></span>
        </div>
    }
}
