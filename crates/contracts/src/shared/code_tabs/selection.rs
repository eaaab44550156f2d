use super::group::{CodeGroup, CodeVariant};

/// Currently selected tab and language inside that tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub tab_index: usize,
    pub language_index: usize,
}

impl SelectionState {
    /// Selects a tab; the language always goes back to the first variant.
    pub fn select_tab(&mut self, tab_index: usize) {
        self.tab_index = tab_index;
        self.language_index = 0;
    }

    /// Selects a language within the current tab. Returns `false` and keeps
    /// the state when the index is outside the active group.
    pub fn select_language(&mut self, groups: &[CodeGroup], language_index: usize) -> bool {
        let in_range = groups
            .get(self.tab_index)
            .is_some_and(|g| language_index < g.variants.len());
        if in_range {
            self.language_index = language_index;
        }
        in_range
    }

    pub fn is_tab_active(&self, tab_index: usize) -> bool {
        self.tab_index == tab_index
    }

    /// Whether the panel for (tab, variant) is the visible one.
    pub fn is_panel_visible(&self, tab_index: usize, language_index: usize) -> bool {
        self.tab_index == tab_index && self.language_index == language_index
    }

    pub fn active_group<'a>(&self, groups: &'a [CodeGroup]) -> Option<&'a CodeGroup> {
        groups.get(self.tab_index)
    }

    pub fn active_variant<'a>(&self, groups: &'a [CodeGroup]) -> Option<&'a CodeVariant> {
        self.active_group(groups)
            .and_then(|g| g.variant(self.language_index))
    }
}
