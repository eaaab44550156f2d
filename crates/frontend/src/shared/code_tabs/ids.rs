use uuid::Uuid;

/// DOM ids of one widget instance, used to link tabs and panels
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetIds {
    instance: String,
}

impl WidgetIds {
    pub fn new() -> Self {
        Self::with_instance(Uuid::new_v4().simple().to_string())
    }

    pub fn with_instance(instance: impl Into<String>) -> Self {
        Self {
            instance: instance.into(),
        }
    }

    pub fn instance(&self) -> &str {
        &self.instance
    }

    pub fn tab(&self, tab_index: usize) -> String {
        format!("code-tabs-{}-tab-{}", self.instance, tab_index)
    }

    pub fn panel(&self, tab_index: usize, language_index: usize) -> String {
        format!("code-tabs-{}-panel-{}-{}", self.instance, tab_index, language_index)
    }
}

impl Default for WidgetIds {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_scoped_to_instance() {
        let ids = WidgetIds::with_instance("abc");
        assert_eq!(ids.tab(1), "code-tabs-abc-tab-1");
        assert_eq!(ids.panel(1, 2), "code-tabs-abc-panel-1-2");
    }

    #[test]
    fn test_new_instances_are_unique() {
        let a = WidgetIds::new();
        let b = WidgetIds::new();
        assert_ne!(a.instance(), b.instance());
        assert_eq!(a.instance().len(), 32);
    }
}
