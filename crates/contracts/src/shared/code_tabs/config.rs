use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::{CodeTabsError, CodeTabsResult};
use super::group::{group_records, group_slots, CodeGroup, CodeVariant};
use super::slot::{collect_slots, SlotKey};
use super::theme::Theme;

/// Structured tab input: one heading with its language variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeRecord {
    pub heading: String,
    #[serde(default)]
    pub code_variants: Vec<CodeVariant>,
}

/// Configuration of one embedded code tabs block.
///
/// Accepts either `groups` (structured records) or the flat
/// `languages` + `headingN` / `codeN` property shape. When `groups` is
/// present and non-empty the flat properties are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeTabsConfig {
    #[serde(default, deserialize_with = "lenient_theme")]
    pub theme: Theme,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<CodeRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<String>,
    #[serde(flatten)]
    pub properties: BTreeMap<String, Value>,
}

/// Unknown or missing theme names fall back to the default theme.
fn lenient_theme<'de, D>(deserializer: D) -> Result<Theme, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|s| Theme::from_str(&s)).unwrap_or_default())
}

impl CodeTabsConfig {
    pub fn from_json(json: &str) -> CodeTabsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates the input and builds the tab groups.
    pub fn into_groups(self) -> CodeTabsResult<Vec<CodeGroup>> {
        if !self.groups.is_empty() {
            return group_records(self.groups);
        }

        let mut entries = Vec::new();
        for (key, value) in &self.properties {
            if SlotKey::parse(key).is_none() {
                continue;
            }
            let text = value.as_str().ok_or_else(|| {
                CodeTabsError::InvalidConfig(format!("property `{}` must be a string", key))
            })?;
            entries.push((key.as_str(), text));
        }

        let slots = collect_slots(entries)?;
        let headings: Vec<&str> = slots.iter().map(|s| s.heading.as_str()).collect();
        let codes: Vec<&str> = slots.iter().map(|s| s.code.as_str()).collect();

        group_slots(&headings, &codes, self.languages.as_deref().unwrap_or_default())
    }
}
