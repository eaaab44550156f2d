//! Property-key slots: `heading1` / `code1`, `heading2` / `code2`, ...
//!
//! Headings and codes are paired by position after ordering their keys by
//! suffix. Integer suffixes sort numerically and come before any other suffix.

use super::error::{CodeTabsError, CodeTabsResult};

const HEADING_PREFIX: &str = "heading";
const CODE_PREFIX: &str = "code";

/// A heading/code pair taken from the property map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub heading: String,
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Heading,
    Code,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SlotSuffix {
    Numeric(u64),
    Text(String),
}

/// Parsed slot property key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotKey {
    pub kind: SlotKind,
    pub suffix: SlotSuffix,
}

impl SlotKey {
    /// Returns `None` for keys that are not slot properties.
    pub fn parse(key: &str) -> Option<Self> {
        let (kind, rest) = if let Some(rest) = key.strip_prefix(HEADING_PREFIX) {
            (SlotKind::Heading, rest)
        } else if let Some(rest) = key.strip_prefix(CODE_PREFIX) {
            (SlotKind::Code, rest)
        } else {
            return None;
        };

        let numeric = if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
            rest.parse::<u64>().ok()
        } else {
            None
        };
        let suffix = match numeric {
            Some(n) => SlotSuffix::Numeric(n),
            None => SlotSuffix::Text(rest.to_string()),
        };

        Some(Self { kind, suffix })
    }
}

/// Collects heading and code properties into positionally paired slots.
/// Keys that are neither are skipped.
pub fn collect_slots<'a, I>(entries: I) -> CodeTabsResult<Vec<Slot>>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut headings: Vec<(SlotSuffix, &str)> = Vec::new();
    let mut codes: Vec<(SlotSuffix, &str)> = Vec::new();

    for (key, value) in entries {
        match SlotKey::parse(key) {
            Some(SlotKey { kind: SlotKind::Heading, suffix }) => headings.push((suffix, value)),
            Some(SlotKey { kind: SlotKind::Code, suffix }) => codes.push((suffix, value)),
            None => {}
        }
    }

    if headings.len() != codes.len() {
        return Err(CodeTabsError::SlotCountMismatch {
            headings: headings.len(),
            codes: codes.len(),
        });
    }

    headings.sort_by(|a, b| a.0.cmp(&b.0));
    codes.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(headings
        .into_iter()
        .zip(codes)
        .map(|((_, heading), (_, code))| Slot {
            heading: heading.to_string(),
            code: code.to_string(),
        })
        .collect())
}
