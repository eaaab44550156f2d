use serde::{Deserialize, Serialize};

use super::config::CodeRecord;
use super::error::{CodeTabsError, CodeTabsResult};

/// One language rendition of a code sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeVariant {
    pub language: String,
    pub code: String,
}

/// A heading/language/code triple, aligned by slot position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSample {
    pub heading: String,
    pub language: String,
    pub code: String,
}

/// All code variants sharing one heading; rendered as a single tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeGroup {
    pub heading: String,
    pub variants: Vec<CodeVariant>,
}

impl CodeGroup {
    fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            variants: Vec::new(),
        }
    }

    pub fn languages(&self) -> Vec<&str> {
        self.variants.iter().map(|v| v.language.as_str()).collect()
    }

    pub fn codes(&self) -> Vec<&str> {
        self.variants.iter().map(|v| v.code.as_str()).collect()
    }

    pub fn variant(&self, index: usize) -> Option<&CodeVariant> {
        self.variants.get(index)
    }

    pub fn has_multiple_variants(&self) -> bool {
        self.variants.len() > 1
    }
}

/// Splits a comma-separated language list into trimmed labels.
///
/// A blank string yields no labels.
pub fn parse_languages(csv: &str) -> Vec<String> {
    if csv.trim().is_empty() {
        return Vec::new();
    }
    csv.split(',').map(|label| label.trim().to_string()).collect()
}

/// Groups samples by heading text, keeping first-occurrence tab order
/// and slot order inside each tab.
pub fn group_samples<I>(samples: I) -> Vec<CodeGroup>
where
    I: IntoIterator<Item = CodeSample>,
{
    let mut groups: Vec<CodeGroup> = Vec::new();

    for sample in samples {
        let heading = sample.heading.trim();
        let variant = CodeVariant {
            language: sample.language,
            code: sample.code,
        };

        match groups.iter().position(|g| g.heading == heading) {
            Some(index) => groups[index].variants.push(variant),
            None => {
                let mut group = CodeGroup::new(heading);
                group.variants.push(variant);
                groups.push(group);
            }
        }
    }

    groups
}

/// Builds tab groups from positionally aligned heading slots, code slots
/// and a comma-separated language list.
pub fn group_slots<H, C>(headings: &[H], codes: &[C], languages: &str) -> CodeTabsResult<Vec<CodeGroup>>
where
    H: AsRef<str>,
    C: AsRef<str>,
{
    if headings.len() != codes.len() {
        return Err(CodeTabsError::SlotCountMismatch {
            headings: headings.len(),
            codes: codes.len(),
        });
    }

    let labels = parse_languages(languages);
    if labels.len() != codes.len() {
        return Err(CodeTabsError::LanguageCountMismatch {
            languages: labels.len(),
            codes: codes.len(),
        });
    }

    let samples = headings
        .iter()
        .zip(codes)
        .zip(labels)
        .map(|((heading, code), language)| CodeSample {
            heading: heading.as_ref().to_string(),
            language,
            code: code.as_ref().to_string(),
        });

    Ok(group_samples(samples))
}

/// Builds tab groups from structured records, merging records that share
/// a heading.
pub fn group_records<I>(records: I) -> CodeTabsResult<Vec<CodeGroup>>
where
    I: IntoIterator<Item = CodeRecord>,
{
    let mut samples = Vec::new();

    for record in records {
        if record.code_variants.is_empty() {
            return Err(CodeTabsError::EmptyGroup {
                heading: record.heading,
            });
        }
        for variant in record.code_variants {
            samples.push(CodeSample {
                heading: record.heading.clone(),
                language: variant.language,
                code: variant.code,
            });
        }
    }

    Ok(group_samples(samples))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_slots_merges_identical_headings() {
        let groups = group_slots(
            &["JS", "JS", "Python"],
            &["console.log(1)", "console.log(1 as number)", "print(1)"],
            "JavaScript,TypeScript,Python",
        )
        .unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].heading, "JS");
        assert_eq!(groups[0].languages(), vec!["JavaScript", "TypeScript"]);
        assert_eq!(groups[0].codes(), vec!["console.log(1)", "console.log(1 as number)"]);
        assert_eq!(groups[1].heading, "Python");
        assert_eq!(groups[1].languages(), vec!["Python"]);
    }

    #[test]
    fn test_group_order_is_first_occurrence() {
        let groups = group_slots(
            &["Install", "Usage", "Install", "Usage", "Install"],
            &["a", "b", "c", "d", "e"],
            "sh,rs,ps1,py,bat",
        )
        .unwrap();

        let headings: Vec<&str> = groups.iter().map(|g| g.heading.as_str()).collect();
        assert_eq!(headings, vec!["Install", "Usage"]);
        assert_eq!(groups[0].codes(), vec!["a", "c", "e"]);
        assert_eq!(groups[0].languages(), vec!["sh", "ps1", "bat"]);
        assert_eq!(groups[1].codes(), vec!["b", "d"]);
    }

    #[test]
    fn test_distinct_headings_yield_one_tab_each() {
        let groups = group_slots(&["A", "B", "C"], &["1", "2", "3"], "x,y,z").unwrap();
        assert_eq!(groups.len(), 3);
        assert!(groups.iter().all(|g| g.variants.len() == 1));
        assert!(!groups[0].has_multiple_variants());
    }

    #[test]
    fn test_heading_whitespace_is_ignored() {
        let groups = group_slots(&["JS ", " JS"], &["a", "b"], "JavaScript, TypeScript").unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].heading, "JS");
        assert_eq!(groups[0].languages(), vec!["JavaScript", "TypeScript"]);
    }

    #[test]
    fn test_group_slots_rejects_count_mismatch() {
        let err = group_slots(&["A", "B"], &["1"], "x").unwrap_err();
        assert_eq!(err, CodeTabsError::SlotCountMismatch { headings: 2, codes: 1 });

        let err = group_slots(&["A", "B"], &["1", "2"], "x").unwrap_err();
        assert_eq!(err, CodeTabsError::LanguageCountMismatch { languages: 1, codes: 2 });
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        let none: [&str; 0] = [];
        assert!(group_slots(&none, &none, "").unwrap().is_empty());
    }

    #[test]
    fn test_parse_languages() {
        assert_eq!(parse_languages("Rust, Go ,C"), vec!["Rust", "Go", "C"]);
        assert!(parse_languages("   ").is_empty());
        assert_eq!(parse_languages("Rust,"), vec!["Rust", ""]);
    }

    #[test]
    fn test_group_records_merges_and_validates() {
        let records = vec![
            CodeRecord {
                heading: "Hello".to_string(),
                code_variants: vec![CodeVariant {
                    language: "Rust".to_string(),
                    code: "println!()".to_string(),
                }],
            },
            CodeRecord {
                heading: "Hello".to_string(),
                code_variants: vec![CodeVariant {
                    language: "Go".to_string(),
                    code: "fmt.Println()".to_string(),
                }],
            },
        ];
        let groups = group_records(records).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].languages(), vec!["Rust", "Go"]);

        let err = group_records(vec![CodeRecord {
            heading: "Empty".to_string(),
            code_variants: Vec::new(),
        }])
        .unwrap_err();
        assert_eq!(err, CodeTabsError::EmptyGroup { heading: "Empty".to_string() });
    }
}
