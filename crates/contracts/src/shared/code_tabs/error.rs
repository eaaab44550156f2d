use thiserror::Error;

/// Result of building code tabs from external input
pub type CodeTabsResult<T> = Result<T, CodeTabsError>;

/// Rejected code tabs input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeTabsError {
    #[error("{headings} headings supplied for {codes} code samples")]
    SlotCountMismatch { headings: usize, codes: usize },

    #[error("{languages} language labels supplied for {codes} code samples")]
    LanguageCountMismatch { languages: usize, codes: usize },

    #[error("tab `{heading}` has no code variants")]
    EmptyGroup { heading: String },

    #[error("invalid code tabs config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for CodeTabsError {
    fn from(err: serde_json::Error) -> Self {
        CodeTabsError::InvalidConfig(err.to_string())
    }
}
