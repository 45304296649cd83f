use thiserror::Error;

/// Failure to resolve a user-supplied identifier into one of the closed
/// domain sets.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("unknown tab: {0}")]
    UnknownTab(String),

    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("unknown checklist item: {0}")]
    UnknownChecklistItem(String),
}
