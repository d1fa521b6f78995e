//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading examinations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No examination with this id is known to the source.
    #[error("examination not found: {0}")]
    ExaminationNotFound(String),

    /// Two files declare the same examination id.
    #[error("examination {id} defined twice: {} and {}", first.display(), second.display())]
    DuplicateExamination {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// An indexed file changed its examination id after indexing.
    #[error("{} now holds examination {found}, expected {expected}", path.display())]
    Stale {
        path: PathBuf,
        expected: String,
        found: String,
    },
}

impl StoreError {
    /// Returns `true` if the examination simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::ExaminationNotFound(_))
    }
}
