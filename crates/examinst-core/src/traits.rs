//! Collaborator trait for loading examinations.
//!
//! Implemented by the `examinst-store` crate.

use async_trait::async_trait;

use crate::model::Examination;

/// Read side of the examination store (`LoadExamination`).
///
/// Implementations must return the fully populated aggregate: every question,
/// each with every answer. Whatever consistency the backing store offers is
/// the implementation's concern; the engine treats the result as a stable
/// snapshot for the duration of one call.
#[async_trait]
pub trait ExaminationSource: Send + Sync {
    /// Human-readable source name (e.g. "directory").
    fn name(&self) -> &str;

    /// Load one examination by id.
    async fn load_examination(&self, examination_id: &str) -> anyhow::Result<Examination>;
}
