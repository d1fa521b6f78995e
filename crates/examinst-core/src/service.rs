//! Exam access service: `GetExamInstance` on top of a read collaborator.

use std::sync::Arc;

use futures::future::try_join_all;
use thiserror::Error;

use crate::engine::materialize_instance;
use crate::error::InstanceError;
use crate::model::{Caller, ExamView, Role};
use crate::traits::ExaminationSource;

/// Errors surfaced by [`ExamAccessService`].
#[derive(Debug, Error)]
pub enum AccessError {
    /// The read collaborator failed; opaque to the engine.
    #[error("failed to load examination {examination_id}")]
    Load {
        examination_id: String,
        #[source]
        source: anyhow::Error,
    },

    /// The examination data cannot produce an instance.
    #[error(transparent)]
    Instance(#[from] InstanceError),
}

impl AccessError {
    /// `true` when the examination exists but its data is not ready to be
    /// served; the HTTP layer maps this to a client error.
    pub fn is_malformed(&self) -> bool {
        matches!(self, AccessError::Instance(_))
    }
}

/// Loads examinations and materializes the caller's view of them.
pub struct ExamAccessService {
    source: Arc<dyn ExaminationSource>,
}

impl ExamAccessService {
    pub fn new(source: Arc<dyn ExaminationSource>) -> Self {
        Self { source }
    }

    /// `GetExamInstance(tokenID, examinationID, subjectID, role)`.
    pub async fn get_exam_instance(
        &self,
        token_id: &str,
        examination_id: &str,
        caller: &Caller,
    ) -> Result<ExamView, AccessError> {
        tracing::debug!(
            "loading examination {examination_id} from {} for {} ({})",
            self.source.name(),
            caller.subject_id,
            caller.role
        );

        let examination = self
            .source
            .load_examination(examination_id)
            .await
            .map_err(|source| AccessError::Load {
                examination_id: examination_id.to_string(),
                source,
            })?;

        if examination.id != examination_id {
            return Err(AccessError::Load {
                examination_id: examination_id.to_string(),
                source: anyhow::anyhow!(
                    "source '{}' returned examination {}",
                    self.source.name(),
                    examination.id
                ),
            });
        }

        match materialize_instance(&examination, token_id, caller) {
            Ok(view) => {
                tracing::debug!(
                    "materialized examination {examination_id} for {} ({} question(s) in pool)",
                    caller.subject_id,
                    examination.questions.len()
                );
                Ok(view)
            }
            Err(e) => {
                match e.question_id() {
                    Some(question_id) => tracing::warn!(
                        "examination {examination_id} not ready, fix question {question_id}: {e}"
                    ),
                    None => tracing::warn!("examination {examination_id} not ready: {e}"),
                }
                Err(e.into())
            }
        }
    }

    /// Materialize the same examination for several subjects at once.
    ///
    /// Each subject is an independent request with its own load; the first
    /// failure aborts the batch. Results keep the order of `subject_ids`.
    pub async fn get_exam_instances(
        &self,
        token_id: &str,
        examination_id: &str,
        subject_ids: &[String],
        role: Role,
    ) -> Result<Vec<(String, ExamView)>, AccessError> {
        let requests = subject_ids.iter().map(|subject_id| async move {
            let caller = Caller {
                subject_id: subject_id.clone(),
                role,
            };
            let view = self
                .get_exam_instance(token_id, examination_id, &caller)
                .await?;
            Ok::<_, AccessError>((subject_id.clone(), view))
        });

        try_join_all(requests).await
    }
}
