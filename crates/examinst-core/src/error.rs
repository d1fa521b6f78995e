//! Instance materialization error types.
//!
//! Both kinds describe bad examination data. Materialization is a pure
//! function of its inputs, so retrying on unchanged data always fails the same
//! way; callers surface these as "examination not ready".

use thiserror::Error;

/// Errors that can occur while materializing an exam instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    /// The examination advertises more questions than its pool holds.
    #[error(
        "malformed examination {examination_id}: {available} question(s) in pool, {required} required"
    )]
    MalformedExamination {
        examination_id: String,
        available: usize,
        required: usize,
    },

    /// A selected question cannot yield a valid answer set.
    #[error("malformed question {question_id}: {defect}")]
    MalformedQuestion {
        question_id: String,
        defect: QuestionDefect,
    },
}

/// Why a question's answer pool was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuestionDefect {
    /// No answer in the pool is marked correct.
    #[error("no correct answer in pool")]
    NoCorrectAnswer,

    /// The pool cannot fill the configured answer count.
    #[error("{available} answer(s) assembled, {required} required")]
    InsufficientAnswers { available: usize, required: usize },

    /// The question is configured to present zero answers.
    #[error("answer count must be at least 1")]
    ZeroAnswerCount,
}

impl InstanceError {
    /// The offending question, if the error is question-level.
    pub fn question_id(&self) -> Option<&str> {
        match self {
            InstanceError::MalformedQuestion { question_id, .. } => Some(question_id),
            InstanceError::MalformedExamination { .. } => None,
        }
    }
}
