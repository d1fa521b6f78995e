//! examinst-core: deterministic exam-instance materialization.
//!
//! Given an examination's full question pool and an (entrance token,
//! examinee) pair, this crate produces a reproducible, examinee-specific
//! subset and ordering of questions and answers, and redacts which answers
//! are correct. Privileged callers get the canonical pool untouched.

pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod redact;
pub mod rng;
pub mod seed;
pub mod select;
pub mod service;
pub mod traits;

pub use engine::materialize_instance;
pub use error::{InstanceError, QuestionDefect};
pub use model::{Caller, ExamInstance, ExamView, Examination, Role};
pub use service::{AccessError, ExamAccessService};
pub use traits::ExaminationSource;
