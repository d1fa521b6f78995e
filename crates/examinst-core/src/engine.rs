//! Instance materialization pipeline.
//!
//! `materialize_instance` is the pure core of `GetExamInstance`: no I/O, no
//! logging, no shared state. Every call owns its own generator, so any number
//! of calls may run concurrently.

use crate::error::InstanceError;
use crate::model::{Caller, ExamView, Examination, Role};
use crate::redact::{materialize, SelectedQuestion};
use crate::rng::SeedSequence;
use crate::seed::derive_seed;
use crate::select::{select_answers, select_questions};

/// Produce the view `caller` is entitled to for `examination` under
/// `token_id`.
///
/// Privileged callers get the canonical aggregate without any selection or
/// size checks. Examinees get the instance seeded by
/// `(token_id, examination.id, caller.subject_id)`; the first malformed pool
/// aborts the call.
pub fn materialize_instance(
    examination: &Examination,
    token_id: &str,
    caller: &Caller,
) -> Result<ExamView, InstanceError> {
    match caller.role {
        Role::Privileged => Ok(materialize(examination, &[], Role::Privileged)),
        Role::Examinee => {
            let selection = select_for(examination, token_id, &caller.subject_id)?;
            Ok(materialize(examination, &selection, Role::Examinee))
        }
    }
}

/// Run seed derivation and both selectors without building a view.
///
/// The returned references point into `examination`, so callers holding the
/// canonical data (graders, tests) can inspect `correct` on the exact answers
/// an examinee was shown.
pub fn select_for<'a>(
    examination: &'a Examination,
    token_id: &str,
    subject_id: &str,
) -> Result<Vec<SelectedQuestion<'a>>, InstanceError> {
    let mut rng = SeedSequence::new(derive_seed(token_id, &examination.id, subject_id));

    select_questions(examination, &mut rng)?
        .into_iter()
        .map(|question| {
            let answers = select_answers(question, &mut rng)?;
            Ok(SelectedQuestion { question, answers })
        })
        .collect()
}
