//! Redaction view: turns a selection into what the caller may see.

use crate::model::{
    Answer, AnswerView, ExamInstance, ExamView, Examination, Question, QuestionView, Role,
};

/// One selected question together with its selected answers, both borrowed
/// from the canonical aggregate.
#[derive(Debug, Clone)]
pub struct SelectedQuestion<'a> {
    pub question: &'a Question,
    pub answers: Vec<&'a Answer>,
}

/// Build the caller-facing view.
///
/// Privileged callers get a copy of the canonical aggregate and `selection`
/// is ignored. Examinees get the selection in order, with every answer
/// projected onto [`AnswerView`], which has no `correct` field.
pub fn materialize(
    examination: &Examination,
    selection: &[SelectedQuestion<'_>],
    role: Role,
) -> ExamView {
    match role {
        Role::Privileged => ExamView::Canonical(examination.clone()),
        Role::Examinee => ExamView::Instance(ExamInstance {
            id: examination.id.clone(),
            name: examination.name.clone(),
            duration_minutes: examination.duration_minutes,
            question_count: examination.question_count,
            questions: selection.iter().map(question_view).collect(),
        }),
    }
}

fn question_view(selected: &SelectedQuestion<'_>) -> QuestionView {
    QuestionView {
        id: selected.question.id.clone(),
        question: selected.question.question.clone(),
        answers: selected.answers.iter().map(|a| AnswerView::from(*a)).collect(),
    }
}
