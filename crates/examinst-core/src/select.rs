//! Question and answer selection.
//!
//! Both selectors borrow from the canonical aggregate and never mutate it.
//! Draw order is part of the output contract: questions are shuffled first,
//! then each selected question's answers, in selected order, all from the
//! same generator.

use crate::error::{InstanceError, QuestionDefect};
use crate::model::{Answer, Examination, Question};
use crate::rng::SeedSequence;

/// Shuffle the question pool and keep the first `question_count` entries.
///
/// Fails before drawing anything if the pool is smaller than the configured
/// count; an instance never carries fewer questions than promised.
pub fn select_questions<'a>(
    examination: &'a Examination,
    rng: &mut SeedSequence,
) -> Result<Vec<&'a Question>, InstanceError> {
    let required = examination.question_count;
    if examination.questions.len() < required {
        return Err(InstanceError::MalformedExamination {
            examination_id: examination.id.clone(),
            available: examination.questions.len(),
            required,
        });
    }

    let mut pool: Vec<&Question> = examination.questions.iter().collect();
    rng.shuffle_slice(&mut pool);
    pool.truncate(required);
    Ok(pool)
}

/// Pick `answer_count` answers for one question, exactly one of them correct.
///
/// 1. shuffle the whole pool;
/// 2. take the first correct answer in shuffled order;
/// 3. fill up with incorrect answers in shuffled order;
/// 4. shuffle the assembled set again so the correct answer's slot is random.
///
/// The second shuffle matters: without it the correct answer would always
/// sit in the first slot.
pub fn select_answers<'a>(
    question: &'a Question,
    rng: &mut SeedSequence,
) -> Result<Vec<&'a Answer>, InstanceError> {
    let malformed = |defect| InstanceError::MalformedQuestion {
        question_id: question.id.clone(),
        defect,
    };

    let required = question.answer_count;
    if required == 0 {
        return Err(malformed(QuestionDefect::ZeroAnswerCount));
    }

    let mut pool: Vec<&Answer> = question.answers.iter().collect();
    rng.shuffle_slice(&mut pool);

    let correct = pool
        .iter()
        .copied()
        .find(|a| a.correct)
        .ok_or_else(|| malformed(QuestionDefect::NoCorrectAnswer))?;

    let mut selected = Vec::with_capacity(required);
    selected.push(correct);
    selected.extend(
        pool.iter()
            .copied()
            .filter(|a| !a.correct)
            .take(required - 1),
    );

    if selected.len() < required {
        return Err(malformed(QuestionDefect::InsufficientAnswers {
            available: selected.len(),
            required,
        }));
    }

    rng.shuffle_slice(&mut selected);
    Ok(selected)
}
