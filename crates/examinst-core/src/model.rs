//! Core data model types for examinst.
//!
//! The canonical aggregate (`Examination` → `Question` → `Answer`) is owned by
//! the storage side and is read-only here. The examinee-facing views
//! (`ExamInstance`, `QuestionView`, `AnswerView`) are built fresh for every
//! request and carry no correctness information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An examination with its full question pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Examination {
    /// Unique identifier for this examination.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Allotted time for one sitting.
    #[serde(default)]
    pub duration_minutes: u32,
    /// How many questions every instance must contain.
    pub question_count: usize,
    /// The question pool, in storage order.
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// A single question with its answer pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique identifier for this question.
    pub id: String,
    /// The question text.
    #[serde(default)]
    pub question: String,
    /// How many answers an instance presents for this question.
    pub answer_count: usize,
    /// The answer pool, in storage order.
    #[serde(default)]
    pub answers: Vec<Answer>,
}

/// A candidate answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// Unique identifier for this answer.
    pub id: String,
    /// The answer text.
    #[serde(default)]
    pub answer: String,
    /// Whether this is a correct answer.
    #[serde(default)]
    pub correct: bool,
}

/// What the caller is entitled to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Exam author or operator: sees the canonical pools.
    Privileged,
    /// Someone sitting the exam: sees a redacted instance.
    Examinee,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Privileged => write!(f, "privileged"),
            Role::Examinee => write!(f, "examinee"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "privileged" | "admin" => Ok(Role::Privileged),
            "examinee" | "student" => Ok(Role::Examinee),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// The authenticated caller, as handed over by the auth layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub subject_id: String,
    pub role: Role,
}

impl Caller {
    pub fn privileged(subject_id: impl Into<String>) -> Self {
        Self {
            subject_id: subject_id.into(),
            role: Role::Privileged,
        }
    }

    pub fn examinee(subject_id: impl Into<String>) -> Self {
        Self {
            subject_id: subject_id.into(),
            role: Role::Examinee,
        }
    }
}

/// A per-examinee materialization of an examination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamInstance {
    pub id: String,
    pub name: String,
    pub duration_minutes: u32,
    pub question_count: usize,
    /// Selected questions, in presentation order.
    pub questions: Vec<QuestionView>,
}

/// A selected question as shown to an examinee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub id: String,
    pub question: String,
    /// Selected answers, in presentation order.
    pub answers: Vec<AnswerView>,
}

/// A selected answer as shown to an examinee. There is no `correct` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerView {
    pub id: String,
    pub answer: String,
}

impl From<&Answer> for AnswerView {
    fn from(answer: &Answer) -> Self {
        Self {
            id: answer.id.clone(),
            answer: answer.answer.clone(),
        }
    }
}

/// What `GetExamInstance` hands back to the serialization layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExamView {
    /// The unshuffled aggregate with `correct` visible.
    Canonical(Examination),
    /// The redacted per-examinee instance.
    Instance(ExamInstance),
}

impl ExamView {
    pub fn examination_id(&self) -> &str {
        match self {
            ExamView::Canonical(exam) => &exam.id,
            ExamView::Instance(instance) => &instance.id,
        }
    }

    /// Returns the instance, if this is the examinee view.
    pub fn as_instance(&self) -> Option<&ExamInstance> {
        match self {
            ExamView::Instance(instance) => Some(instance),
            ExamView::Canonical(_) => None,
        }
    }

    /// Returns the canonical aggregate, if this is the privileged view.
    pub fn as_canonical(&self) -> Option<&Examination> {
        match self {
            ExamView::Canonical(exam) => Some(exam),
            ExamView::Instance(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_display_and_parse() {
        assert_eq!(Role::Privileged.to_string(), "privileged");
        assert_eq!(Role::Examinee.to_string(), "examinee");
        assert_eq!("Privileged".parse::<Role>().unwrap(), Role::Privileged);
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Privileged);
        assert_eq!("student".parse::<Role>().unwrap(), Role::Examinee);
        assert!("grader".parse::<Role>().is_err());
    }

    #[test]
    fn caller_constructors() {
        let c = Caller::examinee("stu1");
        assert_eq!(c.subject_id, "stu1");
        assert_eq!(c.role, Role::Examinee);
        assert_eq!(Caller::privileged("adm1").role, Role::Privileged);
    }

    #[test]
    fn examination_uses_camel_case_fields() {
        let exam = Examination {
            id: "exa1".into(),
            name: "Midterm".into(),
            duration_minutes: 90,
            question_count: 1,
            questions: vec![Question {
                id: "q1".into(),
                question: "2 + 2 = ?".into(),
                answer_count: 1,
                answers: vec![Answer {
                    id: "a1".into(),
                    answer: "4".into(),
                    correct: true,
                }],
            }],
        };
        let json = serde_json::to_value(&exam).unwrap();
        assert_eq!(json["questionCount"], 1);
        assert_eq!(json["durationMinutes"], 90);
        assert_eq!(json["questions"][0]["answerCount"], 1);
        assert_eq!(json["questions"][0]["answers"][0]["correct"], true);
    }

    #[test]
    fn answer_view_has_no_correct_field() {
        let view = AnswerView::from(&Answer {
            id: "a1".into(),
            answer: "4".into(),
            correct: true,
        });
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("correct").is_none());
        assert_eq!(json["answer"], "4");
    }
}
