//! TOML examination parser.
//!
//! Loads examinations from TOML files and directories, and validates them
//! against the conditions that would make materialization fail.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Answer, Examination, Question};

/// Intermediate TOML structure for parsing examination files.
#[derive(Debug, Deserialize)]
struct TomlExaminationFile {
    examination: TomlExaminationHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlExaminationHeader {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    duration_minutes: u32,
    question_count: usize,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    #[serde(default)]
    question: String,
    answer_count: usize,
    #[serde(default)]
    answers: Vec<TomlAnswer>,
}

#[derive(Debug, Deserialize)]
struct TomlAnswer {
    id: String,
    answer: String,
    #[serde(default)]
    correct: bool,
}

/// Parse a single TOML file into an `Examination`.
pub fn parse_examination(path: &Path) -> Result<Examination> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read examination file: {}", path.display()))?;

    parse_examination_str(&content, path)
}

/// Parse a TOML string into an `Examination`.
pub fn parse_examination_str(content: &str, source_path: &Path) -> Result<Examination> {
    let parsed: TomlExaminationFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| Question {
            id: q.id,
            question: q.question,
            answer_count: q.answer_count,
            answers: q
                .answers
                .into_iter()
                .map(|a| Answer {
                    id: a.id,
                    answer: a.answer,
                    correct: a.correct,
                })
                .collect(),
        })
        .collect();

    Ok(Examination {
        id: parsed.examination.id,
        name: parsed.examination.name,
        duration_minutes: parsed.examination.duration_minutes,
        question_count: parsed.examination.question_count,
        questions,
    })
}

/// Recursively load all `.toml` examination files from a directory.
///
/// Files that fail to parse are skipped with a warning.
pub fn load_examination_directory(dir: &Path) -> Result<Vec<Examination>> {
    Ok(scan_examination_directory(dir)?
        .into_iter()
        .map(|(_, exam)| exam)
        .collect())
}

/// Like [`load_examination_directory`], but keeps the file each examination
/// came from.
pub fn scan_examination_directory(dir: &Path) -> Result<Vec<(PathBuf, Examination)>> {
    let scan = scan_directory(dir)?;
    for (path, e) in &scan.failures {
        tracing::warn!("skipping {}: {:#}", path.display(), e);
    }
    Ok(scan.examinations)
}

/// Everything found under an examination directory, parse failures included.
#[derive(Debug, Default)]
pub struct DirectoryScan {
    /// Parsed examinations, sorted by path.
    pub examinations: Vec<(PathBuf, Examination)>,
    /// `.toml` files that could not be read or parsed, sorted by path.
    pub failures: Vec<(PathBuf, anyhow::Error)>,
}

/// Recursively parse every `.toml` file under `dir`, keeping failures.
pub fn scan_directory(dir: &Path) -> Result<DirectoryScan> {
    let mut scan = DirectoryScan::default();
    collect_directory(dir, &mut scan)?;
    scan.examinations.sort_by(|a, b| a.0.cmp(&b.0));
    scan.failures.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(scan)
}

fn collect_directory(dir: &Path, scan: &mut DirectoryScan) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            collect_directory(&path, scan)?;
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_examination(&path) {
                Ok(exam) => scan.examinations.push((path, exam)),
                Err(e) => scan.failures.push((path, e)),
            }
        }
    }

    Ok(())
}

/// How bad a validation finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Suspicious but servable.
    Warning,
    /// Materialization can fail on this data.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A finding from examination validation.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub severity: Severity,
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    pub message: String,
}

impl ValidationIssue {
    fn error(question_id: Option<&str>, message: String) -> Self {
        Self {
            severity: Severity::Error,
            question_id: question_id.map(str::to_string),
            message,
        }
    }

    fn warning(question_id: Option<&str>, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            question_id: question_id.map(str::to_string),
            message,
        }
    }
}

/// Validate an examination for data that would break instance
/// materialization, plus a few softer problems.
pub fn validate_examination(exam: &Examination) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if exam.question_count == 0 {
        issues.push(ValidationIssue::warning(
            None,
            "question_count is 0, instances will be empty".into(),
        ));
    }
    if exam.questions.len() < exam.question_count {
        issues.push(ValidationIssue::error(
            None,
            format!(
                "{} question(s) in pool, question_count is {}",
                exam.questions.len(),
                exam.question_count
            ),
        ));
    }

    let mut seen_questions = HashSet::new();
    for q in &exam.questions {
        let qid = Some(q.id.as_str());

        if !seen_questions.insert(&q.id) {
            issues.push(ValidationIssue::warning(
                qid,
                format!("duplicate question ID: {}", q.id),
            ));
        }

        let mut seen_answers = HashSet::new();
        for a in &q.answers {
            if !seen_answers.insert(&a.id) {
                issues.push(ValidationIssue::warning(
                    qid,
                    format!("duplicate answer ID: {}", a.id),
                ));
            }
        }

        let correct = q.answers.iter().filter(|a| a.correct).count();
        let incorrect = q.answers.len() - correct;

        if q.answer_count == 0 {
            issues.push(ValidationIssue::error(qid, "answer_count is 0".into()));
        }
        if correct == 0 {
            issues.push(ValidationIssue::error(qid, "no correct answer".into()));
        } else if correct > 1 {
            issues.push(ValidationIssue::warning(
                qid,
                format!("{correct} correct answers, only one is ever shown"),
            ));
        }
        // One correct slot plus incorrect answers must fill answer_count.
        if correct > 0 && q.answer_count > 0 && 1 + incorrect < q.answer_count {
            issues.push(ValidationIssue::error(
                qid,
                format!(
                    "{} presentable answer(s), answer_count is {}",
                    1 + incorrect,
                    q.answer_count
                ),
            ));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_TOML: &str = r#"
[examination]
id = "exa1"
name = "Geography"
duration_minutes = 30
question_count = 1

[[questions]]
id = "q1"
question = "Capital of France?"
answer_count = 2

[[questions.answers]]
id = "q1a"
answer = "Paris"
correct = true

[[questions.answers]]
id = "q1b"
answer = "Lyon"

[[questions]]
id = "q2"
question = "Capital of Italy?"
answer_count = 2

[[questions.answers]]
id = "q2a"
answer = "Rome"
correct = true

[[questions.answers]]
id = "q2b"
answer = "Milan"
"#;

    #[test]
    fn parse_valid_toml() {
        let exam = parse_examination_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(exam.id, "exa1");
        assert_eq!(exam.name, "Geography");
        assert_eq!(exam.duration_minutes, 30);
        assert_eq!(exam.question_count, 1);
        assert_eq!(exam.questions.len(), 2);
        assert_eq!(exam.questions[0].answers.len(), 2);
        assert!(exam.questions[0].answers[0].correct);
        assert!(!exam.questions[0].answers[1].correct);
        assert!(validate_examination(&exam).is_empty());
    }

    #[test]
    fn parse_missing_optional_fields() {
        let toml = r#"
[examination]
id = "minimal"
question_count = 0

[[questions]]
id = "q1"
answer_count = 1
"#;
        let exam = parse_examination_str(toml, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(exam.name, "");
        assert_eq!(exam.duration_minutes, 0);
        assert_eq!(exam.questions[0].answer_count, 1);
        assert!(exam.questions[0].answers.is_empty());
    }

    #[test]
    fn parse_requires_answer_count() {
        let toml = r#"
[examination]
id = "exa1"
question_count = 1

[[questions]]
id = "q1"
question = "How many answers?"

[[questions.answers]]
id = "q1a"
answer = "Four"
correct = true
"#;
        let err = parse_examination_str(toml, &PathBuf::from("test.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("answer_count"));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        assert!(parse_examination_str(bad, &PathBuf::from("bad.toml")).is_err());
    }

    #[test]
    fn parse_requires_question_count() {
        let toml = r#"
[examination]
id = "exa1"
"#;
        assert!(parse_examination_str(toml, &PathBuf::from("test.toml")).is_err());
    }

    #[test]
    fn validate_short_question_pool() {
        let mut exam = parse_examination_str(VALID_TOML, &PathBuf::from("t.toml")).unwrap();
        exam.question_count = 5;
        let issues = validate_examination(&exam);
        assert!(issues
            .iter()
            .any(|i| i.severity == Severity::Error && i.question_id.is_none()));
    }

    #[test]
    fn validate_question_defects() {
        let mut exam = parse_examination_str(VALID_TOML, &PathBuf::from("t.toml")).unwrap();
        exam.questions[0].answers[0].correct = false;
        exam.questions[1].answer_count = 3;
        let issues = validate_examination(&exam);

        let q1: Vec<_> = issues
            .iter()
            .filter(|i| i.question_id.as_deref() == Some("q1"))
            .collect();
        assert!(q1.iter().any(|i| i.message.contains("no correct answer")));

        let q2: Vec<_> = issues
            .iter()
            .filter(|i| i.question_id.as_deref() == Some("q2"))
            .collect();
        assert_eq!(q2.len(), 1);
        assert_eq!(q2[0].severity, Severity::Error);
        assert!(q2[0].message.contains("answer_count is 3"));
    }

    #[test]
    fn validate_soft_problems() {
        let mut exam = parse_examination_str(VALID_TOML, &PathBuf::from("t.toml")).unwrap();
        exam.questions[1].id = "q1".into();
        exam.questions[0].answers[1].correct = true;
        exam.questions[0].answer_count = 1;
        let issues = validate_examination(&exam);
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
        assert!(issues.iter().any(|i| i.message.contains("duplicate question")));
        assert!(issues.iter().any(|i| i.message.contains("2 correct answers")));
    }

    #[test]
    fn validate_zero_answer_count() {
        let mut exam = parse_examination_str(VALID_TOML, &PathBuf::from("t.toml")).unwrap();
        exam.questions[0].answer_count = 0;
        let issues = validate_examination(&exam);
        assert!(issues
            .iter()
            .any(|i| i.severity == Severity::Error && i.message == "answer_count is 0"));
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("geo.toml"), VALID_TOML).unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested/broken.toml"), "not toml [").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let exams = load_examination_directory(dir.path()).unwrap();
        assert_eq!(exams.len(), 1);
        assert_eq!(exams[0].id, "exa1");
    }

    #[test]
    fn scan_directory_keeps_failures() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("geo.toml"), VALID_TOML).unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested/broken.toml"), "not toml [").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let scan = scan_directory(dir.path()).unwrap();
        assert_eq!(scan.examinations.len(), 1);
        assert_eq!(scan.examinations[0].1.id, "exa1");
        assert_eq!(scan.failures.len(), 1);
        assert_eq!(scan.failures[0].0, dir.path().join("nested/broken.toml"));
        assert!(format!("{:#}", scan.failures[0].1).contains("failed to parse TOML"));
    }

    #[test]
    fn load_directory_rejects_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("geo.toml");
        std::fs::write(&file, VALID_TOML).unwrap();
        assert!(load_examination_directory(&file).is_err());
    }
}
