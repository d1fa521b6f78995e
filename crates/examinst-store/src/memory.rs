//! In-memory examination source.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use examinst_core::model::Examination;
use examinst_core::traits::ExaminationSource;

use crate::error::StoreError;

/// An examination source backed by a map, for tests and embedding.
///
/// Every load hands out a clone, so callers never observe later `insert`s
/// half-way through a request.
pub struct InMemorySource {
    examinations: RwLock<HashMap<String, Examination>>,
    /// Number of loads served.
    call_count: AtomicU32,
}

impl InMemorySource {
    pub fn new(examinations: impl IntoIterator<Item = Examination>) -> Self {
        Self {
            examinations: RwLock::new(
                examinations
                    .into_iter()
                    .map(|exam| (exam.id.clone(), exam))
                    .collect(),
            ),
            call_count: AtomicU32::new(0),
        }
    }

    /// Add or replace an examination. Returns the previous version, if any.
    pub fn insert(&self, examination: Examination) -> Option<Examination> {
        self.examinations
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(examination.id.clone(), examination)
    }

    pub fn len(&self) -> usize {
        self.examinations
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the number of loads served so far.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ExaminationSource for InMemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn load_examination(&self, examination_id: &str) -> anyhow::Result<Examination> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        let examinations = self
            .examinations
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        examinations
            .get(examination_id)
            .cloned()
            .ok_or_else(|| StoreError::ExaminationNotFound(examination_id.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use examinst_core::model::{Answer, Question};

    fn exam(id: &str, name: &str) -> Examination {
        Examination {
            id: id.into(),
            name: name.into(),
            duration_minutes: 10,
            question_count: 1,
            questions: vec![Question {
                id: format!("{id}-q1"),
                question: "Pick one".into(),
                answer_count: 1,
                answers: vec![Answer {
                    id: format!("{id}-a1"),
                    answer: "This one".into(),
                    correct: true,
                }],
            }],
        }
    }

    #[tokio::test]
    async fn loads_known_examination() {
        let source = InMemorySource::new([exam("exa1", "First"), exam("exa2", "Second")]);
        assert_eq!(source.len(), 2);

        let loaded = source.load_examination("exa2").await.unwrap();
        assert_eq!(loaded.name, "Second");
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn unknown_examination_is_not_found() {
        let source = InMemorySource::new(Vec::<Examination>::new());
        assert!(source.is_empty());

        let err = source.load_examination("nope").await.unwrap_err();
        let store_err = err.downcast_ref::<StoreError>().unwrap();
        assert!(store_err.is_not_found());
        assert_eq!(err.to_string(), "examination not found: nope");
    }

    #[tokio::test]
    async fn insert_replaces() {
        let source = InMemorySource::new([exam("exa1", "Old")]);
        let previous = source.insert(exam("exa1", "New")).unwrap();
        assert_eq!(previous.name, "Old");
        assert_eq!(source.load_examination("exa1").await.unwrap().name, "New");
    }
}
