//! Directory-backed examination source.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;

use examinst_core::model::Examination;
use examinst_core::parser::{parse_examination_str, scan_examination_directory};
use examinst_core::traits::ExaminationSource;

use crate::error::StoreError;

/// Serves examinations from a directory tree of TOML files.
///
/// The directory is indexed once by [`DirectorySource::open`]; each load
/// re-reads the indexed file, so edits to an examination are picked up on
/// the next request without reopening.
#[derive(Debug)]
pub struct DirectorySource {
    root: PathBuf,
    index: HashMap<String, PathBuf>,
}

impl DirectorySource {
    /// Index every parseable `.toml` examination under `root`.
    pub fn open(root: &Path) -> Result<Self> {
        let mut index: HashMap<String, PathBuf> = HashMap::new();

        for (path, exam) in scan_examination_directory(root)? {
            if let Some(first) = index.get(&exam.id) {
                return Err(StoreError::DuplicateExamination {
                    id: exam.id,
                    first: first.clone(),
                    second: path,
                }
                .into());
            }
            index.insert(exam.id, path);
        }

        tracing::info!(
            "indexed {} examination(s) under {}",
            index.len(),
            root.display()
        );

        Ok(Self {
            root: root.to_path_buf(),
            index,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Indexed examination ids, sorted.
    pub fn examination_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.index.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

#[async_trait]
impl ExaminationSource for DirectorySource {
    fn name(&self) -> &str {
        "directory"
    }

    async fn load_examination(&self, examination_id: &str) -> anyhow::Result<Examination> {
        let path = self
            .index
            .get(examination_id)
            .ok_or_else(|| StoreError::ExaminationNotFound(examination_id.to_string()))?;

        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read examination file: {}", path.display()))?;
        let exam = parse_examination_str(&content, path)?;

        if exam.id != examination_id {
            return Err(StoreError::Stale {
                path: path.clone(),
                expected: examination_id.to_string(),
                found: exam.id,
            }
            .into());
        }

        tracing::debug!("loaded examination {examination_id} from {}", path.display());
        Ok(exam)
    }
}
