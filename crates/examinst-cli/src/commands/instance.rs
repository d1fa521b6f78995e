//! The `examinst instance` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;

use examinst_core::model::{Caller, ExamView, Role};
use examinst_core::service::{AccessError, ExamAccessService};
use examinst_store::config::load_config_from;
use examinst_store::DirectorySource;

#[derive(Serialize)]
struct SubjectView<'a> {
    subject: &'a str,
    view: &'a ExamView,
}

pub async fn execute(
    examination_id: String,
    token_id: String,
    subjects_str: String,
    role: Role,
    dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let subjects: Vec<String> = subjects_str
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    anyhow::ensure!(!subjects.is_empty(), "at least one subject is required");

    let config = load_config_from(config_path.as_deref())?;
    let dir = dir.unwrap_or(config.examinations_dir);
    let source = DirectorySource::open(&dir)?;
    tracing::debug!(
        "serving {examination_id} for {} subject(s) as {role}",
        subjects.len()
    );
    let service = ExamAccessService::new(Arc::new(source));

    let output = if let [subject] = subjects.as_slice() {
        let caller = Caller {
            subject_id: subject.clone(),
            role,
        };
        let view = service
            .get_exam_instance(&token_id, &examination_id, &caller)
            .await
            .map_err(explain)?;
        render(&view, config.pretty)?
    } else {
        let views = service
            .get_exam_instances(&token_id, &examination_id, &subjects, role)
            .await
            .map_err(explain)?;
        let entries: Vec<SubjectView<'_>> = views
            .iter()
            .map(|(subject, view)| SubjectView {
                subject: subject.as_str(),
                view,
            })
            .collect();
        render(&entries, config.pretty)?
    };

    println!("{output}");
    Ok(())
}

fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

fn explain(err: AccessError) -> anyhow::Error {
    if err.is_malformed() {
        anyhow::Error::new(err).context("examination not ready")
    } else {
        anyhow::Error::new(err)
    }
}
