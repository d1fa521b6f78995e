//! The `examinst validate` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use examinst_core::parser::{self, Severity, ValidationIssue};

pub fn execute(path: PathBuf) -> Result<()> {
    let (exams, failures) = if path.is_dir() {
        let scan = parser::scan_directory(&path)?;
        let exams = scan.examinations.into_iter().map(|(_, exam)| exam).collect();
        (exams, scan.failures)
    } else {
        (vec![parser::parse_examination(&path)?], Vec::new())
    };

    let mut total_errors = failures.len();
    let mut total_warnings = 0;

    if !failures.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["File", "Error"]);
        for (file, err) in &failures {
            table.add_row(vec![
                Cell::new(file.display()),
                Cell::new(format!("{err:#}")),
            ]);
        }
        println!("Unreadable examination files:");
        println!("{table}");
    }

    for exam in &exams {
        println!(
            "Examination: {} [{}] ({} of {} questions per instance)",
            exam.name,
            exam.id,
            exam.question_count,
            exam.questions.len()
        );

        let issues = parser::validate_examination(exam);
        if !issues.is_empty() {
            println!("{}", issue_table(&issues));
        }
        total_errors += issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count();
        total_warnings += issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count();
    }

    if total_errors == 0 && total_warnings == 0 {
        println!("All examinations valid.");
    } else if total_warnings > 0 {
        println!("\n{total_warnings} warning(s) found.");
    }

    anyhow::ensure!(
        total_errors == 0,
        "{total_errors} error(s) found, affected examinations cannot be served"
    );

    Ok(())
}

fn issue_table(issues: &[ValidationIssue]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Severity", "Question", "Issue"]);

    for issue in issues {
        table.add_row(vec![
            Cell::new(issue.severity),
            Cell::new(issue.question_id.as_deref().unwrap_or("-")),
            Cell::new(&issue.message),
        ]);
    }

    table
}
