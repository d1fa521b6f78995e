//! The `examinst init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create examinst.toml
    if std::path::Path::new("examinst.toml").exists() {
        println!("examinst.toml already exists, skipping.");
    } else {
        std::fs::write("examinst.toml", SAMPLE_CONFIG)?;
        println!("Created examinst.toml");
    }

    // Create sample examination
    std::fs::create_dir_all("examinations")?;
    let sample_path = std::path::Path::new("examinations/sample.toml");
    if sample_path.exists() {
        println!("examinations/sample.toml already exists, skipping.");
    } else {
        std::fs::write(sample_path, SAMPLE_EXAMINATION)?;
        println!("Created examinations/sample.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: examinst validate --path examinations");
    println!(
        "  2. Run: examinst instance --examination sample --token tok1 --subject stu1"
    );

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# examinst configuration

examinations_dir = "./examinations"
pretty = true
log_filter = "examinst=info"
"#;

const SAMPLE_EXAMINATION: &str = r#"[examination]
id = "sample"
name = "Sample Examination"
duration_minutes = 20
question_count = 2

[[questions]]
id = "sample-q1"
question = "Which planet is closest to the Sun?"
answer_count = 3

[[questions.answers]]
id = "sample-q1-a1"
answer = "Mercury"
correct = true

[[questions.answers]]
id = "sample-q1-a2"
answer = "Venus"

[[questions.answers]]
id = "sample-q1-a3"
answer = "Mars"

[[questions.answers]]
id = "sample-q1-a4"
answer = "Jupiter"

[[questions]]
id = "sample-q2"
question = "What is 7 x 8?"
answer_count = 3

[[questions.answers]]
id = "sample-q2-a1"
answer = "54"

[[questions.answers]]
id = "sample-q2-a2"
answer = "56"
correct = true

[[questions.answers]]
id = "sample-q2-a3"
answer = "58"

[[questions]]
id = "sample-q3"
question = "Which gas do plants absorb?"
answer_count = 2

[[questions.answers]]
id = "sample-q3-a1"
answer = "Carbon dioxide"
correct = true

[[questions.answers]]
id = "sample-q3-a2"
answer = "Helium"

[[questions.answers]]
id = "sample-q3-a3"
answer = "Neon"
"#;
