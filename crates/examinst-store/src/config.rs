//! examinst configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level examinst configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExaminstConfig {
    /// Directory holding examination TOML files.
    #[serde(default = "default_examinations_dir")]
    pub examinations_dir: PathBuf,
    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
    /// Default tracing directive, used when `RUST_LOG` does not say otherwise.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_examinations_dir() -> PathBuf {
    PathBuf::from("./examinations")
}
fn default_true() -> bool {
    true
}
fn default_log_filter() -> String {
    "examinst=info".to_string()
}

impl Default for ExaminstConfig {
    fn default() -> Self {
        Self {
            examinations_dir: default_examinations_dir(),
            pretty: true,
            log_filter: default_log_filter(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied verbatim and never rescanned.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `examinst.toml` in the current directory
/// 2. `~/.config/examinst/config.toml`
///
/// Environment variable override: `EXAMINST_EXAMINATIONS_DIR`.
pub fn load_config() -> Result<ExaminstConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<ExaminstConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("examinst.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!("using config {}", path.display());
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => ExaminstConfig::default(),
    };

    if let Ok(dir) = std::env::var("EXAMINST_EXAMINATIONS_DIR") {
        config.examinations_dir = PathBuf::from(dir);
    }

    Ok(config)
}

/// Parse a config document and resolve `${VAR}` references in it.
pub fn parse_config_str(content: &str) -> Result<ExaminstConfig> {
    let mut config: ExaminstConfig = toml::from_str(content)?;
    config.examinations_dir =
        PathBuf::from(resolve_env_vars(&config.examinations_dir.to_string_lossy()));
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("examinst"))
}
