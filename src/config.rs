//! Batch job-list configuration.
//!
//! Handles loading and validating `jobs.toml` files. A job list is an array
//! of `[[job]]` tables, each naming an input image, a target size, and an
//! optional crop anchor:
//!
//! ```toml
//! [[job]]
//! input = "assets/content.jpg"
//! width = 1280
//! height = 800
//! anchor = "topleft"
//!
//! [[job]]
//! input = "assets/popup.jpg"
//! width = 640
//! height = 400
//! # anchor defaults to "center"
//! ```
//!
//! Paths are resolved relative to the working directory, not the config file.
//! Unknown keys are rejected to catch typos early.

use crate::batch::BatchJob;
use crate::imaging::{AnchorMode, TargetSize};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Batch job list loaded from a TOML file.
///
/// Unknown keys are rejected. The `anchor` field is optional per job and
/// defaults to `center`; unrecognized anchor names fail at parse time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    #[serde(rename = "job")]
    pub jobs: Vec<JobEntry>,
}

/// One `[[job]]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobEntry {
    pub input: PathBuf,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub anchor: AnchorMode,
}

impl BatchConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jobs.is_empty() {
            return Err(ConfigError::Validation(
                "job list is empty - add at least one [[job]] table".into(),
            ));
        }
        for (i, job) in self.jobs.iter().enumerate() {
            if job.width == 0 || job.height == 0 {
                return Err(ConfigError::Validation(format!(
                    "job {}: width and height must be positive ({} given)",
                    i + 1,
                    job.input.display()
                )));
            }
        }
        Ok(())
    }

    /// Convert config entries into batch jobs, preserving order.
    pub fn into_jobs(self) -> Vec<BatchJob> {
        self.jobs
            .into_iter()
            .map(|entry| BatchJob {
                input: entry.input,
                target: TargetSize::new(entry.width, entry.height),
                anchor: entry.anchor,
            })
            .collect()
    }
}

/// Load and validate a job list from a TOML file.
pub fn load_config(path: &Path) -> Result<BatchConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: BatchConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// A documented sample job list, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r#"# fitcrop job list
#
# Each [[job]] table resizes and crops one image to exact pixel dimensions.
# Output is written next to the input as name_{width}x{height}.ext and the
# input file is never overwritten. Paths are resolved relative to the
# directory fitcrop runs in.

[[job]]
input = "assets/content.jpg"
width = 1280
height = 800
anchor = "topleft"          # keep the top-left region

[[job]]
input = "assets/options.jpg"
width = 1280
height = 800
anchor = "center"           # keep the middle region (the default)

[[job]]
input = "assets/popup.jpg"
width = 640
height = 400
# anchor omitted - defaults to "center"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("jobs.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_minimal_job_list() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            r#"
[[job]]
input = "a.jpg"
width = 640
height = 400
"#,
        );

        let config = load_config(&path).unwrap();
        assert_eq!(config.jobs.len(), 1);
        assert_eq!(config.jobs[0].input, PathBuf::from("a.jpg"));
        assert_eq!(config.jobs[0].anchor, AnchorMode::Center);
    }

    #[test]
    fn load_parses_explicit_anchor() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            r#"
[[job]]
input = "a.jpg"
width = 1280
height = 800
anchor = "topleft"
"#,
        );

        let config = load_config(&path).unwrap();
        assert_eq!(config.jobs[0].anchor, AnchorMode::TopLeft);
    }

    #[test]
    fn load_rejects_unknown_anchor() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            r#"
[[job]]
input = "a.jpg"
width = 640
height = 400
anchor = "bottomright"
"#,
        );

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_rejects_unknown_keys() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            r#"
[[job]]
input = "a.jpg"
width = 640
height = 400
qualty = 90
"#,
        );

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_rejects_zero_dimensions() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            r#"
[[job]]
input = "a.jpg"
width = 0
height = 400
"#,
        );

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn load_rejects_empty_job_list() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "");

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_config(&tmp.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn into_jobs_preserves_order_and_values() {
        let config: BatchConfig = toml::from_str(
            r#"
[[job]]
input = "first.jpg"
width = 1280
height = 800
anchor = "topleft"

[[job]]
input = "second.jpg"
width = 640
height = 400
"#,
        )
        .unwrap();

        let jobs = config.into_jobs();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].input, PathBuf::from("first.jpg"));
        assert_eq!(jobs[0].target, TargetSize::new(1280, 800));
        assert_eq!(jobs[0].anchor, AnchorMode::TopLeft);
        assert_eq!(jobs[1].anchor, AnchorMode::Center);
    }

    #[test]
    fn stock_config_toml_is_valid_and_loads() {
        let config: BatchConfig = toml::from_str(stock_config_toml()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.jobs.len(), 3);
        assert_eq!(config.jobs[0].anchor, AnchorMode::TopLeft);
        assert_eq!(config.jobs[2].anchor, AnchorMode::Center);
    }
}
