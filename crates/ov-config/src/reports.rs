//! Report output locations.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_dir() -> String {
    ".".to_string()
}

fn default_verification_file() -> String {
    "verification_report.json".to_string()
}

fn default_safety_file() -> String {
    "optimization_safety_report.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportsConfig {
    /// Directory reports are written to when no explicit output is given.
    #[serde(default = "default_dir")]
    pub dir: String,

    #[serde(default = "default_verification_file")]
    pub verification_file: String,

    #[serde(default = "default_safety_file")]
    pub safety_file: String,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            verification_file: default_verification_file(),
            safety_file: default_safety_file(),
        }
    }
}

impl ReportsConfig {
    /// Default output path for the verification report.
    #[must_use]
    pub fn verification_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.verification_file)
    }

    /// Default output path for the optimization safety report.
    #[must_use]
    pub fn safety_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.safety_file)
    }
}
