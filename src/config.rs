//! Configuration file for coverage runs.
//!
//! Every key is optional; command-line flags take precedence over the file.
//!
//! ```yaml
//! minimum_access_level: public
//! report: warnings
//! skip_hidden_files: true
//! ignore_regex: "Generated"
//! excluded_paths:
//!   - "**/Tests/**"
//! output: build/doc-coverage.txt
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::Visibility;
use crate::error::{CoverageError, Result};
use crate::files::Discovery;
use crate::report::ReportFormat;

/// Default config file names to search for.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &[
    "doc-coverage.yaml",
    ".doc-coverage.yaml",
    "swift-doc-coverage.yaml",
];

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Least accessible level still counted (default: public)
    #[serde(default)]
    pub minimum_access_level: Option<Visibility>,
    /// Output format (default: coverage)
    #[serde(default)]
    pub report: Option<ReportFormat>,
    /// Skip dot files and directories (default: true)
    #[serde(default)]
    pub skip_hidden_files: Option<bool>,
    /// Regular expression for paths to skip
    #[serde(default)]
    pub ignore_regex: Option<String>,
    /// Glob patterns for paths to skip, relative to each input directory
    #[serde(default)]
    pub excluded_paths: Vec<String>,
    /// Report file; stdout when absent
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CoverageError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        // An empty document is an empty config.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).map_err(|e| CoverageError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Find a config file in `dir`.
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        DEFAULT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Returns the minimum access level (defaults to public).
    pub fn get_minimum_access_level(&self) -> Visibility {
        self.minimum_access_level.unwrap_or(Visibility::Public)
    }

    /// Returns the report format (defaults to coverage).
    pub fn get_report(&self) -> ReportFormat {
        self.report.unwrap_or_default()
    }

    /// Returns whether hidden files are skipped (defaults to true).
    pub fn should_skip_hidden_files(&self) -> bool {
        self.skip_hidden_files.unwrap_or(true)
    }

    /// File discovery configured from this config.
    pub fn discovery(&self) -> Result<Discovery> {
        let mut discovery = Discovery::new()
            .skip_hidden(self.should_skip_hidden_files())
            .exclude(&self.excluded_paths)?;
        if let Some(pattern) = &self.ignore_regex {
            discovery = discovery.ignore_regex(pattern)?;
        }
        Ok(discovery)
    }
}
