//! Swift file discovery.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::Regex;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{CoverageError, Result};

/// Extension of the files to analyze.
pub const SWIFT_EXTENSION: &str = "swift";

/// Resolves input paths into an ordered list of Swift files.
#[derive(Debug, Clone)]
pub struct Discovery {
    skip_hidden: bool,
    ignore: Option<Regex>,
    excluded: GlobSet,
}

impl Default for Discovery {
    fn default() -> Self {
        Self {
            skip_hidden: true,
            ignore: None,
            excluded: GlobSet::empty(),
        }
    }
}

impl Discovery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip files and directories whose name starts with a dot.
    pub fn skip_hidden(mut self, skip: bool) -> Self {
        self.skip_hidden = skip;
        self
    }

    /// Skip paths matching a regular expression.
    pub fn ignore_regex(mut self, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| CoverageError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.ignore = Some(regex);
        Ok(self)
    }

    /// Skip paths matching any of the glob patterns.
    ///
    /// Globs are matched against paths relative to the input directory.
    pub fn exclude<S: AsRef<str>>(mut self, patterns: &[S]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = Glob::new(pattern).map_err(|e| CoverageError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
            builder.add(glob);
        }
        self.excluded = builder.build().map_err(|e| CoverageError::InvalidPattern {
            pattern: patterns
                .iter()
                .map(|p| p.as_ref())
                .collect::<Vec<_>>()
                .join(", "),
            message: e.to_string(),
        })?;
        Ok(self)
    }

    /// Swift files for one input path.
    ///
    /// A file is taken as is and must have the `.swift` extension. A
    /// directory is walked recursively in file name order.
    pub fn files(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let metadata = std::fs::metadata(path)
            .map_err(|_| CoverageError::PathNotFound(path.to_path_buf()))?;

        if !metadata.is_dir() {
            if !is_swift_file(path) {
                return Err(CoverageError::NotSwiftFile(path.to_path_buf()));
            }
            return Ok(vec![path.to_path_buf()]);
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(path)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !(self.skip_hidden && is_hidden(e)));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() || !is_swift_file(entry.path()) {
                continue;
            }
            if self.is_excluded(path, entry.path()) {
                debug!(path = %entry.path().display(), "excluded");
                continue;
            }
            files.push(entry.into_path());
        }

        Ok(files)
    }

    /// Swift files for all inputs, in input order.
    pub fn collect<P: AsRef<Path>>(&self, inputs: &[P]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for input in inputs {
            files.extend(self.files(input.as_ref())?);
        }

        if files.is_empty() {
            return Err(CoverageError::FilesNotFound);
        }
        debug!(count = files.len(), "discovered swift files");
        Ok(files)
    }

    /// The ignore regex sees the absolute path, so anchored patterns do not
    /// depend on how the input was spelled.
    fn is_excluded(&self, root: &Path, path: &Path) -> bool {
        if let Some(ignore) = &self.ignore {
            let absolute = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
            if ignore.is_match(&absolute.to_string_lossy()) {
                return true;
            }
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        self.excluded.is_match(relative)
    }
}

fn is_swift_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(SWIFT_EXTENSION)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
