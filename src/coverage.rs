//! Coverage aggregation across sources.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::{Declaration, Source, Visibility};
use crate::error::{CoverageError, Result};
use crate::files::Discovery;

/// Percentage of documented declarations, truncated.
///
/// An empty set is fully covered.
fn percent(total: usize, undocumented: usize) -> usize {
    if total == 0 {
        return 100;
    }
    (total - undocumented) * 100 / total
}

/// Parsed sources of a coverage run.
#[derive(Debug, Clone)]
pub struct Coverage {
    sources: Vec<Source>,
}

impl Coverage {
    /// Discover and parse every Swift file under `inputs`.
    pub fn new<P: AsRef<Path>>(inputs: &[P], discovery: &Discovery) -> Result<Self> {
        let files = discovery.collect(inputs)?;
        Self::from_files(&files)
    }

    /// Parse the given files in parallel, keeping their order.
    pub fn from_files(files: &[PathBuf]) -> Result<Self> {
        let sources = files
            .par_iter()
            .map(|path| Source::open(path))
            .collect::<Result<Vec<_>>>()?;
        debug!(count = sources.len(), "parsed sources");
        Ok(Self { sources })
    }

    pub fn from_sources(sources: Vec<Source>) -> Self {
        Self { sources }
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Report declarations at least as accessible as `level`.
    ///
    /// Fails with [`CoverageError::DeclarationsNotFound`] when nothing
    /// qualifies.
    pub fn report(&self, level: Visibility) -> Result<CoverageReport> {
        let report = CoverageReport {
            sources: self.sources.iter().map(|s| s.report(level)).collect(),
        };
        if report.total_count() == 0 {
            return Err(CoverageError::DeclarationsNotFound);
        }
        Ok(report)
    }
}

/// Undocumented declaration entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationReport {
    pub line: usize,
    pub column: usize,
    pub name: String,
}

impl From<&Declaration> for DeclarationReport {
    fn from(decl: &Declaration) -> Self {
        Self {
            line: decl.line,
            column: decl.column,
            name: decl.name.clone(),
        }
    }
}

/// Coverage of one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceReport {
    pub path: String,
    #[serde(rename = "totalCount")]
    pub total_count: usize,
    pub undocumented: Vec<DeclarationReport>,
}

impl SourceReport {
    pub fn documented_count(&self) -> usize {
        self.total_count.saturating_sub(self.undocumented.len())
    }

    pub fn coverage(&self) -> usize {
        percent(self.total_count, self.undocumented.len())
    }

    /// Last path component.
    pub fn file_name(&self) -> String {
        Path::new(&self.path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.clone())
    }
}

/// Coverage of a whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub sources: Vec<SourceReport>,
}

impl CoverageReport {
    pub fn total_count(&self) -> usize {
        self.sources.iter().map(|s| s.total_count).sum()
    }

    pub fn total_undocumented_count(&self) -> usize {
        self.sources.iter().map(|s| s.undocumented.len()).sum()
    }

    pub fn documented_count(&self) -> usize {
        self.total_count()
            .saturating_sub(self.total_undocumented_count())
    }

    pub fn coverage(&self) -> usize {
        percent(self.total_count(), self.total_undocumented_count())
    }
}
