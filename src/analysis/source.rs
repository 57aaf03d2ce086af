//! A single unit of Swift source and its declarations.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::declaration::Declaration;
use super::syntax::SwiftParser;
use super::visibility::Visibility;
use super::visitor::collect_declarations;
use crate::coverage::{DeclarationReport, SourceReport};
use crate::error::{CoverageError, Result};

/// Parsed declarations of one file or in-memory snippet.
///
/// Declarations are extracted once, at construction.
#[derive(Debug, Clone)]
pub struct Source {
    path: Option<PathBuf>,
    declarations: Vec<Declaration>,
    has_parse_errors: bool,
}

impl Source {
    /// Parse in-memory Swift code.
    pub fn parse(code: &str) -> Result<Self> {
        Self::from_text(None, code.to_string())
    }

    /// Read and parse a Swift file.
    pub fn open(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| CoverageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(Some(path.to_path_buf()), text)
    }

    fn from_text(path: Option<PathBuf>, text: String) -> Result<Self> {
        let label = path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<memory>".to_string());
        let parsed = SwiftParser::shared().parse(&label, text)?;

        let has_parse_errors = parsed.has_errors();
        if has_parse_errors {
            warn!(path = %label, "syntax errors found, declarations may be incomplete");
        }

        let declarations = collect_declarations(&parsed);
        debug!(path = %label, count = declarations.len(), "collected declarations");

        Ok(Self {
            path,
            declarations,
            has_parse_errors,
        })
    }

    /// File path, `None` for in-memory code.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Path as printed in reports; empty for in-memory code.
    pub fn display_path(&self) -> String {
        self.path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }

    /// All declarations in source order.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Declarations at least as accessible as `level`.
    pub fn declarations_at(&self, level: Visibility) -> Vec<&Declaration> {
        self.declarations
            .iter()
            .filter(|d| d.visibility.is_at_least(level))
            .collect()
    }

    /// Undocumented declarations at least as accessible as `level`.
    pub fn undocumented_at(&self, level: Visibility) -> Vec<&Declaration> {
        self.declarations
            .iter()
            .filter(|d| d.visibility.is_at_least(level) && !d.is_documented())
            .collect()
    }

    pub fn report(&self, level: Visibility) -> SourceReport {
        SourceReport {
            path: self.display_path(),
            total_count: self.declarations_at(level).len(),
            undocumented: self
                .undocumented_at(level)
                .into_iter()
                .map(DeclarationReport::from)
                .collect(),
        }
    }

    /// Whether tree-sitter had to recover from syntax errors.
    pub fn has_parse_errors(&self) -> bool {
        self.has_parse_errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODE: &str = r#"
/// A documented type.
public struct Point {
    public var x: Int
    var y: Int
    private func reset() {}
}
"#;

    #[test]
    fn test_declarations_at_levels() {
        let source = Source::parse(CODE).unwrap();
        assert_eq!(source.declarations().len(), 4);
        assert_eq!(source.declarations_at(Visibility::Public).len(), 2);
        assert_eq!(source.declarations_at(Visibility::Internal).len(), 3);
        assert_eq!(source.declarations_at(Visibility::Private).len(), 4);
    }

    #[test]
    fn test_report() {
        let source = Source::parse(CODE).unwrap();
        let report = source.report(Visibility::Public);
        assert_eq!(report.path, "");
        assert_eq!(report.total_count, 2);
        assert_eq!(report.undocumented.len(), 1);
        assert_eq!(report.undocumented[0].name, "var Point.x");
        assert_eq!(report.undocumented[0].line, 4);
        assert_eq!(report.coverage(), 50);
    }

    #[test]
    fn test_open_missing_file() {
        let err = Source::open(Path::new("does/not/exist.swift")).unwrap_err();
        assert!(matches!(err, CoverageError::Io { .. }));
    }

    #[test]
    fn test_parse_errors_are_tolerated() {
        let source = Source::parse("public struct A {\n    public func f(\n}\n").unwrap();
        assert!(source.has_parse_errors());
    }
}
