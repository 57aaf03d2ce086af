//! swift-doc-coverage - documentation coverage for Swift sources.
//!
//! Every declaration at or above a minimum access level is checked for a
//! preceding documentation comment (`///` or `/** */`). Results are
//! aggregated per file and in total.
//!
//! # Architecture
//!
//! The codebase uses tree-sitter for syntax trees:
//!
//! - `analysis`: declaration extraction, naming and access levels
//! - `files`: Swift file discovery
//! - `coverage`: per-file and total coverage reports
//! - `config`: YAML config schema
//! - `report`: output formatting (coverage, warnings, JSON)
//! - `cli`: command-line surface
//!
//! # Example
//!
//! ```no_run
//! use swift_doc_coverage::{Coverage, Discovery, Visibility};
//!
//! let coverage = Coverage::new(&["Sources"], &Discovery::new())?;
//! let report = coverage.report(Visibility::Public)?;
//! println!("{}%", report.coverage());
//! # Ok::<(), swift_doc_coverage::CoverageError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod coverage;
pub mod error;
pub mod files;
pub mod report;

pub use analysis::{Comment, CommentKind, DeclKeyword, Declaration, Source, Visibility};
pub use config::Config;
pub use coverage::{Coverage, CoverageReport, DeclarationReport, SourceReport};
pub use error::{CoverageError, Result};
pub use files::Discovery;
pub use report::{ReportFormat, Reporter};
