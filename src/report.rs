//! Output formatting for coverage reports.
//!
//! Supports three output formats:
//! - Coverage: per-file percentages with undocumented declarations
//! - Warnings: compiler-style warning lines for IDE/CI integration
//! - JSON: structured output for programmatic consumption

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use colored::*;
use serde::{Deserialize, Serialize};

use crate::coverage::{CoverageReport, SourceReport};

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Coverage,
    Warnings,
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Coverage => "coverage",
            ReportFormat::Warnings => "warnings",
            ReportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "coverage" => Ok(ReportFormat::Coverage),
            "warnings" => Ok(ReportFormat::Warnings),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "invalid report {:?}, must be 'coverage', 'warnings', or 'json'",
                s
            )),
        }
    }
}

/// Renders a [`CoverageReport`] in one format.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    format: ReportFormat,
    color: bool,
}

impl Reporter {
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            color: false,
        }
    }

    /// Colorize terminal output.
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn write(&self, out: &mut dyn Write, report: &CoverageReport) -> anyhow::Result<()> {
        match self.format {
            ReportFormat::Coverage => self.write_coverage(out, report)?,
            ReportFormat::Warnings => self.write_warnings(out, report)?,
            ReportFormat::Json => write_json(out, report)?,
        }
        out.flush()?;
        Ok(())
    }

    /// Render into a string.
    pub fn render(&self, report: &CoverageReport) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        self.write(&mut buf, report)?;
        Ok(String::from_utf8(buf)?)
    }

    fn write_coverage(&self, out: &mut dyn Write, report: &CoverageReport) -> anyhow::Result<()> {
        let sources = report.sources.iter().filter(|s| s.total_count > 0);
        for (index, source) in sources.enumerate() {
            writeln!(
                out,
                "{}) {}: {} {}",
                index + 1,
                self.paint_path(&source.path),
                self.paint_percent(source.coverage()),
                ratio(source.documented_count(), source.total_count),
            )?;
            self.write_undocumented(out, source)?;
        }

        writeln!(out)?;
        writeln!(
            out,
            "Total: {} {}",
            self.paint_percent(report.coverage()),
            ratio(report.documented_count(), report.total_count()),
        )?;
        Ok(())
    }

    fn write_undocumented(&self, out: &mut dyn Write, source: &SourceReport) -> anyhow::Result<()> {
        let file_name = source.file_name();
        for decl in &source.undocumented {
            let location = format!("{}:{}:{}:", file_name, decl.line, decl.column);
            let location = if self.color {
                location.dimmed().to_string()
            } else {
                location
            };
            writeln!(out, "{} {}", location, decl.name)?;
        }
        Ok(())
    }

    fn write_warnings(&self, out: &mut dyn Write, report: &CoverageReport) -> anyhow::Result<()> {
        for source in &report.sources {
            for decl in &source.undocumented {
                let tag = if self.color {
                    "warning:".yellow().to_string()
                } else {
                    "warning:".to_string()
                };
                writeln!(
                    out,
                    "{}:{}:{}: {} No documentation for '{}'.",
                    source.path, decl.line, decl.column, tag, decl.name
                )?;
            }
        }
        Ok(())
    }

    fn paint_path(&self, path: &str) -> String {
        if self.color {
            path.blue().to_string()
        } else {
            path.to_string()
        }
    }

    fn paint_percent(&self, percent: usize) -> String {
        let text = format!("{}%", percent);
        if !self.color {
            return text;
        }
        match percent {
            p if p >= 80 => text.green().bold().to_string(),
            p if p >= 50 => text.yellow().to_string(),
            _ => text.red().to_string(),
        }
    }
}

fn ratio(documented: usize, total: usize) -> String {
    format!("[{}/{}]", documented, total)
}

/// Write the report as pretty-printed JSON.
pub fn write_json(out: &mut dyn Write, report: &CoverageReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(out, "{}", json)?;
    Ok(())
}
