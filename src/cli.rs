//! Command-line interface for swift-doc-coverage.

use std::fs::{self, File};
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use crate::analysis::Visibility;
use crate::config::Config;
use crate::coverage::Coverage;
use crate::report::{ReportFormat, Reporter};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

/// Generates documentation coverage statistics for Swift files.
///
/// Every declaration at or above the minimum access level counts; it is
/// documented when a `///` or `/** */` comment precedes it.
#[derive(Parser, Debug)]
#[command(name = "swift-doc-coverage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// One or more paths to directories or Swift files
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Skip hidden files and directories (default: true)
    #[arg(short, long, value_name = "BOOL")]
    pub skips_hidden_files: Option<bool>,

    /// Skip files with paths matching the regular expression
    #[arg(short, long, value_name = "REGEX")]
    pub ignore_regex: Option<String>,

    /// Minimum access level counted: open, public, internal, fileprivate, private (default: public)
    #[arg(short, long, value_name = "LEVEL")]
    pub minimum_access_level: Option<Visibility>,

    /// Report mode: coverage, warnings, or json (default: coverage)
    #[arg(short, long, value_name = "MODE")]
    pub report: Option<ReportFormat>,

    /// File path for the generated report (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Config file values overridden by command-line flags.
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let path = match &self.config {
            Some(path) => Some(path.clone()),
            None => Config::discover(Path::new(".")),
        };
        let mut config = match path {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                Config::parse_file(&path)?
            }
            None => Config::default(),
        };

        if let Some(level) = self.minimum_access_level {
            config.minimum_access_level = Some(level);
        }
        if let Some(report) = self.report {
            config.report = Some(report);
        }
        if let Some(skip) = self.skips_hidden_files {
            config.skip_hidden_files = Some(skip);
        }
        if let Some(pattern) = &self.ignore_regex {
            config.ignore_regex = Some(pattern.clone()).filter(|p| !p.is_empty());
        }
        if let Some(output) = &self.output {
            config.output = Some(output.clone());
        }
        Ok(config)
    }
}

/// Run a coverage report.
pub fn run(cli: &Cli) -> anyhow::Result<i32> {
    let config = cli.resolve_config()?;
    let level = config.get_minimum_access_level();
    let format = config.get_report();
    debug!(%level, %format, inputs = cli.inputs.len(), "starting coverage run");

    let discovery = config.discovery()?;
    let coverage = Coverage::new(&cli.inputs, &discovery)?;
    let report = coverage.report(level)?;

    match &config.output {
        Some(path) => {
            let mut out = BufWriter::new(create_output(path)?);
            Reporter::new(format).write(&mut out, &report)?;
        }
        None => {
            let stdout = io::stdout();
            let color = stdout.is_terminal();
            let mut out = stdout.lock();
            Reporter::new(format).color(color).write(&mut out, &report)?;
        }
    }

    Ok(EXIT_SUCCESS)
}

/// Create the report file, and its directory if needed.
fn create_output(path: &Path) -> anyhow::Result<impl Write> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }
    File::create(path).with_context(|| format!("failed to create {}", path.display()))
}
