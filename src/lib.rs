//! apkrisk — privacy risk scanner for Android application packages.
//!
//! Classifies an application by its declared permissions and its use of
//! known-sensitive platform APIs, producing a scored risk report that is
//! persisted as JSON keyed by package id. Archive unpacking and bytecode
//! disassembly happen in an external extraction step; this crate consumes
//! the exported facts.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use apkrisk::{scan_archive, ScanOptions};
//!
//! let options = ScanOptions::default();
//! let outcome = scan_archive(Path::new("./app.apk"), &options).unwrap();
//! println!("{}: {}", outcome.report.package, outcome.report.risk_level);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod facts;
pub mod output;
pub mod report;
pub mod rules;

use std::path::{Path, PathBuf};

use config::Config;
use error::{Result, RiskError};
use facts::json::JsonFactsProvider;
use facts::FactsProvider;
use report::{ReportStore, RiskReport};

pub use analysis::classify;

/// Options for a scan invocation.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Path to config file (defaults to `.apkrisk.toml` in the working
    /// directory).
    pub config_path: Option<PathBuf>,
    /// CLI override for the reports directory.
    pub reports_dir: Option<PathBuf>,
}

/// Result of a scan: the computed report, plus where (and whether) it
/// was persisted.
///
/// A persistence failure does not discard the report; the error is
/// carried here so callers can surface it.
#[derive(Debug)]
pub struct ScanOutcome {
    pub report: RiskReport,
    pub report_path: Option<PathBuf>,
    pub persist_error: Option<RiskError>,
}

/// Run a complete scan: extract facts, classify, persist the report.
///
/// Fact-extraction failures abort the scan with a typed error and
/// nothing is persisted.
pub fn scan_archive(path: &Path, options: &ScanOptions) -> Result<ScanOutcome> {
    let provider = JsonFactsProvider;
    scan_archive_with(&provider, path, options)
}

/// Like [`scan_archive`], with an explicit facts provider.
pub fn scan_archive_with(
    provider: &dyn FactsProvider,
    path: &Path,
    options: &ScanOptions,
) -> Result<ScanOutcome> {
    let config_path = options
        .config_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(".apkrisk.toml"));
    let config = Config::load(&config_path)?;
    let rules = config.rule_set()?;

    tracing::info!(
        provider = provider.name(),
        path = %path.display(),
        "extracting application facts"
    );
    let facts = provider.load(path)?;

    let report = analysis::classify(&facts, &rules);

    let reports_dir = options
        .reports_dir
        .clone()
        .unwrap_or_else(|| config.reports.dir.clone());
    let store = ReportStore::new(reports_dir);

    match store.persist(&report) {
        Ok(report_path) => Ok(ScanOutcome {
            report,
            report_path: Some(report_path),
            persist_error: None,
        }),
        Err(e) => {
            tracing::warn!(package = %report.package, error = %e, "could not persist report");
            Ok(ScanOutcome {
                report,
                report_path: None,
                persist_error: Some(e),
            })
        }
    }
}
