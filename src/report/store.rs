//! Durable report storage: one pretty-printed JSON file per package id.

use std::path::{Path, PathBuf};

use crate::error::{Result, RiskError};

use super::RiskReport;

/// Filesystem-backed report store. Reports are keyed by package id;
/// persisting a package that already has a report replaces it (no
/// history kept).
#[derive(Debug, Clone)]
pub struct ReportStore {
    dir: PathBuf,
}

impl ReportStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the report file for a package id.
    pub fn path_for(&self, package: &str) -> PathBuf {
        // Package ids are dotted Java identifiers, but don't trust the
        // extraction tool with path separators.
        let safe: String = package
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        self.dir.join(format!("{safe}.json"))
    }

    /// Write `report` for its package id, replacing any prior report.
    ///
    /// The file is written to a temporary name and renamed into place, so
    /// readers never observe a partially-written report.
    pub fn persist(&self, report: &RiskReport) -> Result<PathBuf> {
        let persist_io = |e: std::io::Error| RiskError::Persist {
            package: report.package.clone(),
            source: e,
        };

        std::fs::create_dir_all(&self.dir).map_err(persist_io)?;

        let path = self.path_for(&report.package);
        let tmp = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(report)?;
        std::fs::write(&tmp, json).map_err(persist_io)?;
        std::fs::rename(&tmp, &path).map_err(persist_io)?;

        tracing::debug!(package = %report.package, path = %path.display(), "report persisted");
        Ok(path)
    }

    /// Load the current report for a package id, if one exists.
    pub fn load(&self, package: &str) -> Result<Option<RiskReport>> {
        let path = self.path_for(package);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        let report: RiskReport = serde_json::from_str(&content)?;
        Ok(Some(report))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
