//! Facts provider backed by an exported analysis document.
//!
//! The heavy lifting (APK unpacking, DEX disassembly, call-site
//! enumeration) is done out of process by an extraction tool; it writes
//! its findings as a JSON document which this provider deserializes into
//! `ApplicationFacts`. Given an `.json` path the document is read
//! directly; given an archive path, a `<archive>.facts.json` sidecar is
//! expected next to it.

use std::path::{Path, PathBuf};

use super::{ApplicationFacts, FactsProvider};
use crate::error::{Result, RiskError};

pub struct JsonFactsProvider;

impl JsonFactsProvider {
    fn resolve(&self, path: &Path) -> Result<PathBuf> {
        if path.extension().is_some_and(|e| e == "json") {
            return Ok(path.to_path_buf());
        }
        let sidecar = PathBuf::from(format!("{}.facts.json", path.display()));
        if sidecar.exists() {
            return Ok(sidecar);
        }
        Err(RiskError::Archive {
            path: path.display().to_string(),
            message: format!(
                "no analysis output found (expected {})",
                sidecar.display()
            ),
        })
    }
}

impl FactsProvider for JsonFactsProvider {
    fn name(&self) -> &'static str {
        "json-facts"
    }

    fn load(&self, path: &Path) -> Result<ApplicationFacts> {
        let doc = self.resolve(path)?;

        let content = std::fs::read_to_string(&doc).map_err(|e| RiskError::Archive {
            path: doc.display().to_string(),
            message: e.to_string(),
        })?;

        let facts: ApplicationFacts =
            serde_json::from_str(&content).map_err(|e| RiskError::Analysis {
                path: doc.display().to_string(),
                message: format!("malformed facts document: {e}"),
            })?;

        tracing::debug!(
            package = %facts.package,
            permissions = facts.permissions.len(),
            methods = facts.methods.len(),
            "loaded application facts"
        );

        Ok(facts)
    }
}
