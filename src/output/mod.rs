pub mod console;
pub mod json;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::report::RiskReport;

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
}

impl OutputFormat {
    pub fn from_str_lenient(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "console" | "text" => Some(Self::Console),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Render a report into the specified format.
pub fn render(report: &RiskReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Console => Ok(console::render(report)),
        OutputFormat::Json => json::render(report),
    }
}
