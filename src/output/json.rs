use crate::error::Result;
use crate::report::RiskReport;

/// Render a report as pretty-printed JSON, same shape as the persisted
/// form.
pub fn render(report: &RiskReport) -> Result<String> {
    let json = serde_json::to_string_pretty(report)?;
    Ok(json)
}
