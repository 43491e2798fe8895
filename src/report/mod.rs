//! The classification report: the canonical, persisted result record.

pub mod store;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub use store::ReportStore;

/// Result of classifying one application package.
///
/// Immutable once built. Field names and level spellings are the on-disk
/// JSON contract; sorted sets make re-classification of the same facts
/// byte-identical on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskReport {
    pub app_name: String,
    /// Package identifier; keys the persisted report.
    pub package: String,
    /// All permissions the application declares.
    pub permissions: BTreeSet<String>,
    /// Declared permissions that are on the dangerous list. Always a
    /// subset of `permissions`.
    pub risky_permissions: BTreeSet<String>,
    /// One entry per matched method descriptor, `Class->method`, in scan
    /// order, duplicates preserved.
    pub insecure_apis: Vec<String>,
    pub risk_score: u32,
    pub risk_level: RiskLevel,
}

/// Discrete severity bucket derived from the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_str_lenient(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" | "med" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_serializes_capitalized() {
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"High\"");
        assert_eq!(RiskLevel::from_str_lenient("medium"), Some(RiskLevel::Medium));
        assert_eq!(RiskLevel::from_str_lenient("nope"), None);
    }

    #[test]
    fn levels_order_by_severity() {
        assert!(RiskLevel::High > RiskLevel::Medium);
        assert!(RiskLevel::Medium > RiskLevel::Low);
    }
}
