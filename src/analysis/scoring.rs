//! Risk scoring and leveling policy.
//!
//! A simple, explainable heuristic: risky permissions weigh 2, insecure
//! API usages weigh 3, fixed thresholds bucket the total. Not a
//! probability, just a severity rating.

use crate::report::RiskLevel;

const PERMISSION_WEIGHT: u32 = 2;
const API_USAGE_WEIGHT: u32 = 3;

/// Compute the score and level from match counts.
///
/// Counts come from set/sequence sizes, so non-negativity is enforced by
/// the types.
pub fn score(risky_permissions: usize, insecure_apis: usize) -> (u32, RiskLevel) {
    let total = PERMISSION_WEIGHT * risky_permissions as u32 + API_USAGE_WEIGHT * insecure_apis as u32;
    (total, level_for(total))
}

/// Bucket a score: above 10 is High, above 5 is Medium, otherwise Low.
/// Both boundaries are exclusive; exactly 10 is Medium, exactly 5 is Low.
pub fn level_for(score: u32) -> RiskLevel {
    if score > 10 {
        RiskLevel::High
    } else if score > 5 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
