//! Declared-permission matching.

use std::collections::BTreeSet;

use crate::rules::RiskRuleSet;

/// Intersection of the declared permissions with the dangerous set.
/// Empty input yields an empty set, never an error.
pub fn match_permissions(declared: &BTreeSet<String>, rules: &RiskRuleSet) -> BTreeSet<String> {
    declared
        .iter()
        .filter(|p| rules.is_dangerous_permission(p))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declared(perms: &[&str]) -> BTreeSet<String> {
        perms.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn intersects_with_dangerous_set() {
        let risky = match_permissions(
            &declared(&["android.permission.CAMERA", "android.permission.INTERNET"]),
            RiskRuleSet::builtin(),
        );
        assert_eq!(risky, declared(&["android.permission.CAMERA"]));
    }

    #[test]
    fn harmless_permissions_produce_empty_set() {
        let risky = match_permissions(
            &declared(&["android.permission.INTERNET", "android.permission.VIBRATE"]),
            RiskRuleSet::builtin(),
        );
        assert!(risky.is_empty());
    }

    #[test]
    fn empty_declared_set_is_fine() {
        assert!(match_permissions(&BTreeSet::new(), RiskRuleSet::builtin()).is_empty());
    }

    #[test]
    fn all_dangerous_permissions_survive() {
        let all = declared(&[
            "android.permission.READ_SMS",
            "android.permission.RECORD_AUDIO",
            "android.permission.CAMERA",
            "android.permission.ACCESS_FINE_LOCATION",
            "android.permission.WRITE_EXTERNAL_STORAGE",
            "android.permission.READ_CONTACTS",
            "android.permission.SEND_SMS",
        ]);
        let risky = match_permissions(&all, RiskRuleSet::builtin());
        assert_eq!(risky, all);
    }
}
