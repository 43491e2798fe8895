//! The classification pipeline: permission matching, API-usage scanning,
//! scoring, report assembly.

pub mod api_usage;
pub mod permissions;
pub mod scoring;

use crate::facts::ApplicationFacts;
use crate::report::RiskReport;
use crate::rules::RiskRuleSet;

/// Classify one application's facts against a rule set.
///
/// Pure and deterministic: no I/O, no shared mutable state. The same
/// facts and rules always produce the same report.
pub fn classify(facts: &ApplicationFacts, rules: &RiskRuleSet) -> RiskReport {
    let risky_permissions = permissions::match_permissions(&facts.permissions, rules);
    let insecure_apis = api_usage::scan_methods(&facts.methods, rules);
    let (risk_score, risk_level) = scoring::score(risky_permissions.len(), insecure_apis.len());

    tracing::debug!(
        package = %facts.package,
        risky_permissions = risky_permissions.len(),
        insecure_apis = insecure_apis.len(),
        risk_score,
        risk_level = %risk_level,
        "classified package"
    );

    RiskReport {
        app_name: facts.app_name.clone(),
        package: facts.package.clone(),
        permissions: facts.permissions.clone(),
        risky_permissions,
        insecure_apis,
        risk_score,
        risk_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::MethodDescriptor;
    use crate::report::RiskLevel;
    use std::collections::BTreeSet;

    fn facts(permissions: &[&str], methods: Vec<MethodDescriptor>) -> ApplicationFacts {
        ApplicationFacts {
            app_name: "Demo".into(),
            package: "com.example.demo".into(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            methods,
        }
    }

    #[test]
    fn empty_facts_yield_zero_score_low() {
        let report = classify(&facts(&[], vec![]), RiskRuleSet::builtin());
        assert!(report.risky_permissions.is_empty());
        assert!(report.insecure_apis.is_empty());
        assert_eq!(report.risk_score, 0);
        assert_eq!(report.risk_level, RiskLevel::Low);
    }

    #[test]
    fn risky_permissions_are_subset_of_declared() {
        let report = classify(
            &facts(
                &["android.permission.CAMERA", "android.permission.INTERNET"],
                vec![],
            ),
            RiskRuleSet::builtin(),
        );
        assert_eq!(report.permissions.len(), 2);
        assert_eq!(
            report.risky_permissions,
            BTreeSet::from(["android.permission.CAMERA".to_string()])
        );
        assert!(report.risky_permissions.is_subset(&report.permissions));
        assert_eq!(report.risk_score, 2);
        assert_eq!(report.risk_level, RiskLevel::Low);
    }

    #[test]
    fn score_combines_permissions_and_apis() {
        // 2 risky permissions and 3 API hits: 2*2 + 3*3 = 13 -> High.
        let report = classify(
            &facts(
                &["android.permission.CAMERA", "android.permission.READ_SMS"],
                vec![
                    MethodDescriptor::new("Ljava/net/URL;", "openConnection"),
                    MethodDescriptor::new("Ljava/net/HttpURLConnection;", "connect"),
                    MethodDescriptor::new("Landroid/webkit/WebView;", "addJavascriptInterface"),
                ],
            ),
            RiskRuleSet::builtin(),
        );
        assert_eq!(report.risk_score, 13);
        assert_eq!(report.risk_level, RiskLevel::High);
    }

    #[test]
    fn classification_is_deterministic() {
        let f = facts(
            &["android.permission.RECORD_AUDIO"],
            vec![MethodDescriptor::new("Ljava/net/URL;", "openConnection")],
        );
        let rules = RiskRuleSet::builtin();
        let a = classify(&f, rules);
        let b = classify(&f, rules);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string_pretty(&a).unwrap(),
            serde_json::to_string_pretty(&b).unwrap()
        );
    }
}
