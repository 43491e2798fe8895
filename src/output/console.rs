use crate::report::{RiskLevel, RiskReport};

/// Render a report as plain console text.
pub fn render(report: &RiskReport) -> String {
    let mut output = String::new();

    let level_tag = match report.risk_level {
        RiskLevel::High => "[HIGH]  ",
        RiskLevel::Medium => "[MEDIUM]",
        RiskLevel::Low => "[LOW]   ",
    };

    output.push_str(&format!("\n  Report for: {}\n", report.app_name));
    output.push_str(&format!("  Package:    {}\n", report.package));
    output.push_str(&format!(
        "  Risk:       {} score {}\n\n",
        level_tag, report.risk_score
    ));

    output.push_str(&format!(
        "  Used permissions ({}):\n",
        report.permissions.len()
    ));
    for p in &report.permissions {
        output.push_str(&format!("    {}\n", p));
    }

    output.push_str(&format!(
        "\n  Risky permissions ({}):\n",
        report.risky_permissions.len()
    ));
    for p in &report.risky_permissions {
        output.push_str(&format!("    {}\n", p));
    }

    output.push_str(&format!(
        "\n  Insecure API usage ({}):\n",
        report.insecure_apis.len()
    ));
    for api in &report.insecure_apis {
        output.push_str(&format!("    {}\n", api));
    }

    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn renders_all_report_fields() {
        let report = RiskReport {
            app_name: "Demo".into(),
            package: "com.example.demo".into(),
            permissions: BTreeSet::from([
                "android.permission.CAMERA".to_string(),
                "android.permission.INTERNET".to_string(),
            ]),
            risky_permissions: BTreeSet::from(["android.permission.CAMERA".to_string()]),
            insecure_apis: vec!["Ljava/net/URL;->openConnection".into()],
            risk_score: 5,
            risk_level: RiskLevel::Low,
        };

        let text = render(&report);
        assert!(text.contains("Report for: Demo"));
        assert!(text.contains("com.example.demo"));
        assert!(text.contains("[LOW]"));
        assert!(text.contains("score 5"));
        assert!(text.contains("android.permission.CAMERA"));
        assert!(text.contains("Ljava/net/URL;->openConnection"));
    }
}
