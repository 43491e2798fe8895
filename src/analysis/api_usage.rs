//! Insecure-API usage scan over discovered method descriptors.

use crate::facts::MethodDescriptor;
use crate::rules::RiskRuleSet;

/// Flag every descriptor that matches any insecure-API pattern.
///
/// Descriptors are evaluated independently and in input order; the result
/// keeps that order and multiplicity. A descriptor hitting several
/// patterns still contributes exactly one entry per occurrence (patterns
/// are OR-combined per descriptor, not counted per pattern).
pub fn scan_methods(methods: &[MethodDescriptor], rules: &RiskRuleSet) -> Vec<String> {
    let mut matches = Vec::new();
    for method in methods {
        let descriptor = method.descriptor();
        if rules.matches_descriptor(&descriptor) {
            matches.push(descriptor);
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_sequence_yields_empty_result() {
        assert!(scan_methods(&[], RiskRuleSet::builtin()).is_empty());
    }

    #[test]
    fn both_substrings_must_share_one_descriptor() {
        // `openConnection` alone is not enough for the URL rule; the
        // descriptor must also name the java/net/URL class.
        let methods = vec![
            MethodDescriptor::new("com.example.Foo", "openConnection"),
            MethodDescriptor::new("java/net/URL", "openConnection"),
            MethodDescriptor::new("a.B", "harmless"),
        ];
        let found = scan_methods(&methods, RiskRuleSet::builtin());
        assert_eq!(found, vec!["java/net/URL->openConnection".to_string()]);
    }

    #[test]
    fn order_and_multiplicity_preserved() {
        let methods = vec![
            MethodDescriptor::new("Ljava/net/HttpURLConnection;", "connect"),
            MethodDescriptor::new("Lcom/example/Safe;", "run"),
            MethodDescriptor::new("Ljava/net/URL;", "openConnection"),
            // Same call site discovered twice stays counted twice.
            MethodDescriptor::new("Ljava/net/HttpURLConnection;", "connect"),
        ];
        let found = scan_methods(&methods, RiskRuleSet::builtin());
        assert_eq!(
            found,
            vec![
                "Ljava/net/HttpURLConnection;->connect".to_string(),
                "Ljava/net/URL;->openConnection".to_string(),
                "Ljava/net/HttpURLConnection;->connect".to_string(),
            ]
        );
    }

    #[test]
    fn multi_pattern_hit_counts_once_per_occurrence() {
        // Matches both the HttpURLConnection rule and the URL rule, but
        // contributes a single entry.
        let methods = vec![MethodDescriptor::new(
            "Ljava/net/URL;",
            "openConnectionHttpURLConnection",
        )];
        let found = scan_methods(&methods, RiskRuleSet::builtin());
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn webview_interface_flagged() {
        let methods = vec![MethodDescriptor::new(
            "Landroid/webkit/WebView;",
            "addJavascriptInterface",
        )];
        let found = scan_methods(&methods, RiskRuleSet::builtin());
        assert_eq!(
            found,
            vec!["Landroid/webkit/WebView;->addJavascriptInterface".to_string()]
        );
    }
}
