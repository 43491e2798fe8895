//! The risk rule registry.
//!
//! Rules are data, not code: a set of permission identifiers considered
//! dangerous, and an ordered list of substring patterns over method
//! descriptors considered insecure. The registry is built once at startup
//! and passed by reference into every classification; nothing mutates it
//! afterwards, so concurrent readers need no synchronization.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RiskError};

/// Permissions treated as privacy-sensitive regardless of context.
pub const DANGEROUS_PERMISSIONS: &[&str] = &[
    "android.permission.READ_SMS",
    "android.permission.RECORD_AUDIO",
    "android.permission.CAMERA",
    "android.permission.ACCESS_FINE_LOCATION",
    "android.permission.WRITE_EXTERNAL_STORAGE",
    "android.permission.READ_CONTACTS",
    "android.permission.SEND_SMS",
];

/// A pattern over the `Class->method` descriptor string. Matches when
/// every listed substring occurs somewhere in the descriptor.
///
/// Substring matching is deliberately blunt: a class merely *containing*
/// `HttpURLConnection` in its name will match. That over-reporting is the
/// intended recall/precision trade-off of the heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiPattern {
    /// Short identifier for logs and `list-rules` output.
    pub name: String,
    /// Required substrings; all must be present in the same descriptor.
    pub substrings: Vec<String>,
}

impl ApiPattern {
    pub fn new(name: &str, substrings: &[&str]) -> Self {
        Self {
            name: name.into(),
            substrings: substrings.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn matches(&self, descriptor: &str) -> bool {
        self.substrings.iter().all(|s| descriptor.contains(s))
    }
}

/// Immutable rule registry: dangerous permissions plus insecure-API
/// patterns.
#[derive(Debug, Clone, Serialize)]
pub struct RiskRuleSet {
    dangerous_permissions: BTreeSet<String>,
    api_patterns: Vec<ApiPattern>,
}

static BUILTIN: Lazy<RiskRuleSet> = Lazy::new(|| RiskRuleSet {
    dangerous_permissions: DANGEROUS_PERMISSIONS
        .iter()
        .map(|p| p.to_string())
        .collect(),
    api_patterns: vec![
        ApiPattern::new(
            "webview-js-interface",
            &["WebView", "addJavascriptInterface"],
        ),
        ApiPattern::new("http-url-connection", &["HttpURLConnection"]),
        ApiPattern::new("url-open-connection", &["openConnection", "java/net/URL"]),
    ],
});

impl RiskRuleSet {
    /// The builtin registry shared across the process.
    pub fn builtin() -> &'static RiskRuleSet {
        &BUILTIN
    }

    /// Builtin rules extended with user-supplied permissions and patterns.
    ///
    /// A pattern with no substrings would match every descriptor, which is
    /// never what a config author meant; reject it up front.
    pub fn with_extras(
        extra_permissions: &[String],
        extra_patterns: &[ApiPattern],
    ) -> Result<RiskRuleSet> {
        let mut rules = BUILTIN.clone();
        rules
            .dangerous_permissions
            .extend(extra_permissions.iter().cloned());
        for pattern in extra_patterns {
            if pattern.substrings.is_empty() {
                return Err(RiskError::Config(format!(
                    "API pattern '{}' has no substrings",
                    pattern.name
                )));
            }
            rules.api_patterns.push(pattern.clone());
        }
        Ok(rules)
    }

    pub fn is_dangerous_permission(&self, permission: &str) -> bool {
        self.dangerous_permissions.contains(permission)
    }

    /// Whether any insecure-API pattern matches the descriptor formed
    /// from `class_name` and `method_name`.
    pub fn match_insecure_api(&self, class_name: &str, method_name: &str) -> bool {
        let descriptor = format!("{class_name}->{method_name}");
        self.matches_descriptor(&descriptor)
    }

    pub(crate) fn matches_descriptor(&self, descriptor: &str) -> bool {
        self.api_patterns.iter().any(|p| p.matches(descriptor))
    }

    pub fn dangerous_permissions(&self) -> &BTreeSet<String> {
        &self.dangerous_permissions
    }

    pub fn api_patterns(&self) -> &[ApiPattern] {
        &self.api_patterns
    }
}
