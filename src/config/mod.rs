use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules::{ApiPattern, RiskRuleSet};

/// Top-level configuration from `.apkrisk.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub reports: ReportsConfig,
    #[serde(default)]
    pub rules: RulesConfig,
}

/// Where classification reports are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportsConfig {
    #[serde(default = "default_reports_dir")]
    pub dir: PathBuf,
}

fn default_reports_dir() -> PathBuf {
    PathBuf::from("reports")
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            dir: default_reports_dir(),
        }
    }
}

/// User extensions to the builtin rule registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Additional permissions to treat as dangerous.
    #[serde(default)]
    pub extra_dangerous_permissions: Vec<String>,
    /// Additional insecure-API patterns.
    #[serde(default)]
    pub extra_api_patterns: Vec<ApiPattern>,
}

impl Config {
    /// Load config from a TOML file. Returns default if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Build the effective rule registry: builtin rules plus extensions.
    pub fn rule_set(&self) -> Result<RiskRuleSet> {
        RiskRuleSet::with_extras(
            &self.rules.extra_dangerous_permissions,
            &self.rules.extra_api_patterns,
        )
    }

    /// Generate a starter config file.
    pub fn starter_toml() -> &'static str {
        r#"# apkrisk configuration

[reports]
# Directory where classification reports are written, one JSON file per
# package id.
dir = "reports"

[rules]
# Additional permissions to treat as dangerous.
# extra_dangerous_permissions = ["android.permission.READ_CALL_LOG"]

# Additional insecure-API patterns. Every substring must occur in the
# "Class->method" descriptor for the pattern to match.
# [[rules.extra_api_patterns]]
# name = "dex-class-loader"
# substrings = ["DexClassLoader"]
"#
    }
}
