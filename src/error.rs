use thiserror::Error;

pub type Result<T> = std::result::Result<T, RiskError>;

#[derive(Error, Debug)]
pub enum RiskError {
    #[error("Unreadable package archive {path}: {message}")]
    Archive { path: String, message: String },

    #[error("Analysis of {path} failed: {message}")]
    Analysis { path: String, message: String },

    #[error("Could not persist report for {package}: {source}")]
    Persist {
        package: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl RiskError {
    pub fn exit_code(&self) -> i32 {
        2
    }

    /// True for failures of the upstream fact-extraction step, as opposed
    /// to local I/O or configuration problems.
    pub fn is_analysis_failure(&self) -> bool {
        matches!(self, Self::Archive { .. } | Self::Analysis { .. })
    }
}
