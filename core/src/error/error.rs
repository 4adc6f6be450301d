use thiserror::Error;

use crate::guard::TransitionError;
use crate::menu::ActionKind;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("action not available: {0}")]
    ActionUnavailable(ActionKind),
    #[error("action waits on a service and must be dispatched asynchronously: {0}")]
    Gated(ActionKind),
    #[error("dependency lookup failed ({service}): {source}")]
    DependencyLookup {
        service: String,
        source: anyhow::Error,
    },
    #[error("task code generation failed ({service}): {source}")]
    CodeGeneration {
        service: String,
        source: anyhow::Error,
    },
    #[error("code generation returned no codes ({service})")]
    EmptyCodeBatch { service: String },
    #[error("guard state error: {0}")]
    Guard(#[from] TransitionError),
    #[error("config error: {0}")]
    Config(String),
}

impl MenuError {
    /// True for failures of an external collaborator.
    pub fn is_service_failure(&self) -> bool {
        matches!(
            self,
            Self::DependencyLookup { .. } | Self::CodeGeneration { .. } | Self::EmptyCodeBatch { .. }
        )
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot determine home directory")]
    NoHome,
    #[error("read {path} failed: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("parse {path} failed: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid value for {key}: {value}")]
    InvalidEnv { key: &'static str, value: String },
}

impl From<ConfigError> for MenuError {
    fn from(e: ConfigError) -> Self {
        MenuError::Config(e.to_string())
    }
}
