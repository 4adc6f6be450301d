use dagmenu_core::api::{ConfigError, MenuError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("menu error: {0}")]
    Menu(#[from] MenuError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("logging setup failed: {0}")]
    Logging(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    // 0: success
    // 3: delete blocked by dependents (returned as a normal exit code)
    // 4: copy abandoned (returned as a normal exit code)
    // 11: config error
    // 12: action not available for the given menu state
    // 20: service / IO error
    // 50: internal
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) | CliError::Logging(_) => 11,
            CliError::Menu(me) => match me {
                MenuError::Config(_) => 11,
                MenuError::ActionUnavailable(_) | MenuError::Gated(_) => 12,
                MenuError::DependencyLookup { .. }
                | MenuError::CodeGeneration { .. }
                | MenuError::EmptyCodeBatch { .. } => 20,
                MenuError::Guard(_) => 50,
            },
            CliError::Io(_) => 20,
        }
    }
}
