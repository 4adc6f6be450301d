use std::sync::Arc;

use crate::config::MenuConfig;
use crate::error::MenuError;
use crate::services::{DependencyLookup, TaskCodeGenerator};

/// Project and workflow the menu operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuContext {
    pub project_code: i64,
    pub workflow_code: i64,
}

impl MenuContext {
    pub fn new(project_code: i64, workflow_code: i64) -> Self {
        Self {
            project_code,
            workflow_code,
        }
    }

    pub fn from_config(cfg: &MenuConfig) -> Self {
        Self::new(cfg.project_code, cfg.workflow_code)
    }
}

/// Remote collaborators built from configuration. The graph is host-owned
/// and handed to the menu separately.
#[derive(Clone)]
pub struct Services {
    pub dependency_lookup: Arc<dyn DependencyLookup>,
    pub code_generator: Arc<dyn TaskCodeGenerator>,
}

#[async_trait::async_trait]
pub trait ServicesFactory: Send + Sync {
    async fn build_services(&self, cfg: &MenuConfig) -> Result<Services, MenuError>;
}
