//! Collaborators the menu depends on but does not implement.

use async_trait::async_trait;

use crate::menu::{TargetNode, TaskLink};

/// Lineage lookup used before deleting a node.
#[async_trait]
pub trait DependencyLookup: Send + Sync {
    fn name(&self) -> &str;

    async fn dependent_task_links(
        &self,
        project_code: i64,
        workflow_code: i64,
        task_code: i64,
    ) -> anyhow::Result<Vec<TaskLink>>;
}

/// Issues fresh task-definition codes.
#[async_trait]
pub trait TaskCodeGenerator: Send + Sync {
    fn name(&self) -> &str;

    async fn generate_task_codes(&self, count: usize, project_code: i64) -> anyhow::Result<Vec<i64>>;
}

/// Graph mutations the menu is allowed to perform.
pub trait GraphMutator: Send + Sync {
    fn remove_cell(&self, node: &TargetNode);
}
