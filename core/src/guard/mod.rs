//! Dependency guard for node deletion.
//!
//! A delete only goes ahead once the lineage service has answered with an
//! empty list. A failed lookup is treated as "unknown" and never as "no
//! dependents". Each call runs its own independent check; concurrent checks
//! for the same node are neither merged nor cancelled.

pub mod phase;
pub mod warning;

use std::sync::Arc;

use crate::error::MenuError;
use crate::services::DependencyLookup;

pub use phase::{DependencyCheck, GuardPhase, TransitionError};
pub use warning::{DependencyWarning, LatestWarning, WarningSink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardVerdict {
    Blocked(DependencyWarning),
    Allowed,
}

#[derive(Clone)]
pub struct DependencyGuard {
    lookup: Arc<dyn DependencyLookup>,
    message: String,
}

impl DependencyGuard {
    pub fn new(lookup: Arc<dyn DependencyLookup>, message: impl Into<String>) -> Self {
        Self {
            lookup,
            message: message.into(),
        }
    }

    pub async fn check(
        &self,
        project_code: i64,
        workflow_code: i64,
        task_code: i64,
    ) -> Result<GuardVerdict, MenuError> {
        let mut check = DependencyCheck::default();
        check.advance(GuardPhase::Checking)?;
        tracing::debug!(
            target: "dagmenu.guard",
            stage = "guard.check.in",
            service = self.lookup.name(),
            project_code,
            workflow_code,
            task_code
        );

        let links = self
            .lookup
            .dependent_task_links(project_code, workflow_code, task_code)
            .await
            .map_err(|source| MenuError::DependencyLookup {
                service: self.lookup.name().to_string(),
                source,
            })?;

        let verdict = match DependencyWarning::blocking(links, self.message.clone()) {
            Some(warning) => {
                check.advance(GuardPhase::Blocked)?;
                tracing::info!(
                    target: "dagmenu.guard",
                    stage = "guard.check.out",
                    task_code,
                    dependents = warning.task_links().len(),
                    "delete blocked by dependent tasks"
                );
                GuardVerdict::Blocked(warning)
            }
            None => {
                check.advance(GuardPhase::Allowed)?;
                tracing::debug!(
                    target: "dagmenu.guard",
                    stage = "guard.check.out",
                    task_code,
                    dependents = 0
                );
                GuardVerdict::Allowed
            }
        };
        Ok(verdict)
    }
}
