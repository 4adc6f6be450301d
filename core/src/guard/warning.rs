use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::menu::TaskLink;

/// Payload for the host's "dependent tasks exist" dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyWarning {
    show: bool,
    task_links: Vec<TaskLink>,
    message: String,
    required: bool,
}

impl DependencyWarning {
    /// `None` when there is nothing to warn about, so a shown warning always
    /// carries at least one link.
    pub fn blocking(task_links: Vec<TaskLink>, message: impl Into<String>) -> Option<Self> {
        if task_links.is_empty() {
            return None;
        }
        Some(Self {
            show: true,
            task_links,
            message: message.into(),
            required: true,
        })
    }

    pub fn show(&self) -> bool {
        self.show
    }

    pub fn task_links(&self) -> &[TaskLink] {
        &self.task_links
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn required(&self) -> bool {
        self.required
    }
}

/// Output channel for dependency warnings; the host renders the dialog.
pub trait WarningSink: Send + Sync {
    fn warn(&self, warning: DependencyWarning);

    /// Called when a new check starts, before its lookup runs.
    fn clear(&self) {}
}

/// Keeps the most recent warning until the host takes it.
#[derive(Clone, Default)]
pub struct LatestWarning {
    slot: Arc<Mutex<Option<DependencyWarning>>>,
}

impl LatestWarning {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Option<DependencyWarning> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }
}

impl WarningSink for LatestWarning {
    fn warn(&self, warning: DependencyWarning) {
        *self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(warning);
    }

    fn clear(&self) {
        self.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_links_never_show() {
        assert!(DependencyWarning::blocking(Vec::new(), "x").is_none());
    }

    #[test]
    fn test_latest_warning_is_taken_once() {
        let latest = LatestWarning::new();
        let warning = DependencyWarning::blocking(vec![TaskLink::default()], "blocked").unwrap();
        latest.warn(warning.clone());
        assert_eq!(latest.take(), Some(warning));
        assert_eq!(latest.take(), None);
    }

    #[test]
    fn test_clear_drops_pending_warning() {
        let latest = LatestWarning::new();
        latest.warn(DependencyWarning::blocking(vec![TaskLink::default()], "blocked").unwrap());
        latest.clear();
        assert_eq!(latest.take(), None);
    }
}
