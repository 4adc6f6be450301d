use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{ExecuteMode, MenuFlags};

/// Menu entries, declared in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Start,
    Edit,
    Copy,
    Delete,
    ViewLog,
    ClearInstanceCache,
    ExecuteTaskOnly,
    ExecuteDownstream,
    ExecuteUpstream,
}

impl ActionKind {
    pub const ALL: [ActionKind; 9] = [
        ActionKind::Start,
        ActionKind::Edit,
        ActionKind::Copy,
        ActionKind::Delete,
        ActionKind::ViewLog,
        ActionKind::ClearInstanceCache,
        ActionKind::ExecuteTaskOnly,
        ActionKind::ExecuteDownstream,
        ActionKind::ExecuteUpstream,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Edit => "edit",
            Self::Copy => "copy",
            Self::Delete => "delete",
            Self::ViewLog => "view_log",
            Self::ClearInstanceCache => "clear_instance_cache",
            Self::ExecuteTaskOnly => "execute_task_only",
            Self::ExecuteDownstream => "execute_downstream",
            Self::ExecuteUpstream => "execute_upstream",
        }
    }

    /// Re-execution scope for the execute entries.
    pub fn execute_mode(self) -> Option<ExecuteMode> {
        match self {
            Self::ExecuteTaskOnly => Some(ExecuteMode::TaskOnly),
            Self::ExecuteDownstream => Some(ExecuteMode::TaskPost),
            Self::ExecuteUpstream => Some(ExecuteMode::TaskPre),
            _ => None,
        }
    }

    /// Copy and delete wait on an external service before emitting.
    pub fn is_gated(self) -> bool {
        matches!(self, Self::Copy | Self::Delete)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entries the menu offers for the given flags and task-instance presence.
pub fn compute_visible_actions(flags: MenuFlags, has_task_instance: bool) -> BTreeSet<ActionKind> {
    let mut actions = BTreeSet::new();

    if flags.start_display {
        actions.insert(ActionKind::Start);
    }
    if flags.menu_display {
        actions.extend([ActionKind::Edit, ActionKind::Copy, ActionKind::Delete]);
    }
    if has_task_instance {
        actions.extend([ActionKind::ViewLog, ActionKind::ClearInstanceCache]);
    }
    if flags.execute_task_display {
        actions.insert(ActionKind::ExecuteTaskOnly);
        if has_task_instance {
            actions.extend([ActionKind::ExecuteDownstream, ActionKind::ExecuteUpstream]);
        }
    }

    actions
}
