//! Localized strings used by the menu.

use serde::{Deserialize, Serialize};

use crate::menu::ActionKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    /// Warning shown when a node still has downstream dependents.
    pub fn dependent_tasks_message(self) -> &'static str {
        match self {
            Self::En => "The downstream dependent tasks exists. You can not delete the task.",
            Self::Zh => "下游存在依赖，你不能删除该任务。",
        }
    }

    pub fn action_label(self, kind: ActionKind) -> &'static str {
        match (self, kind) {
            (Self::En, ActionKind::Start) => "Start",
            (Self::En, ActionKind::Edit) => "Edit",
            (Self::En, ActionKind::Copy) => "Copy",
            (Self::En, ActionKind::Delete) => "Delete",
            (Self::En, ActionKind::ViewLog) => "View log",
            (Self::En, ActionKind::ClearInstanceCache) => "Clear cache",
            (Self::En, ActionKind::ExecuteTaskOnly) => "Execute only the current node",
            (Self::En, ActionKind::ExecuteDownstream) => "Backward execution",
            (Self::En, ActionKind::ExecuteUpstream) => "Forward execution",
            (Self::Zh, ActionKind::Start) => "启动",
            (Self::Zh, ActionKind::Edit) => "编辑",
            (Self::Zh, ActionKind::Copy) => "复制",
            (Self::Zh, ActionKind::Delete) => "删除",
            (Self::Zh, ActionKind::ViewLog) => "查看日志",
            (Self::Zh, ActionKind::ClearInstanceCache) => "清除缓存",
            (Self::Zh, ActionKind::ExecuteTaskOnly) => "仅执行当前节点",
            (Self::Zh, ActionKind::ExecuteDownstream) => "向后执行",
            (Self::Zh, ActionKind::ExecuteUpstream) => "向前执行",
        }
    }
}
