use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use super::types::ExecuteMode;
use crate::copy::CopyRequest;

/// Notifications from the menu to its host. Fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum MenuEvent {
    Hide,
    Start {
        code: i64,
    },
    Edit {
        code: i64,
    },
    CopyTask(CopyRequest),
    RemoveTasks {
        codes: Vec<i64>,
    },
    #[serde(rename_all = "camelCase")]
    ViewLog {
        instance_id: i64,
        task_type: String,
    },
    ExecuteTask {
        code: i64,
        mode: ExecuteMode,
    },
    #[serde(rename_all = "camelCase")]
    RemoveTaskInstanceCache {
        instance_id: i64,
    },
}

impl MenuEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hide => "hide",
            Self::Start { .. } => "start",
            Self::Edit { .. } => "edit",
            Self::CopyTask(_) => "copyTask",
            Self::RemoveTasks { .. } => "removeTasks",
            Self::ViewLog { .. } => "viewLog",
            Self::ExecuteTask { .. } => "executeTask",
            Self::RemoveTaskInstanceCache { .. } => "removeTaskInstanceCache",
        }
    }
}

/// Receives menu events on behalf of the host.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: MenuEvent);
}

/// Sink backed by an unbounded channel; the host drains the receiver.
#[derive(Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<MenuEvent>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<MenuEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl EventSink for ChannelSink {
    fn emit(&self, event: MenuEvent) {
        if self.tx.send(event).is_err() {
            // host dropped the receiver
            tracing::debug!(target: "dagmenu.menu", stage = "menu.emit.closed");
        }
    }
}
