//! Data model shared by the menu, the dependency guard and the copy flow.

use serde::{Deserialize, Serialize};

/// Screen position of the menu, in host pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, by: Position) -> Self {
        Self {
            x: self.x.saturating_add(by.x),
            y: self.y.saturating_add(by.y),
        }
    }
}

/// Role flags supplied by the host each time the menu opens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuFlags {
    pub start_display: bool,
    pub execute_task_display: bool,
    pub menu_display: bool,
}

/// Run flag of a task definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskFlag {
    #[default]
    #[serde(rename = "YES", alias = "ON")]
    On,
    #[serde(rename = "NO", alias = "OFF")]
    Off,
}

/// Graph cell the menu was opened for. Owned by the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetNode {
    pub code: i64,
    pub task_type: String,
    pub task_name: String,
    #[serde(default)]
    pub flag: TaskFlag,
}

/// Historical execution record the menu may be opened for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInstanceRef {
    pub id: i64,
    pub task_type: String,
}

/// Host configuration read every time the menu opens for a node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuProps {
    pub visible: bool,
    pub position: Position,
    pub flags: MenuFlags,
    pub node: Option<TargetNode>,
    pub task_instance: Option<TaskInstanceRef>,
}

impl MenuProps {
    /// Props for a design-time node shown at `position`.
    pub fn for_node(node: TargetNode, position: Position, flags: MenuFlags) -> Self {
        Self {
            visible: true,
            position,
            flags,
            node: Some(node),
            task_instance: None,
        }
    }

    pub fn with_task_instance(mut self, instance: TaskInstanceRef) -> Self {
        self.task_instance = Some(instance);
        self
    }
}

/// Partial re-execution scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecuteMode {
    TaskOnly,
    TaskPost,
    TaskPre,
}

impl ExecuteMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TaskOnly => "TASK_ONLY",
            Self::TaskPost => "TASK_POST",
            Self::TaskPre => "TASK_PRE",
        }
    }
}

/// Dependent task reported by the lineage service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskLink {
    #[serde(default)]
    pub project_code: i64,
    #[serde(default, alias = "processDefinitionCode")]
    pub workflow_definition_code: i64,
    #[serde(default, alias = "processDefinitionName")]
    pub workflow_definition_name: String,
    #[serde(default)]
    pub task_definition_code: i64,
    #[serde(default)]
    pub task_definition_name: String,
}

impl TaskLink {
    pub fn label(&self) -> String {
        format!(
            "{} -> {}",
            self.workflow_definition_name, self.task_definition_name
        )
    }
}
