//! Minimal graph model used by hosts without their own canvas.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use dagmenu_core::api::{CopyRequest, GraphMutator, TargetNode};

#[derive(Default)]
pub struct InMemoryGraph {
    cells: Mutex<BTreeMap<i64, TargetNode>>,
}

impl InMemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn cells(&self) -> MutexGuard<'_, BTreeMap<i64, TargetNode>> {
        self.cells
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add_cell(&self, node: TargetNode) {
        self.cells().insert(node.code, node);
    }

    pub fn get(&self, code: i64) -> Option<TargetNode> {
        self.cells().get(&code).cloned()
    }

    pub fn contains(&self, code: i64) -> bool {
        self.cells().contains_key(&code)
    }

    pub fn len(&self) -> usize {
        self.cells().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells().is_empty()
    }

    /// Insert the duplicate described by a copy event.
    pub fn apply_copy(&self, request: &CopyRequest) {
        self.add_cell(TargetNode {
            code: request.new_code,
            task_type: request.task_type.clone(),
            task_name: request.generated_name.clone(),
            flag: request.flag,
        });
    }
}

impl GraphMutator for InMemoryGraph {
    fn remove_cell(&self, node: &TargetNode) {
        if self.cells().remove(&node.code).is_none() {
            tracing::debug!(target: "dagmenu.graph", code = node.code, "remove of unknown cell");
        }
    }
}
