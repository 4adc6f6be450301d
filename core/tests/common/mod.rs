#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dagmenu_core::api::{
    ContextMenu, DependencyLookup, EventSink, GraphMutator, MenuContext, MenuEvent, MenuFlags,
    MenuOptions, MenuProps, Position, Services, TargetNode, TaskCodeGenerator, TaskFlag,
    TaskInstanceRef, TaskLink,
};

/// Ordered record of graph mutations and emitted events.
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn push(&self, entry: String) {
        self.0.lock().unwrap().push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

pub struct JournalSink {
    pub journal: Journal,
    pub events: Mutex<Vec<MenuEvent>>,
}

impl JournalSink {
    pub fn events(&self) -> Vec<MenuEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventSink for JournalSink {
    fn emit(&self, event: MenuEvent) {
        self.journal.push(format!("event:{}", event.name()));
        self.events.lock().unwrap().push(event);
    }
}

pub struct RecordingGraph {
    pub journal: Journal,
}

impl GraphMutator for RecordingGraph {
    fn remove_cell(&self, node: &TargetNode) {
        self.journal.push(format!("remove_cell:{}", node.code));
    }
}

pub struct ScriptedLookup {
    pub links: Mutex<Vec<TaskLink>>,
    pub fail: AtomicBool,
    pub calls: Mutex<Vec<(i64, i64, i64)>>,
}

impl ScriptedLookup {
    /// Answer later lookups with `links`.
    pub fn answer(&self, links: Vec<TaskLink>) {
        *self.links.lock().unwrap() = links;
        self.fail.store(false, Ordering::SeqCst);
    }

    pub fn fail_next(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl DependencyLookup for ScriptedLookup {
    fn name(&self) -> &str {
        "scripted-lookup"
    }

    async fn dependent_task_links(
        &self,
        project_code: i64,
        workflow_code: i64,
        task_code: i64,
    ) -> anyhow::Result<Vec<TaskLink>> {
        self.calls
            .lock()
            .unwrap()
            .push((project_code, workflow_code, task_code));
        tokio::task::yield_now().await;
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("lineage service unavailable");
        }
        Ok(self.links.lock().unwrap().clone())
    }
}

pub struct ScriptedCodes {
    pub codes: Vec<i64>,
    pub fail: bool,
    pub calls: AtomicUsize,
}

#[async_trait]
impl TaskCodeGenerator for ScriptedCodes {
    fn name(&self) -> &str {
        "scripted-codes"
    }

    async fn generate_task_codes(&self, count: usize, _project_code: i64) -> anyhow::Result<Vec<i64>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("code generator unavailable");
        }
        Ok(self.codes.iter().copied().take(count).collect())
    }
}

pub struct Harness {
    pub menu: ContextMenu,
    pub journal: Journal,
    pub sink: Arc<JournalSink>,
    pub lookup: Arc<ScriptedLookup>,
    pub codes: Arc<ScriptedCodes>,
}

pub const PROJECT: i64 = 100;
pub const WORKFLOW: i64 = 200;

pub fn link(task: i64) -> TaskLink {
    TaskLink {
        project_code: PROJECT,
        workflow_definition_code: 300,
        workflow_definition_name: "downstream".into(),
        task_definition_code: task,
        task_definition_name: format!("task_{task}"),
    }
}

pub fn node(code: i64) -> TargetNode {
    TargetNode {
        code,
        task_type: "SHELL".into(),
        task_name: "A_task".into(),
        flag: TaskFlag::On,
    }
}

pub fn instance() -> TaskInstanceRef {
    TaskInstanceRef {
        id: 900,
        task_type: "SQL".into(),
    }
}

pub fn flags(start: bool, execute: bool, menu: bool) -> MenuFlags {
    MenuFlags {
        start_display: start,
        execute_task_display: execute,
        menu_display: menu,
    }
}

pub fn props(flags: MenuFlags, with_instance: bool) -> MenuProps {
    let props = MenuProps::for_node(node(42), Position::new(10, 20), flags);
    if with_instance {
        props.with_task_instance(instance())
    } else {
        props
    }
}

pub fn harness(links: Vec<TaskLink>, lookup_fails: bool, codes: Vec<i64>, codes_fail: bool) -> Harness {
    let journal = Journal::default();
    let sink = Arc::new(JournalSink {
        journal: journal.clone(),
        events: Mutex::new(Vec::new()),
    });
    let lookup = Arc::new(ScriptedLookup {
        links: Mutex::new(links),
        fail: AtomicBool::new(lookup_fails),
        calls: Mutex::new(Vec::new()),
    });
    let code_gen = Arc::new(ScriptedCodes {
        codes,
        fail: codes_fail,
        calls: AtomicUsize::new(0),
    });
    let services = Services {
        dependency_lookup: lookup.clone(),
        code_generator: code_gen.clone(),
    };
    let graph = Arc::new(RecordingGraph {
        journal: journal.clone(),
    });
    let menu = ContextMenu::new(
        MenuContext::new(PROJECT, WORKFLOW),
        services,
        graph,
        sink.clone(),
        MenuOptions::default(),
    );
    Harness {
        menu,
        journal,
        sink,
        lookup,
        codes: code_gen,
    }
}

pub fn default_harness() -> Harness {
    harness(Vec::new(), false, vec![555], false)
}
