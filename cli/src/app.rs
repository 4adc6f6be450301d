use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use dagmenu_core::api::{
    compute_visible_actions, load_default, load_from_path, ActionKind, ChannelSink, ContextMenu,
    DependencyWarning, DispatchOutcome, Document, LatestWarning, MenuConfig, MenuContext,
    MenuEvent, Services,
};
use dagmenu_plugins::graph::InMemoryGraph;
use serde::Serialize;

use crate::args::{Args, MenuArgs, RunArgs};
use crate::error::CliError;

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum Body<'a> {
    Event(&'a MenuEvent),
    Warning(&'a DependencyWarning),
    Outcome { outcome: &'static str, cells: usize },
    Entry { action: ActionKind, label: &'static str },
}

#[derive(Serialize)]
struct Line<'a> {
    ts: DateTime<Utc>,
    #[serde(flatten)]
    body: Body<'a>,
}

fn write_line<W: Write>(out: &mut W, body: Body<'_>) -> Result<(), CliError> {
    let line = Line {
        ts: Utc::now(),
        body,
    };
    let json = serde_json::to_string(&line).map_err(std::io::Error::other)?;
    writeln!(out, "{json}")?;
    Ok(())
}

pub fn resolve_config(args: &Args) -> Result<MenuConfig, CliError> {
    let mut cfg = match args.config.as_deref() {
        Some(path) => load_from_path(Path::new(path))?,
        None => load_default()?,
    };
    if let Some(project) = args.project {
        cfg.project_code = project;
    }
    if let Some(workflow) = args.workflow {
        cfg.workflow_code = workflow;
    }
    Ok(cfg)
}

/// Print the entries the menu would render.
pub fn list_actions<W: Write>(
    cfg: &MenuConfig,
    menu: &MenuArgs,
    out: &mut W,
) -> Result<usize, CliError> {
    let props = menu.to_props();
    let actions = compute_visible_actions(props.flags, props.task_instance.is_some());
    for action in &actions {
        write_line(
            out,
            Body::Entry {
                action: *action,
                label: cfg.locale.action_label(*action),
            },
        )?;
    }
    Ok(actions.len())
}

#[derive(Debug)]
pub struct RunReport {
    pub outcome: DispatchOutcome,
    pub events: Vec<MenuEvent>,
    pub cells: usize,
}

impl RunReport {
    pub fn exit_code(&self) -> i32 {
        match self.outcome {
            DispatchOutcome::Emitted | DispatchOutcome::Skipped => 0,
            DispatchOutcome::Blocked(_) => 3,
            DispatchOutcome::Abandoned => 4,
        }
    }
}

fn outcome_name(outcome: &DispatchOutcome) -> &'static str {
    match outcome {
        DispatchOutcome::Emitted => "emitted",
        DispatchOutcome::Blocked(_) => "blocked",
        DispatchOutcome::Skipped => "skipped",
        DispatchOutcome::Abandoned => "abandoned",
    }
}

/// Open the menu, click one entry the way a browser would (handler first,
/// then the document-level listener), and print what the host receives.
pub async fn run_action<W: Write>(
    cfg: &MenuConfig,
    services: Services,
    run: &RunArgs,
    out: &mut W,
) -> Result<RunReport, CliError> {
    let graph = Arc::new(InMemoryGraph::new());
    if let Some(node) = run.menu.target_node() {
        graph.add_cell(node);
    }

    let (sink, mut rx) = ChannelSink::new();
    let warnings = LatestWarning::new();
    let document = Document::new();

    let mut menu = ContextMenu::new(
        MenuContext::from_config(cfg),
        services,
        graph.clone(),
        Arc::new(sink),
        cfg.menu_options(),
    )
    .with_warning_sink(Arc::new(warnings.clone()));
    menu.mount(&document);
    menu.open(run.menu.to_props());

    let action = ActionKind::from(run.action);
    let result = if action.is_gated() {
        let pending = menu.dispatch(action);
        document.click();
        pending.await
    } else {
        let result = menu.dispatch_immediate(action);
        document.click();
        result
    };

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        match &event {
            MenuEvent::Hide => menu.set_visible(false),
            MenuEvent::CopyTask(request) => graph.apply_copy(request),
            _ => {}
        }
        write_line(out, Body::Event(&event))?;
        events.push(event);
    }
    if let Some(warning) = warnings.take() {
        write_line(out, Body::Warning(&warning))?;
    }

    let outcome = result?;
    write_line(
        out,
        Body::Outcome {
            outcome: outcome_name(&outcome),
            cells: graph.len(),
        },
    )?;
    Ok(RunReport {
        outcome,
        events,
        cells: graph.len(),
    })
}
