//! Turns menu clicks into host events.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::actions::{compute_visible_actions, ActionKind};
use super::events::{EventSink, MenuEvent};
use super::types::{MenuProps, Position};
use super::visibility::{Document, ListenerGuard, VisibilityController};
use crate::context::{MenuContext, Services};
use crate::copy::{CopySource, DuplicationService};
use crate::error::MenuError;
use crate::guard::{DependencyGuard, DependencyWarning, GuardVerdict, WarningSink};
use crate::i18n::Locale;
use crate::services::GraphMutator;

/// Result of a single click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// One event went to the host.
    Emitted,
    /// Delete refused because other tasks depend on the node.
    Blocked(DependencyWarning),
    /// Required node or task instance was absent; nothing happened.
    Skipped,
    /// The copy service failed; nothing was emitted.
    Abandoned,
}

/// Rendered menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub kind: ActionKind,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct MenuOptions {
    pub locale: Locale,
    pub copy_offset: Position,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            copy_offset: Position::new(100, 100),
        }
    }
}

pub struct ContextMenu {
    context: MenuContext,
    options: MenuOptions,
    props: MenuProps,
    events: Arc<dyn EventSink>,
    visibility: VisibilityController,
    graph: Arc<dyn GraphMutator>,
    guard: DependencyGuard,
    duplication: DuplicationService,
    warnings: Option<Arc<dyn WarningSink>>,
    listener: Option<ListenerGuard>,
}

impl ContextMenu {
    pub fn new(
        context: MenuContext,
        services: Services,
        graph: Arc<dyn GraphMutator>,
        events: Arc<dyn EventSink>,
        options: MenuOptions,
    ) -> Self {
        Self {
            context,
            options,
            props: MenuProps::default(),
            visibility: VisibilityController::new(events.clone()),
            events,
            graph,
            guard: DependencyGuard::new(
                services.dependency_lookup,
                options.locale.dependent_tasks_message(),
            ),
            duplication: DuplicationService::new(services.code_generator, options.copy_offset),
            warnings: None,
            listener: None,
        }
    }

    pub fn with_warning_sink(mut self, warnings: Arc<dyn WarningSink>) -> Self {
        self.warnings = Some(warnings);
        self
    }

    /// Register the outside-click listener. Remounting replaces the previous
    /// registration.
    pub fn mount(&mut self, document: &Document) {
        self.listener = Some(self.visibility.mount(document));
    }

    pub fn unmount(&mut self) {
        self.listener = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    /// Reset the menu for a newly selected node.
    pub fn open(&mut self, props: MenuProps) {
        tracing::debug!(
            target: "dagmenu.menu",
            stage = "menu.open",
            node = ?props.node.as_ref().map(|n| n.code),
            instance = ?props.task_instance.as_ref().map(|i| i.id),
            x = props.position.x,
            y = props.position.y
        );
        self.props = props;
    }

    pub fn props(&self) -> &MenuProps {
        &self.props
    }

    /// Host applies a visibility change, usually in response to `hide`.
    pub fn set_visible(&mut self, visible: bool) {
        self.props.visible = visible;
    }

    pub fn hide(&self) {
        self.visibility.hide();
    }

    pub fn visible_actions(&self) -> BTreeSet<ActionKind> {
        if !self.props.visible {
            return BTreeSet::new();
        }
        compute_visible_actions(self.props.flags, self.props.task_instance.is_some())
    }

    pub fn entries(&self) -> Vec<MenuEntry> {
        self.visible_actions()
            .into_iter()
            .map(|kind| MenuEntry {
                kind,
                label: self.options.locale.action_label(kind),
            })
            .collect()
    }

    fn ensure_available(&self, action: ActionKind) -> Result<(), MenuError> {
        if self.visible_actions().contains(&action) {
            Ok(())
        } else {
            Err(MenuError::ActionUnavailable(action))
        }
    }

    /// Handle a click on `action`. Copy and delete wait on their services.
    pub async fn dispatch(&self, action: ActionKind) -> Result<DispatchOutcome, MenuError> {
        match action {
            ActionKind::Copy => self.copy().await,
            ActionKind::Delete => self.delete().await,
            _ => self.dispatch_immediate(action),
        }
    }

    /// Handle a click on an action that emits without waiting.
    pub fn dispatch_immediate(&self, action: ActionKind) -> Result<DispatchOutcome, MenuError> {
        if action.is_gated() {
            return Err(MenuError::Gated(action));
        }
        self.ensure_available(action)?;

        let node_code = self.props.node.as_ref().map(|n| n.code);
        let instance = self.props.task_instance.as_ref();

        let event = match (action, node_code, instance) {
            (ActionKind::Start, Some(code), _) => MenuEvent::Start { code },
            (ActionKind::Edit, Some(code), _) => MenuEvent::Edit { code },
            (ActionKind::ViewLog, _, Some(instance)) => MenuEvent::ViewLog {
                instance_id: instance.id,
                task_type: instance.task_type.clone(),
            },
            (ActionKind::ClearInstanceCache, _, Some(instance)) => {
                MenuEvent::RemoveTaskInstanceCache {
                    instance_id: instance.id,
                }
            }
            (kind, Some(code), _) => match kind.execute_mode() {
                Some(mode) => MenuEvent::ExecuteTask { code, mode },
                None => return Ok(DispatchOutcome::Skipped),
            },
            _ => return Ok(DispatchOutcome::Skipped),
        };

        tracing::debug!(
            target: "dagmenu.menu",
            stage = "menu.dispatch",
            action = %action,
            event = event.name()
        );
        self.events.emit(event);
        Ok(DispatchOutcome::Emitted)
    }

    /// Duplicate the node. Service failures are logged and absorbed.
    pub async fn copy(&self) -> Result<DispatchOutcome, MenuError> {
        self.ensure_available(ActionKind::Copy)?;
        let Some(node) = self.props.node.as_ref() else {
            return Ok(DispatchOutcome::Skipped);
        };
        let source = CopySource::capture(node, self.props.position);

        match self
            .duplication
            .prepare(source, self.context.project_code)
            .await
        {
            Ok(request) => {
                self.events.emit(MenuEvent::CopyTask(request));
                Ok(DispatchOutcome::Emitted)
            }
            Err(e) => {
                tracing::warn!(
                    target: "dagmenu.copy",
                    stage = "copy.abandoned",
                    source_code = node.code,
                    error = %e,
                    "copy abandoned"
                );
                Ok(DispatchOutcome::Abandoned)
            }
        }
    }

    /// Delete the node unless other tasks depend on it. Lookup failures are
    /// returned to the caller and leave the graph untouched.
    pub async fn delete(&self) -> Result<DispatchOutcome, MenuError> {
        self.ensure_available(ActionKind::Delete)?;
        let Some(node) = self.props.node.as_ref() else {
            return Ok(DispatchOutcome::Skipped);
        };

        // A new check retracts whatever the previous one reported.
        if let Some(sink) = self.warnings.as_ref() {
            sink.clear();
        }

        let verdict = self
            .guard
            .check(self.context.project_code, self.context.workflow_code, node.code)
            .await?;

        match verdict {
            GuardVerdict::Blocked(warning) => {
                if let Some(sink) = self.warnings.as_ref() {
                    sink.warn(warning.clone());
                }
                Ok(DispatchOutcome::Blocked(warning))
            }
            GuardVerdict::Allowed => {
                self.graph.remove_cell(node);
                self.events.emit(MenuEvent::RemoveTasks {
                    codes: vec![node.code],
                });
                Ok(DispatchOutcome::Emitted)
            }
        }
    }
}
