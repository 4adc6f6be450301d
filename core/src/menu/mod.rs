//! The contextual action menu attached to a graph node.

pub mod actions;
pub mod dispatcher;
pub mod events;
pub mod types;
pub mod visibility;

pub use actions::{compute_visible_actions, ActionKind};
pub use dispatcher::{ContextMenu, DispatchOutcome, MenuEntry, MenuOptions};
pub use events::{ChannelSink, EventSink, MenuEvent};
pub use types::{
    ExecuteMode, MenuFlags, MenuProps, Position, TargetNode, TaskFlag, TaskInstanceRef, TaskLink,
};
pub use visibility::{Document, ListenerGuard, VisibilityController};
