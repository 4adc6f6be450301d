//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `dagmenu_core::api` instead of reaching into internal modules.

pub use crate::config::{
    get_dagmenu_data_dir, load_default, load_from_path, LoggingConfig, MenuConfig, SchedulerConfig,
};
pub use crate::context::{MenuContext, Services, ServicesFactory};
pub use crate::copy::{duplicate_name, CopyRequest, COPY_CODE_BATCH};
pub use crate::error::{ConfigError, MenuError};
pub use crate::guard::{DependencyWarning, GuardVerdict, LatestWarning, WarningSink};
pub use crate::i18n::Locale;
pub use crate::menu::{
    compute_visible_actions, ActionKind, ChannelSink, ContextMenu, DispatchOutcome, Document,
    EventSink, ExecuteMode, MenuEntry, MenuEvent, MenuFlags, MenuOptions, MenuProps, Position,
    TargetNode, TaskFlag, TaskInstanceRef, TaskLink,
};
pub use crate::services::{DependencyLookup, GraphMutator, TaskCodeGenerator};
