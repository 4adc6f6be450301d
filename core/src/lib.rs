//! Interaction logic for the contextual action menu of a workflow DAG editor.
//!
//! The menu decides which actions a node offers, gates delete behind a
//! dependency check and copy behind task-code generation, and reports every
//! user decision to its host as a [`menu::MenuEvent`]. Rendering and the
//! graph itself belong to the host.

pub mod api;
pub mod config;
pub mod context;
pub mod copy;
pub mod error;
pub mod guard;
pub mod i18n;
pub mod menu;
pub mod services;
