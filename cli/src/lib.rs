//! dagmenu-cli library - exposes modules for unit tests

pub mod app;
pub mod args;
pub mod error;
pub mod logging;
