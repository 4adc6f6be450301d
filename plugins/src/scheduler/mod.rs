//! Scheduler REST API backed services.

mod client;
mod codes;
mod error;
mod lineage;

pub use client::SchedulerClient;
pub use codes::HttpTaskCodeGenerator;
pub use error::{SchedulerHttpError, SchedulerHttpErrorKind};
pub use lineage::HttpDependencyLookup;
