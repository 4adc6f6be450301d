use std::sync::Arc;

use dagmenu_core::api::{DependencyLookup, SchedulerConfig, TaskCodeGenerator};

use crate::scheduler::{HttpDependencyLookup, HttpTaskCodeGenerator, SchedulerClient};

pub fn build_client(cfg: &SchedulerConfig) -> anyhow::Result<SchedulerClient> {
    SchedulerClient::new(cfg.base_url.clone(), cfg.token.clone(), cfg.timeout_ms)
}

pub fn build_dependency_lookup(client: &SchedulerClient) -> Arc<dyn DependencyLookup> {
    Arc::new(HttpDependencyLookup::new(client.clone()))
}

pub fn build_code_generator(client: &SchedulerClient) -> Arc<dyn TaskCodeGenerator> {
    Arc::new(HttpTaskCodeGenerator::new(client.clone()))
}
