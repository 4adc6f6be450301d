//! ServicesFactory backed by the scheduler REST API.
use async_trait::async_trait;
use dagmenu_core::api::{MenuConfig, MenuError, Services, ServicesFactory};

use crate::factory;

#[derive(Default)]
pub struct SchedulerServicesFactory;

#[async_trait]
impl ServicesFactory for SchedulerServicesFactory {
    async fn build_services(&self, cfg: &MenuConfig) -> Result<Services, MenuError> {
        let client =
            factory::build_client(&cfg.scheduler).map_err(|e| MenuError::Config(e.to_string()))?;
        Ok(Services {
            dependency_lookup: factory::build_dependency_lookup(&client),
            code_generator: factory::build_code_generator(&client),
        })
    }
}
