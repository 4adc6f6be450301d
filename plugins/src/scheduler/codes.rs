use async_trait::async_trait;
use dagmenu_core::api::TaskCodeGenerator;

use super::client::SchedulerClient;

#[derive(Clone)]
pub struct HttpTaskCodeGenerator {
    client: SchedulerClient,
}

impl HttpTaskCodeGenerator {
    pub fn new(client: SchedulerClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TaskCodeGenerator for HttpTaskCodeGenerator {
    fn name(&self) -> &str {
        "scheduler-task-codes"
    }

    async fn generate_task_codes(&self, count: usize, project_code: i64) -> anyhow::Result<Vec<i64>> {
        let path = format!("projects/{project_code}/task-definition/gen-task-codes");
        tracing::debug!(
            target: "dagmenu.http",
            stage = "codes.http.in",
            project_code,
            count
        );
        let codes: Vec<i64> = self
            .client
            .get_data(&path, &[("genNum", count.to_string())])
            .await?;
        tracing::debug!(target: "dagmenu.http", stage = "codes.http.out", returned = codes.len());
        Ok(codes)
    }
}
