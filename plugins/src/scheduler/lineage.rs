use async_trait::async_trait;
use dagmenu_core::api::{DependencyLookup, TaskLink};

use super::client::SchedulerClient;

/// Dependent-task lookup through the scheduler's lineage endpoint.
#[derive(Clone)]
pub struct HttpDependencyLookup {
    client: SchedulerClient,
}

impl HttpDependencyLookup {
    pub fn new(client: SchedulerClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DependencyLookup for HttpDependencyLookup {
    fn name(&self) -> &str {
        "scheduler-lineage"
    }

    async fn dependent_task_links(
        &self,
        project_code: i64,
        workflow_code: i64,
        task_code: i64,
    ) -> anyhow::Result<Vec<TaskLink>> {
        // Unsaved workflows and nodes have no lineage yet.
        if workflow_code == 0 || task_code == 0 {
            return Ok(Vec::new());
        }

        let path = format!("projects/{project_code}/lineages/query-dependent-tasks");
        tracing::debug!(
            target: "dagmenu.http",
            stage = "lineage.http.in",
            project_code,
            workflow_code,
            task_code
        );
        let links: Vec<TaskLink> = self
            .client
            .get_data(
                &path,
                &[
                    ("workFlowCode", workflow_code.to_string()),
                    ("taskCode", task_code.to_string()),
                ],
            )
            .await?;

        let links: Vec<TaskLink> = links
            .into_iter()
            .filter(|l| {
                !(l.workflow_definition_code == workflow_code && l.task_definition_code == task_code)
            })
            .collect();
        tracing::debug!(
            target: "dagmenu.http",
            stage = "lineage.http.out",
            dependents = links.len()
        );
        Ok(links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use pretty_assertions::assert_eq;

    fn lookup(url: String) -> HttpDependencyLookup {
        HttpDependencyLookup::new(SchedulerClient::new(url, String::new(), 1_000).unwrap())
    }

    #[tokio::test]
    async fn test_returns_dependents_without_self() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/projects/1/lineages/query-dependent-tasks")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("workFlowCode".into(), "2".into()),
                Matcher::UrlEncoded("taskCode".into(), "3".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"code":0,"msg":"success","data":[
                    {"projectCode":1,"workflowDefinitionCode":2,"workflowDefinitionName":"self","taskDefinitionCode":3,"taskDefinitionName":"me"},
                    {"projectCode":1,"processDefinitionCode":8,"processDefinitionName":"report","taskDefinitionCode":9,"taskDefinitionName":"dep"}
                ]}"#,
            )
            .create_async()
            .await;

        let links = lookup(server.url())
            .dependent_task_links(1, 2, 3)
            .await
            .unwrap();

        m.assert_async().await;
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].workflow_definition_code, 8);
        assert_eq!(links[0].label(), "report -> dep");
    }

    #[tokio::test]
    async fn test_unsaved_node_skips_request() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let links = lookup(server.url())
            .dependent_task_links(1, 0, 3)
            .await
            .unwrap();

        assert!(links.is_empty());
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error_propagates() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/projects/1/lineages/query-dependent-tasks")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        assert!(lookup(server.url())
            .dependent_task_links(1, 2, 3)
            .await
            .is_err());
    }
}
