use std::sync::Arc;

use dagmenu_core::api::{
    ActionKind, ChannelSink, ContextMenu, DispatchOutcome, MenuConfig, MenuContext, MenuError,
    MenuEvent, MenuFlags, MenuProps, Position, ServicesFactory, TargetNode, TaskFlag,
};
use dagmenu_plugins::graph::InMemoryGraph;
use dagmenu_plugins::services::SchedulerServicesFactory;
use mockito::{Matcher, Server};

fn node() -> TargetNode {
    TargetNode {
        code: 3,
        task_type: "SHELL".into(),
        task_name: "A_task".into(),
        flag: TaskFlag::On,
    }
}

async fn menu_for(
    url: String,
) -> (
    ContextMenu,
    Arc<InMemoryGraph>,
    tokio::sync::mpsc::UnboundedReceiver<MenuEvent>,
) {
    let mut cfg = MenuConfig::default();
    cfg.project_code = 1;
    cfg.workflow_code = 2;
    cfg.scheduler.base_url = url;

    let services = SchedulerServicesFactory.build_services(&cfg).await.unwrap();
    let graph = Arc::new(InMemoryGraph::new());
    graph.add_cell(node());
    let (sink, rx) = ChannelSink::new();

    let mut menu = ContextMenu::new(
        MenuContext::from_config(&cfg),
        services,
        graph.clone(),
        Arc::new(sink),
        cfg.menu_options(),
    );
    menu.open(MenuProps::for_node(
        node(),
        Position::new(5, 5),
        MenuFlags {
            menu_display: true,
            ..MenuFlags::default()
        },
    ));
    (menu, graph, rx)
}

#[tokio::test]
async fn delete_through_scheduler_removes_unreferenced_node() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/projects/1/lineages/query-dependent-tasks")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"code":0,"msg":"success","data":[]}"#)
        .create_async()
        .await;

    let (menu, graph, mut rx) = menu_for(server.url()).await;
    let outcome = menu.dispatch(ActionKind::Delete).await.unwrap();

    assert_eq!(outcome, DispatchOutcome::Emitted);
    assert!(graph.is_empty());
    assert_eq!(rx.try_recv().unwrap(), MenuEvent::RemoveTasks { codes: vec![3] });
}

#[tokio::test]
async fn delete_keeps_node_when_scheduler_fails() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/projects/1/lineages/query-dependent-tasks")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let (menu, graph, mut rx) = menu_for(server.url()).await;
    let err = menu.dispatch(ActionKind::Delete).await.unwrap_err();

    assert!(matches!(err, MenuError::DependencyLookup { .. }));
    assert!(graph.contains(3));
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn copy_through_scheduler_uses_generated_code() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/projects/1/task-definition/gen-task-codes")
        .match_query(Matcher::UrlEncoded("genNum".into(), "1".into()))
        .with_status(200)
        .with_body(r#"{"code":0,"msg":"success","data":[555]}"#)
        .create_async()
        .await;

    let (menu, _graph, mut rx) = menu_for(server.url()).await;
    let outcome = menu.dispatch(ActionKind::Copy).await.unwrap();

    assert_eq!(outcome, DispatchOutcome::Emitted);
    let MenuEvent::CopyTask(request) = rx.try_recv().unwrap() else {
        panic!("expected copyTask");
    };
    assert_eq!(request.new_code, 555);
    assert_eq!(request.offset_position, Position::new(105, 105));
}
