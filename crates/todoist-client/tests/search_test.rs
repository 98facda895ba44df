//! Search tests: filter-expression compilation on the wire, single-page
//! limits, and client-side post-steps.

use serde_json::json;
use todoist_client::{ClientError, SearchArgs, TodoistApiClient, TodoistApiConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> TodoistApiClient {
    TodoistApiClient::with_config("test_token", TodoistApiConfig::with_base_url(server.uri()))
        .expect("Failed to create client")
}

#[tokio::test]
async fn test_search_sends_compiled_filter_expression() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks/filter"))
        .and(query_param("query", "search: dinner"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"id": "task1", "content": "Buy groceries for dinner"},
                {"id": "task2", "content": "Prepare dinner for guests"}
            ],
            "next_cursor": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let results = client
        .search_tasks(SearchArgs {
            query: Some("dinner".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(results.total_count, 2);
    assert_eq!(results.next_cursor, None);
}

#[tokio::test]
async fn test_search_with_limit_is_single_page() {
    let server = MockServer::start().await;
    let tasks: Vec<_> = (0..10)
        .map(|i| json!({"id": format!("task{i}"), "content": format!("Task {i}")}))
        .collect();
    Mock::given(method("GET"))
        .and(path("/tasks/filter"))
        .and(query_param("query", "search: Task"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": tasks,
            "next_cursor": "cursor123"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let results = client
        .search_tasks(SearchArgs {
            query: Some("Task".to_string()),
            limit: Some(10),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(results.tasks.len(), 10);
    assert_eq!(results.next_cursor.as_deref(), Some("cursor123"));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_search_resumes_from_cursor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks/filter"))
        .and(query_param("cursor", "cursor123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"id": "task10", "content": "Task 10"}],
            "next_cursor": "cursor456"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let results = client
        .search_tasks(SearchArgs {
            query: Some("Task".to_string()),
            limit: Some(10),
            cursor: Some("cursor123".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(results.tasks[0]["id"], "task10");
    assert_eq!(results.next_cursor.as_deref(), Some("cursor456"));
}

#[tokio::test]
async fn test_search_post_filters_project_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks/filter"))
        .and(query_param("query", "search: README"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"id": "task1", "content": "Update README", "project_id": "proj123"},
                {"id": "task2", "content": "README badge", "project_id": "other"}
            ],
            "next_cursor": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let results = client
        .search_tasks(SearchArgs {
            query: Some("README".to_string()),
            project_id: Some("proj123".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(results.total_count, 1);
    assert_eq!(results.tasks[0]["project_id"], "proj123");
}

#[tokio::test]
async fn test_search_sorts_descending_by_created_at() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks/filter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"id": "task2", "content": "B task", "created_at": "2025-05-26T09:00:00Z"},
                {"id": "task1", "content": "A task", "created_at": "2025-05-26T10:00:00Z"}
            ],
            "next_cursor": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let results = client
        .search_tasks(SearchArgs {
            query: Some("task".to_string()),
            sort_by: Some("created_at".to_string()),
            sort_order: Some("desc".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(results.tasks[0]["id"], "task1");
}

#[tokio::test]
async fn test_search_empty_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks/filter"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"results": [], "next_cursor": null})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let results = client
        .search_tasks(SearchArgs {
            query: Some("nonexistent".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(results.tasks.is_empty());
    assert_eq!(results.total_count, 0);
}

#[tokio::test]
async fn test_search_invalid_priority_never_hits_network() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client
        .search_tasks(SearchArgs {
            priority: Some(5),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(format!("{err}").contains("between 1 and 4"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_invalid_date_never_hits_network() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client
        .search_tasks(SearchArgs {
            due_date: Some("invalid-date".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidInput(_)));
    assert!(format!("{err}").contains("Invalid date format"));
    assert!(server.received_requests().await.unwrap().is_empty());
}
