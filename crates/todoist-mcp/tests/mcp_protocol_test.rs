//! MCP protocol integration test.
//!
//! Verifies that the server correctly handles the MCP protocol round-trip:
//! tool discovery via `list_tools` and tool invocation via `call_tool`.
//! Tool calls exercise the pre-network validation path so no live API is
//! needed.

use rmcp::model::{CallToolRequestParams, ClientInfo};
use rmcp::{ClientHandler, ServiceExt};

use todoist_client::TodoistApiClient;
use todoist_mcp::server::TodoistMcpServer;

#[derive(Debug, Clone, Default)]
struct DummyClient;

impl ClientHandler for DummyClient {
    fn get_info(&self) -> ClientInfo {
        ClientInfo::default()
    }
}

fn test_server() -> TodoistMcpServer {
    let api = TodoistApiClient::new("test_token").expect("Failed to create client");
    TodoistMcpServer::new(api)
}

#[tokio::test]
async fn test_mcp_protocol_list_tools() -> anyhow::Result<()> {
    let (server_transport, client_transport) = tokio::io::duplex(4096);

    let server = test_server();
    let server_handle = tokio::spawn(async move {
        let service = server.serve(server_transport).await?;
        service.waiting().await?;
        anyhow::Ok(())
    });

    let client = DummyClient.serve(client_transport).await?;

    let tools = client.list_tools(None).await?;
    let tool_names: Vec<&str> = tools.tools.iter().map(|t| t.name.as_ref()).collect();

    for expected in [
        "get_projects",
        "add_task",
        "get_sections",
        "move_section",
        "add_comment",
        "search_tasks",
        "batch_update_tasks",
        "delete_label",
    ] {
        assert!(
            tool_names.contains(&expected),
            "Expected {expected} in tool list, got: {:?}",
            tool_names
        );
    }

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn test_mcp_protocol_call_tool_validation_error() -> anyhow::Result<()> {
    let (server_transport, client_transport) = tokio::io::duplex(4096);

    let server = test_server();
    let server_handle = tokio::spawn(async move {
        let service = server.serve(server_transport).await?;
        service.waiting().await?;
        anyhow::Ok(())
    });

    let client = DummyClient.serve(client_transport).await?;

    // A comment with no target fails validation before any network call,
    // so the round-trip completes without a live API.
    let result = client
        .call_tool(CallToolRequestParams {
            meta: None,
            name: "add_comment".into(),
            arguments: Some(
                serde_json::json!({ "content": "hello" })
                    .as_object()
                    .unwrap()
                    .clone(),
            ),
            task: None,
        })
        .await?;

    let text = result
        .content
        .first()
        .and_then(|c| c.raw.as_text())
        .map(|t| t.text.as_str())
        .expect("Expected text content");

    let parsed: serde_json::Value = serde_json::from_str(text)?;
    assert_eq!(parsed["error"], "validation_error");
    assert!(parsed["message"]
        .as_str()
        .unwrap()
        .contains("either task_id or project_id"));

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn test_mcp_protocol_call_tool_order_validation() -> anyhow::Result<()> {
    let (server_transport, client_transport) = tokio::io::duplex(4096);

    let server = test_server();
    let server_handle = tokio::spawn(async move {
        let service = server.serve(server_transport).await?;
        service.waiting().await?;
        anyhow::Ok(())
    });

    let client = DummyClient.serve(client_transport).await?;

    let result = client
        .call_tool(CallToolRequestParams {
            meta: None,
            name: "move_section".into(),
            arguments: Some(
                serde_json::json!({ "section_id": "7025", "order": -1 })
                    .as_object()
                    .unwrap()
                    .clone(),
            ),
            task: None,
        })
        .await?;

    let text = result
        .content
        .first()
        .and_then(|c| c.raw.as_text())
        .map(|t| t.text.as_str())
        .expect("Expected text content");

    let parsed: serde_json::Value = serde_json::from_str(text)?;
    assert_eq!(parsed["error"], "validation_error");
    assert!(parsed["message"]
        .as_str()
        .unwrap()
        .contains("positive integer"));

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}
