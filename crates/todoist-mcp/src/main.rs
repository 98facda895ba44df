//! Todoist MCP Server
//!
//! Model Context Protocol server exposing Todoist task management
//! (projects, tasks, sections, comments, labels) to LLM agents over
//! stdio.

use clap::Parser;
use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

use todoist_mcp::server::TodoistMcpServer;

#[derive(Debug, Parser)]
#[command(name = "todoist-mcp", version, about = "Todoist MCP server (stdio transport)")]
struct Args {
    /// Todoist API token. Falls back to TODOIST_API_TOKEN, then the user
    /// config file.
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("todoist_mcp=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("todoist-mcp starting (stdio transport)");

    let server = TodoistMcpServer::from_token(args.token)?;
    let transport = rmcp::transport::io::stdio();

    let service = server.serve(transport).await?;
    service.waiting().await?;

    Ok(())
}
