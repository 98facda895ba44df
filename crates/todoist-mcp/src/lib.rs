//! Todoist MCP Server library.
//!
//! Provides the [`TodoistMcpServer`] MCP server handler and tool
//! parameter types. Used by the `todoist-mcp` binary and available for
//! integration testing.
//!
//! [`TodoistMcpServer`]: server::TodoistMcpServer

pub mod server;
pub mod tools;
