//! MCP ServerHandler implementation for Todoist.
//!
//! Registers one tool per resource×verb against the unified API v1:
//!
//! **Projects**
//! - `get_projects` / `get_project` / `add_project` / `update_project` / `delete_project`
//!
//! **Tasks**
//! - `get_tasks` / `get_task` / `add_task` / `update_task` / `move_task` / `delete_task`
//! - `search_tasks` — structured filters compiled into a server-side filter query
//! - `batch_update_tasks` — one patch applied to many tasks sequentially
//!
//! **Sections**
//! - `get_sections` / `get_section` / `add_section` / `update_section` /
//!   `move_section` / `delete_section`
//!
//! **Comments**
//! - `get_comments` / `get_comment` / `add_comment` / `update_comment` / `delete_comment`
//!
//! **Labels**
//! - `get_labels` / `get_label` / `add_label` / `update_label` / `delete_label`
//!
//! Every tool returns a JSON string; failures come back as structured
//! `{"error", "message"}` objects the agent can inspect (API errors keep
//! their status code and Retry-After hint).

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ServerHandler};

use todoist_client::{resolve_token, ClientResult, TodoistApiClient};

use crate::tools::*;

/// Todoist MCP server handler.
#[derive(Debug, Clone)]
pub struct TodoistMcpServer {
    tool_router: ToolRouter<Self>,
    api: TodoistApiClient,
}

impl TodoistMcpServer {
    /// Create a server around an existing API client.
    pub fn new(api: TodoistApiClient) -> Self {
        Self {
            tool_router: Self::tool_router(),
            api,
        }
    }

    /// Create a server resolving the token from the argument, the
    /// `TODOIST_API_TOKEN` environment variable, or the user config file.
    pub fn from_token(token: Option<String>) -> ClientResult<Self> {
        let token = resolve_token(token)?;
        Ok(Self::new(TodoistApiClient::new(token)?))
    }

    /// Get a reference to the underlying API client.
    pub fn api(&self) -> &TodoistApiClient {
        &self.api
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for TodoistMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "todoist-mcp".to_string(),
                title: Some("Todoist MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "MCP server exposing Todoist task management: projects, tasks, \
                     sections, comments, and labels over the unified API v1"
                        .to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Todoist task management over the unified API v1.\n\
                 Listing tools (get_projects, get_tasks, get_sections, get_comments, \
                 get_labels) walk all result pages and return the complete sequence.\n\
                 search_tasks filters server-side; pass limit for a single page with a \
                 continuation cursor.\n\
                 Mutations validate input before any network call: names and content \
                 must be non-empty, order must be a positive integer, priority lies in \
                 1-4, and a comment targets exactly one of task_id/project_id.\n\
                 A 429 failure includes retry_after (seconds); wait that long before \
                 retrying."
                    .to_string(),
            ),
        }
    }
}

#[tool_router(router = tool_router)]
impl TodoistMcpServer {
    // ── projects ──

    #[tool(
        name = "get_projects",
        description = "List all projects. Walks every result page and returns the complete sequence."
    )]
    pub async fn get_projects(&self, Parameters(params): Parameters<GetProjectsParams>) -> String {
        match self.api.get_projects(params.limit, params.cursor).await {
            Ok(projects) => to_json(&projects),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(name = "get_project", description = "Get a single project by ID.")]
    pub async fn get_project(&self, Parameters(params): Parameters<GetProjectParams>) -> String {
        match self.api.get_project(&params.project_id).await {
            Ok(project) => to_json(&project),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(name = "add_project", description = "Create a new project.")]
    pub async fn add_project(&self, Parameters(params): Parameters<AddProjectParams>) -> String {
        match self.api.add_project(params.into()).await {
            Ok(project) => to_json(&project),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(
        name = "update_project",
        description = "Update a project. Only the provided fields change."
    )]
    pub async fn update_project(
        &self,
        Parameters(params): Parameters<UpdateProjectParams>,
    ) -> String {
        match self
            .api
            .update_project(&params.project_id, (&params).into())
            .await
        {
            Ok(Some(project)) => to_json(&project),
            Ok(None) => ack_json("update_project", &params.project_id),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(name = "delete_project", description = "Delete a project.")]
    pub async fn delete_project(
        &self,
        Parameters(params): Parameters<DeleteProjectParams>,
    ) -> String {
        match self.api.delete_project(&params.project_id).await {
            Ok(()) => ack_json("delete_project", &params.project_id),
            Err(e) => client_error_json(&e),
        }
    }

    // ── tasks ──

    #[tool(
        name = "get_tasks",
        description = "List tasks, optionally filtered by project, section, label, or IDs. Walks every result page."
    )]
    pub async fn get_tasks(&self, Parameters(params): Parameters<GetTasksParams>) -> String {
        let filter = (&params).into();
        match self.api.get_tasks(filter, params.limit, params.cursor).await {
            Ok(tasks) => to_json(&tasks),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(name = "get_task", description = "Get a single task by ID.")]
    pub async fn get_task(&self, Parameters(params): Parameters<GetTaskParams>) -> String {
        match self.api.get_task(&params.task_id).await {
            Ok(task) => to_json(&task),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(
        name = "add_task",
        description = "Create a new task. Content must be non-empty; priority lies in 1-4."
    )]
    pub async fn add_task(&self, Parameters(params): Parameters<AddTaskParams>) -> String {
        match self.api.add_task(params.into()).await {
            Ok(task) => to_json(&task),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(
        name = "update_task",
        description = "Update a task. Only the provided fields change."
    )]
    pub async fn update_task(&self, Parameters(params): Parameters<UpdateTaskParams>) -> String {
        match self.api.update_task(&params.task_id, (&params).into()).await {
            Ok(Some(task)) => to_json(&task),
            Ok(None) => ack_json("update_task", &params.task_id),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(
        name = "move_task",
        description = "Move a task to a project, section, or parent. Set exactly one destination."
    )]
    pub async fn move_task(&self, Parameters(params): Parameters<MoveTaskParams>) -> String {
        match self.api.move_task(&params.task_id, (&params).into()).await {
            Ok(Some(task)) => to_json(&task),
            Ok(None) => ack_json("move_task", &params.task_id),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(name = "delete_task", description = "Delete a task.")]
    pub async fn delete_task(&self, Parameters(params): Parameters<DeleteTaskParams>) -> String {
        match self.api.delete_task(&params.task_id).await {
            Ok(()) => ack_json("delete_task", &params.task_id),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(
        name = "search_tasks",
        description = "Search tasks with structured filters (text, labels, priority, due dates). Filtering runs server-side; sorting is applied to the assembled results. Pass limit for a single page with a continuation cursor."
    )]
    pub async fn search_tasks(&self, Parameters(params): Parameters<SearchTasksParams>) -> String {
        match self.api.search_tasks(params.into()).await {
            Ok(results) => to_json(&results),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(
        name = "batch_update_tasks",
        description = "Apply one update to many tasks. Returns per-task updated/failed lists; a remote failure on one task does not abort the rest."
    )]
    pub async fn batch_update_tasks(
        &self,
        Parameters(params): Parameters<BatchUpdateTasksParams>,
    ) -> String {
        let patch = (&params).into();
        match self.api.batch_update_tasks(&params.task_ids, patch).await {
            Ok(outcome) => to_json(&outcome),
            Err(e) => client_error_json(&e),
        }
    }

    // ── sections ──

    #[tool(
        name = "get_sections",
        description = "List all sections of a project. Walks every result page."
    )]
    pub async fn get_sections(&self, Parameters(params): Parameters<GetSectionsParams>) -> String {
        match self
            .api
            .get_sections(&params.project_id, params.limit, params.cursor)
            .await
        {
            Ok(sections) => to_json(&sections),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(name = "get_section", description = "Get a single section by ID.")]
    pub async fn get_section(&self, Parameters(params): Parameters<GetSectionParams>) -> String {
        match self.api.get_section(&params.section_id).await {
            Ok(section) => to_json(&section),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(
        name = "add_section",
        description = "Create a section within a project. Name must be non-empty; order, when given, is a positive integer."
    )]
    pub async fn add_section(&self, Parameters(params): Parameters<AddSectionParams>) -> String {
        match self
            .api
            .add_section(&params.project_id, &params.name, params.order)
            .await
        {
            Ok(section) => to_json(&section),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(name = "update_section", description = "Rename a section.")]
    pub async fn update_section(
        &self,
        Parameters(params): Parameters<UpdateSectionParams>,
    ) -> String {
        match self.api.update_section(&params.section_id, &params.name).await {
            Ok(Some(section)) => to_json(&section),
            Ok(None) => ack_json("update_section", &params.section_id),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(
        name = "move_section",
        description = "Reorder a section within its project. Order is a positive integer."
    )]
    pub async fn move_section(&self, Parameters(params): Parameters<MoveSectionParams>) -> String {
        match self.api.move_section(&params.section_id, params.order).await {
            Ok(Some(section)) => to_json(&section),
            Ok(None) => ack_json("move_section", &params.section_id),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(name = "delete_section", description = "Delete a section.")]
    pub async fn delete_section(
        &self,
        Parameters(params): Parameters<DeleteSectionParams>,
    ) -> String {
        match self.api.delete_section(&params.section_id).await {
            Ok(()) => ack_json("delete_section", &params.section_id),
            Err(e) => client_error_json(&e),
        }
    }

    // ── comments ──

    #[tool(
        name = "get_comments",
        description = "List comments for a task or project. Walks every result page."
    )]
    pub async fn get_comments(&self, Parameters(params): Parameters<GetCommentsParams>) -> String {
        match self
            .api
            .get_comments(
                params.task_id.as_deref(),
                params.project_id.as_deref(),
                params.limit,
                params.cursor,
            )
            .await
        {
            Ok(comments) => to_json(&comments),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(name = "get_comment", description = "Get a single comment by ID.")]
    pub async fn get_comment(&self, Parameters(params): Parameters<GetCommentParams>) -> String {
        match self.api.get_comment(&params.comment_id).await {
            Ok(comment) => to_json(&comment),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(
        name = "add_comment",
        description = "Create a comment on exactly one of a task or a project."
    )]
    pub async fn add_comment(&self, Parameters(params): Parameters<AddCommentParams>) -> String {
        match self.api.add_comment(params.into()).await {
            Ok(comment) => to_json(&comment),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(name = "update_comment", description = "Replace a comment's content.")]
    pub async fn update_comment(
        &self,
        Parameters(params): Parameters<UpdateCommentParams>,
    ) -> String {
        match self
            .api
            .update_comment(&params.comment_id, &params.content)
            .await
        {
            Ok(Some(comment)) => to_json(&comment),
            Ok(None) => ack_json("update_comment", &params.comment_id),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(name = "delete_comment", description = "Delete a comment.")]
    pub async fn delete_comment(
        &self,
        Parameters(params): Parameters<DeleteCommentParams>,
    ) -> String {
        match self.api.delete_comment(&params.comment_id).await {
            Ok(()) => ack_json("delete_comment", &params.comment_id),
            Err(e) => client_error_json(&e),
        }
    }

    // ── labels ──

    #[tool(
        name = "get_labels",
        description = "List all personal labels. Walks every result page."
    )]
    pub async fn get_labels(&self, Parameters(params): Parameters<GetLabelsParams>) -> String {
        match self.api.get_labels(params.limit, params.cursor).await {
            Ok(labels) => to_json(&labels),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(name = "get_label", description = "Get a single label by ID.")]
    pub async fn get_label(&self, Parameters(params): Parameters<GetLabelParams>) -> String {
        match self.api.get_label(&params.label_id).await {
            Ok(label) => to_json(&label),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(name = "add_label", description = "Create a personal label.")]
    pub async fn add_label(&self, Parameters(params): Parameters<AddLabelParams>) -> String {
        match self.api.add_label(params.into()).await {
            Ok(label) => to_json(&label),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(
        name = "update_label",
        description = "Update a label. Only the provided fields change."
    )]
    pub async fn update_label(&self, Parameters(params): Parameters<UpdateLabelParams>) -> String {
        match self.api.update_label(&params.label_id, (&params).into()).await {
            Ok(Some(label)) => to_json(&label),
            Ok(None) => ack_json("update_label", &params.label_id),
            Err(e) => client_error_json(&e),
        }
    }

    #[tool(name = "delete_label", description = "Delete a label.")]
    pub async fn delete_label(&self, Parameters(params): Parameters<DeleteLabelParams>) -> String {
        match self.api.delete_label(&params.label_id).await {
            Ok(()) => ack_json("delete_label", &params.label_id),
            Err(e) => client_error_json(&e),
        }
    }
}
