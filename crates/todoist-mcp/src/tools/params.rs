//! Parameter structs for all MCP tools.
//!
//! Field-level schemars descriptions become the tool input schema shown to
//! the agent. Optional fields that the caller omits are never forwarded to
//! the API (see `todoist_client::params`).

use schemars::JsonSchema;
use serde::Deserialize;
use todoist_client::{
    AddCommentArgs, AddLabelArgs, AddProjectArgs, AddTaskArgs, MoveTaskArgs, SearchArgs,
    TaskFilter, UpdateLabelArgs, UpdateProjectArgs, UpdateTaskArgs,
};

// ── projects ──

/// Parameters for the `get_projects` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetProjectsParams {
    /// Page size for the underlying requests (defaults to 100).
    #[schemars(description = "Page size for the underlying requests (defaults to 100)")]
    pub limit: Option<u32>,
    /// Continuation cursor to resume a previous listing.
    #[schemars(description = "Continuation cursor to resume a previous listing")]
    pub cursor: Option<String>,
}

/// Parameters for the `get_project` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetProjectParams {
    #[schemars(description = "Project ID")]
    pub project_id: String,
}

/// Parameters for the `add_project` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddProjectParams {
    #[schemars(description = "Project name (must be non-empty)")]
    pub name: String,
    #[schemars(description = "Parent project ID for a nested project")]
    pub parent_id: Option<String>,
    #[schemars(description = "Color name (e.g., 'blue', 'green')")]
    pub color: Option<String>,
    #[schemars(description = "Mark the project as a favorite")]
    pub is_favorite: Option<bool>,
}

impl From<AddProjectParams> for AddProjectArgs {
    fn from(p: AddProjectParams) -> Self {
        AddProjectArgs {
            name: p.name,
            parent_id: p.parent_id,
            color: p.color,
            is_favorite: p.is_favorite,
        }
    }
}

/// Parameters for the `update_project` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateProjectParams {
    #[schemars(description = "Project ID")]
    pub project_id: String,
    #[schemars(description = "New project name")]
    pub name: Option<String>,
    #[schemars(description = "New color name")]
    pub color: Option<String>,
    #[schemars(description = "Mark or unmark the project as a favorite")]
    pub is_favorite: Option<bool>,
}

impl From<&UpdateProjectParams> for UpdateProjectArgs {
    fn from(p: &UpdateProjectParams) -> Self {
        UpdateProjectArgs {
            name: p.name.clone(),
            color: p.color.clone(),
            is_favorite: p.is_favorite,
        }
    }
}

/// Parameters for the `delete_project` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteProjectParams {
    #[schemars(description = "Project ID")]
    pub project_id: String,
}

// ── tasks ──

/// Parameters for the `get_tasks` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetTasksParams {
    #[schemars(description = "Only tasks in this project")]
    pub project_id: Option<String>,
    #[schemars(description = "Only tasks in this section")]
    pub section_id: Option<String>,
    #[schemars(description = "Only tasks carrying this label name")]
    pub label: Option<String>,
    #[schemars(description = "Only tasks with these IDs")]
    pub ids: Option<Vec<String>>,
    #[schemars(description = "Page size for the underlying requests (defaults to 100)")]
    pub limit: Option<u32>,
    #[schemars(description = "Continuation cursor to resume a previous listing")]
    pub cursor: Option<String>,
}

impl From<&GetTasksParams> for TaskFilter {
    fn from(p: &GetTasksParams) -> Self {
        TaskFilter {
            project_id: p.project_id.clone(),
            section_id: p.section_id.clone(),
            label: p.label.clone(),
            ids: p.ids.clone(),
        }
    }
}

/// Parameters for the `get_task` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetTaskParams {
    #[schemars(description = "Task ID")]
    pub task_id: String,
}

/// Parameters for the `add_task` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddTaskParams {
    #[schemars(description = "Task content (must be non-empty)")]
    pub content: String,
    #[schemars(description = "Long-form description")]
    pub description: Option<String>,
    #[schemars(description = "Project to create the task in")]
    pub project_id: Option<String>,
    #[schemars(description = "Section to create the task in")]
    pub section_id: Option<String>,
    #[schemars(description = "Parent task ID for a subtask")]
    pub parent_id: Option<String>,
    #[schemars(description = "Position among siblings (positive integer)")]
    pub order: Option<i64>,
    #[schemars(description = "Label names to attach")]
    pub labels: Option<Vec<String>>,
    #[schemars(description = "Priority from 1 (normal) to 4 (urgent)")]
    pub priority: Option<i64>,
    #[schemars(description = "Natural-language due date (e.g., 'tomorrow at 12')")]
    pub due_string: Option<String>,
    #[schemars(description = "Due date in YYYY-MM-DD format")]
    pub due_date: Option<String>,
    #[schemars(description = "Due date-time in RFC 3339 format")]
    pub due_datetime: Option<String>,
    #[schemars(description = "Language for parsing due_string")]
    pub due_lang: Option<String>,
    #[schemars(description = "Collaborator to assign the task to")]
    pub assignee_id: Option<String>,
    #[schemars(description = "Task duration amount")]
    pub duration: Option<i64>,
    #[schemars(description = "Duration unit: minute or day")]
    pub duration_unit: Option<String>,
}

impl From<AddTaskParams> for AddTaskArgs {
    fn from(p: AddTaskParams) -> Self {
        AddTaskArgs {
            content: p.content,
            description: p.description,
            project_id: p.project_id,
            section_id: p.section_id,
            parent_id: p.parent_id,
            order: p.order,
            labels: p.labels,
            priority: p.priority,
            due_string: p.due_string,
            due_date: p.due_date,
            due_datetime: p.due_datetime,
            due_lang: p.due_lang,
            assignee_id: p.assignee_id,
            duration: p.duration,
            duration_unit: p.duration_unit,
        }
    }
}

/// Parameters for the `update_task` tool. Only provided fields change.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    #[schemars(description = "Task ID")]
    pub task_id: String,
    #[schemars(description = "New task content")]
    pub content: Option<String>,
    #[schemars(description = "New description")]
    pub description: Option<String>,
    #[schemars(description = "Replacement label names")]
    pub labels: Option<Vec<String>>,
    #[schemars(description = "Priority from 1 (normal) to 4 (urgent)")]
    pub priority: Option<i64>,
    #[schemars(description = "Natural-language due date")]
    pub due_string: Option<String>,
    #[schemars(description = "Due date in YYYY-MM-DD format")]
    pub due_date: Option<String>,
    #[schemars(description = "Due date-time in RFC 3339 format")]
    pub due_datetime: Option<String>,
    #[schemars(description = "Language for parsing due_string")]
    pub due_lang: Option<String>,
    #[schemars(description = "Collaborator to assign the task to")]
    pub assignee_id: Option<String>,
    #[schemars(description = "Task duration amount")]
    pub duration: Option<i64>,
    #[schemars(description = "Duration unit: minute or day")]
    pub duration_unit: Option<String>,
}

impl From<&UpdateTaskParams> for UpdateTaskArgs {
    fn from(p: &UpdateTaskParams) -> Self {
        UpdateTaskArgs {
            content: p.content.clone(),
            description: p.description.clone(),
            labels: p.labels.clone(),
            priority: p.priority,
            due_string: p.due_string.clone(),
            due_date: p.due_date.clone(),
            due_datetime: p.due_datetime.clone(),
            due_lang: p.due_lang.clone(),
            assignee_id: p.assignee_id.clone(),
            duration: p.duration,
            duration_unit: p.duration_unit.clone(),
        }
    }
}

/// Parameters for the `move_task` tool. Set exactly one destination.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct MoveTaskParams {
    #[schemars(description = "Task ID")]
    pub task_id: String,
    #[schemars(description = "Destination project ID")]
    pub project_id: Option<String>,
    #[schemars(description = "Destination section ID")]
    pub section_id: Option<String>,
    #[schemars(description = "New parent task ID")]
    pub parent_id: Option<String>,
}

impl From<&MoveTaskParams> for MoveTaskArgs {
    fn from(p: &MoveTaskParams) -> Self {
        MoveTaskArgs {
            project_id: p.project_id.clone(),
            section_id: p.section_id.clone(),
            parent_id: p.parent_id.clone(),
        }
    }
}

/// Parameters for the `delete_task` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteTaskParams {
    #[schemars(description = "Task ID")]
    pub task_id: String,
}

/// Parameters for the `batch_update_tasks` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct BatchUpdateTasksParams {
    #[schemars(description = "IDs of the tasks to update")]
    pub task_ids: Vec<String>,
    #[schemars(description = "Replacement label names")]
    pub labels: Option<Vec<String>>,
    #[schemars(description = "Priority from 1 (normal) to 4 (urgent)")]
    pub priority: Option<i64>,
    #[schemars(description = "Due date in YYYY-MM-DD format")]
    pub due_date: Option<String>,
    #[schemars(description = "Natural-language due date")]
    pub due_string: Option<String>,
    #[schemars(description = "Collaborator to assign the tasks to")]
    pub assignee_id: Option<String>,
}

impl From<&BatchUpdateTasksParams> for UpdateTaskArgs {
    fn from(p: &BatchUpdateTasksParams) -> Self {
        UpdateTaskArgs {
            labels: p.labels.clone(),
            priority: p.priority,
            due_date: p.due_date.clone(),
            due_string: p.due_string.clone(),
            assignee_id: p.assignee_id.clone(),
            ..Default::default()
        }
    }
}

// ── sections ──

/// Parameters for the `get_sections` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetSectionsParams {
    #[schemars(description = "Project whose sections to list")]
    pub project_id: String,
    #[schemars(description = "Page size for the underlying requests (defaults to 100)")]
    pub limit: Option<u32>,
    #[schemars(description = "Continuation cursor to resume a previous listing")]
    pub cursor: Option<String>,
}

/// Parameters for the `get_section` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetSectionParams {
    #[schemars(description = "Section ID")]
    pub section_id: String,
}

/// Parameters for the `add_section` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddSectionParams {
    #[schemars(description = "Project to create the section in")]
    pub project_id: String,
    #[schemars(description = "Section name (must be non-empty)")]
    pub name: String,
    #[schemars(description = "Position within the project (positive integer)")]
    pub order: Option<i64>,
}

/// Parameters for the `update_section` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateSectionParams {
    #[schemars(description = "Section ID")]
    pub section_id: String,
    #[schemars(description = "New section name (must be non-empty)")]
    pub name: String,
}

/// Parameters for the `move_section` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct MoveSectionParams {
    #[schemars(description = "Section ID")]
    pub section_id: String,
    #[schemars(description = "New position within the project (positive integer)")]
    pub order: i64,
}

/// Parameters for the `delete_section` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteSectionParams {
    #[schemars(description = "Section ID")]
    pub section_id: String,
}

// ── comments ──

/// Parameters for the `get_comments` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCommentsParams {
    #[schemars(description = "Task whose comments to list")]
    pub task_id: Option<String>,
    #[schemars(description = "Project whose comments to list")]
    pub project_id: Option<String>,
    #[schemars(description = "Page size for the underlying requests (defaults to 100)")]
    pub limit: Option<u32>,
    #[schemars(description = "Continuation cursor to resume a previous listing")]
    pub cursor: Option<String>,
}

/// Parameters for the `get_comment` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCommentParams {
    #[schemars(description = "Comment ID")]
    pub comment_id: String,
}

/// Parameters for the `add_comment` tool. Set exactly one of task_id/project_id.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddCommentParams {
    #[schemars(description = "Comment content (must be non-empty)")]
    pub content: String,
    #[schemars(description = "Task to comment on")]
    pub task_id: Option<String>,
    #[schemars(description = "Project to comment on")]
    pub project_id: Option<String>,
}

impl From<AddCommentParams> for AddCommentArgs {
    fn from(p: AddCommentParams) -> Self {
        AddCommentArgs {
            content: p.content,
            task_id: p.task_id,
            project_id: p.project_id,
        }
    }
}

/// Parameters for the `update_comment` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateCommentParams {
    #[schemars(description = "Comment ID")]
    pub comment_id: String,
    #[schemars(description = "New comment content (must be non-empty)")]
    pub content: String,
}

/// Parameters for the `delete_comment` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteCommentParams {
    #[schemars(description = "Comment ID")]
    pub comment_id: String,
}

// ── labels ──

/// Parameters for the `get_labels` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetLabelsParams {
    #[schemars(description = "Page size for the underlying requests (defaults to 100)")]
    pub limit: Option<u32>,
    #[schemars(description = "Continuation cursor to resume a previous listing")]
    pub cursor: Option<String>,
}

/// Parameters for the `get_label` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetLabelParams {
    #[schemars(description = "Label ID")]
    pub label_id: String,
}

/// Parameters for the `add_label` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddLabelParams {
    #[schemars(description = "Label name (must be non-empty)")]
    pub name: String,
    #[schemars(description = "Color name")]
    pub color: Option<String>,
    #[schemars(description = "Position in the label list (positive integer)")]
    pub order: Option<i64>,
    #[schemars(description = "Mark the label as a favorite")]
    pub is_favorite: Option<bool>,
}

impl From<AddLabelParams> for AddLabelArgs {
    fn from(p: AddLabelParams) -> Self {
        AddLabelArgs {
            name: p.name,
            color: p.color,
            order: p.order,
            is_favorite: p.is_favorite,
        }
    }
}

/// Parameters for the `update_label` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateLabelParams {
    #[schemars(description = "Label ID")]
    pub label_id: String,
    #[schemars(description = "New label name")]
    pub name: Option<String>,
    #[schemars(description = "New color name")]
    pub color: Option<String>,
    #[schemars(description = "New position in the label list (positive integer)")]
    pub order: Option<i64>,
    #[schemars(description = "Mark or unmark the label as a favorite")]
    pub is_favorite: Option<bool>,
}

impl From<&UpdateLabelParams> for UpdateLabelArgs {
    fn from(p: &UpdateLabelParams) -> Self {
        UpdateLabelArgs {
            name: p.name.clone(),
            color: p.color.clone(),
            order: p.order,
            is_favorite: p.is_favorite,
        }
    }
}

/// Parameters for the `delete_label` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteLabelParams {
    #[schemars(description = "Label ID")]
    pub label_id: String,
}

// ── search ──

/// Parameters for the `search_tasks` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchTasksParams {
    #[schemars(description = "Free-text match against task content")]
    pub query: Option<String>,
    #[schemars(description = "Only tasks carrying every listed label")]
    pub labels: Option<Vec<String>>,
    #[schemars(description = "Only tasks with this priority (1-4)")]
    pub priority: Option<i64>,
    #[schemars(description = "Only tasks in this project")]
    pub project_id: Option<String>,
    #[schemars(description = "Only tasks assigned to this collaborator")]
    pub assignee_id: Option<String>,
    #[schemars(description = "Filter by completion state")]
    pub is_completed: Option<bool>,
    #[schemars(description = "Only tasks due on this date (YYYY-MM-DD)")]
    pub due_date: Option<String>,
    #[schemars(description = "Only tasks due before this date (YYYY-MM-DD)")]
    pub due_before: Option<String>,
    #[schemars(description = "Only tasks due after this date (YYYY-MM-DD)")]
    pub due_after: Option<String>,
    #[schemars(description = "Sort results by: created_at, priority, or due_date")]
    pub sort_by: Option<String>,
    #[schemars(description = "Sort order: asc (default) or desc")]
    pub sort_order: Option<String>,
    #[schemars(description = "Fetch a single page of this size instead of all results")]
    pub limit: Option<u32>,
    #[schemars(description = "Continuation cursor from a previous limited search")]
    pub cursor: Option<String>,
}

impl From<SearchTasksParams> for SearchArgs {
    fn from(p: SearchTasksParams) -> Self {
        SearchArgs {
            query: p.query,
            labels: p.labels,
            priority: p.priority,
            project_id: p.project_id,
            assignee_id: p.assignee_id,
            is_completed: p.is_completed,
            due_date: p.due_date,
            due_before: p.due_before,
            due_after: p.due_after,
            sort_by: p.sort_by,
            sort_order: p.sort_order,
            limit: p.limit,
            cursor: p.cursor,
        }
    }
}
