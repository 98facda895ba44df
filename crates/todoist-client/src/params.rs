//! Typed argument structs for create/update operations.
//!
//! Each operation enumerates every recognized parameter explicitly; optional
//! fields carry `skip_serializing_if` so an omitted value never appears as a
//! key in the request body or query string.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ClientError, ClientResult};

/// Serialize an argument struct into a JSON body map, dropping `None` fields.
pub(crate) fn body_of<T: Serialize>(args: &T) -> ClientResult<Map<String, Value>> {
    match serde_json::to_value(args)? {
        Value::Object(map) => Ok(map),
        other => Err(ClientError::invalid_response(
            "body",
            format!("argument struct serialized to non-object {other}"),
        )),
    }
}

// ── projects ──

/// Arguments for `add_project`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddProjectArgs {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

/// Arguments for `update_project`. Only present fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProjectArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

// ── tasks ──

/// Server-side filters for `get_tasks`.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub project_id: Option<String>,
    pub section_id: Option<String>,
    pub label: Option<String>,
    pub ids: Option<Vec<String>>,
}

impl TaskFilter {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(project_id) = &self.project_id {
            pairs.push(("project_id", project_id.clone()));
        }
        if let Some(section_id) = &self.section_id {
            pairs.push(("section_id", section_id.clone()));
        }
        if let Some(label) = &self.label {
            pairs.push(("label", label.clone()));
        }
        if let Some(ids) = &self.ids {
            pairs.push(("ids", ids.join(",")));
        }
        pairs
    }
}

/// Arguments for `add_task`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddTaskArgs {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<String>,
}

/// Arguments for `update_task`. Only present fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTaskArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<String>,
}

/// Arguments for `move_task`. Exactly one field must be set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MoveTaskArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

// ── comments ──

/// Arguments for `add_comment`. Exactly one of task_id/project_id.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddCommentArgs {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

// ── labels ──

/// Arguments for `add_label`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddLabelArgs {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

/// Arguments for `update_label`. Only present fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateLabelArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

// ── search ──

/// Result ordering for `search_tasks`, applied client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    CreatedAt,
    Priority,
    DueDate,
}

impl std::str::FromStr for SortBy {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" => Ok(Self::CreatedAt),
            "priority" => Ok(Self::Priority),
            "due_date" => Ok(Self::DueDate),
            other => Err(ClientError::InvalidInput(format!(
                "Unknown sort_by '{other}' (expected created_at, priority, or due_date)"
            ))),
        }
    }
}

/// Arguments for `search_tasks`.
#[derive(Debug, Clone, Default)]
pub struct SearchArgs {
    /// Free-text match against task content
    pub query: Option<String>,
    /// Tasks carrying every listed label
    pub labels: Option<Vec<String>>,
    /// API priority in [1, 4]
    pub priority: Option<i64>,
    pub project_id: Option<String>,
    pub assignee_id: Option<String>,
    pub is_completed: Option<bool>,
    pub due_date: Option<String>,
    pub due_before: Option<String>,
    pub due_after: Option<String>,
    /// created_at | priority | due_date
    pub sort_by: Option<String>,
    /// asc (default) | desc
    pub sort_order: Option<String>,
    /// When set, fetch a single page of this size instead of walking
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_fields_are_omitted_from_body() {
        let args = AddTaskArgs {
            content: "Buy milk".to_string(),
            project_id: Some("p1".to_string()),
            ..Default::default()
        };
        let body = body_of(&args).unwrap();
        assert_eq!(body.len(), 2);
        assert_eq!(body["content"], "Buy milk");
        assert_eq!(body["project_id"], "p1");
        assert!(!body.contains_key("priority"));
        assert!(!body.contains_key("due_date"));
    }

    #[test]
    fn test_update_with_no_fields_is_empty_body() {
        let body = body_of(&UpdateTaskArgs::default()).unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn test_move_body_carries_only_changed_field() {
        let args = MoveTaskArgs {
            section_id: Some("7025".to_string()),
            ..Default::default()
        };
        let body = body_of(&args).unwrap();
        assert_eq!(body.len(), 1);
        assert_eq!(body["section_id"], "7025");
    }

    #[test]
    fn test_task_filter_query_pairs() {
        let filter = TaskFilter {
            project_id: Some("p1".to_string()),
            ids: Some(vec!["a".to_string(), "b".to_string()]),
            ..Default::default()
        };
        let pairs = filter.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("project_id", "p1".to_string()),
                ("ids", "a,b".to_string()),
            ]
        );
    }

    #[test]
    fn test_sort_by_parses() {
        assert_eq!("priority".parse::<SortBy>().unwrap(), SortBy::Priority);
        assert!("random".parse::<SortBy>().is_err());
    }
}
