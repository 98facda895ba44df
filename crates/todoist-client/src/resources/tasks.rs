//! Task operations, including the sequential batch update.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};
use crate::http::TodoistApiClient;
use crate::params::{body_of, AddTaskArgs, MoveTaskArgs, TaskFilter, UpdateTaskArgs};
use crate::validate;

/// Result of a batch update: per-id success and failure lists.
#[derive(Debug, Clone, Serialize)]
pub struct BatchUpdateOutcome {
    pub updated: Vec<String>,
    pub failed: Vec<BatchFailure>,
}

/// A single failed entry in a batch update.
#[derive(Debug, Clone, Serialize)]
pub struct BatchFailure {
    pub task_id: String,
    pub error: String,
}

fn validate_task_fields(
    priority: Option<i64>,
    order: Option<i64>,
    due_date: Option<&str>,
) -> ClientResult<()> {
    if let Some(priority) = priority {
        validate::priority_in_range(priority)?;
    }
    if let Some(order) = order {
        validate::positive_order(order)?;
    }
    if let Some(due_date) = due_date {
        validate::iso_date("due_date", due_date)?;
    }
    Ok(())
}

impl TodoistApiClient {
    /// All tasks matching the filter, across every page.
    pub async fn get_tasks(
        &self,
        filter: TaskFilter,
        limit: Option<u32>,
        cursor: Option<String>,
    ) -> ClientResult<Vec<Value>> {
        self.list_all("tasks", &filter.query_pairs(), limit, cursor)
            .await
    }

    /// A single task by ID.
    pub async fn get_task(&self, task_id: &str) -> ClientResult<Value> {
        self.request_resource(Method::GET, &format!("tasks/{task_id}"), None, None)
            .await
    }

    /// Create a task.
    pub async fn add_task(&self, args: AddTaskArgs) -> ClientResult<Value> {
        validate::non_empty("Task content", &args.content)?;
        validate_task_fields(args.priority, args.order, args.due_date.as_deref())?;
        let body = body_of(&args)?;
        self.request_resource(Method::POST, "tasks", Some(&body), None)
            .await
    }

    /// Update a task. Only the provided fields are sent.
    pub async fn update_task(
        &self,
        task_id: &str,
        args: UpdateTaskArgs,
    ) -> ClientResult<Option<Value>> {
        if let Some(content) = &args.content {
            validate::non_empty("Task content", content)?;
        }
        validate_task_fields(args.priority, None, args.due_date.as_deref())?;
        let body = body_of(&args)?;
        self.request(Method::POST, &format!("tasks/{task_id}"), Some(&body), None)
            .await
    }

    /// Move a task to a project, section, or parent. Exactly one of the
    /// three, carrying only that field.
    pub async fn move_task(
        &self,
        task_id: &str,
        args: MoveTaskArgs,
    ) -> ClientResult<Option<Value>> {
        validate::move_target(
            args.project_id.as_deref(),
            args.section_id.as_deref(),
            args.parent_id.as_deref(),
        )?;
        let body = body_of(&args)?;
        self.request(
            Method::POST,
            &format!("tasks/{task_id}/move"),
            Some(&body),
            None,
        )
        .await
    }

    /// Delete a task. Success answers with an empty body.
    pub async fn delete_task(&self, task_id: &str) -> ClientResult<()> {
        self.request(Method::DELETE, &format!("tasks/{task_id}"), None, None)
            .await?;
        Ok(())
    }

    /// Apply one update to many tasks sequentially.
    ///
    /// The patch is validated once up front; per-task remote failures land in
    /// `failed` rather than aborting the batch, so a partially applied batch
    /// is visible to the caller.
    pub async fn batch_update_tasks(
        &self,
        task_ids: &[String],
        patch: UpdateTaskArgs,
    ) -> ClientResult<BatchUpdateOutcome> {
        if task_ids.is_empty() {
            return Err(ClientError::InvalidInput(
                "task_ids cannot be empty".to_string(),
            ));
        }
        if let Some(content) = &patch.content {
            validate::non_empty("Task content", content)?;
        }
        validate_task_fields(patch.priority, None, patch.due_date.as_deref())?;

        let mut outcome = BatchUpdateOutcome {
            updated: Vec::new(),
            failed: Vec::new(),
        };
        for task_id in task_ids {
            match self.update_task(task_id, patch.clone()).await {
                Ok(_) => outcome.updated.push(task_id.clone()),
                Err(e) => outcome.failed.push(BatchFailure {
                    task_id: task_id.clone(),
                    error: e.to_string(),
                }),
            }
        }
        Ok(outcome)
    }
}
