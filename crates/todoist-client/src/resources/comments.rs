//! Comment operations.

use reqwest::Method;
use serde_json::{Map, Value};

use crate::error::ClientResult;
use crate::http::TodoistApiClient;
use crate::params::{body_of, AddCommentArgs};
use crate::validate;

impl TodoistApiClient {
    /// All comments for a task or project, across every page.
    pub async fn get_comments(
        &self,
        task_id: Option<&str>,
        project_id: Option<&str>,
        limit: Option<u32>,
        cursor: Option<String>,
    ) -> ClientResult<Vec<Value>> {
        let mut filters: Vec<(&'static str, String)> = Vec::new();
        if let Some(task_id) = task_id {
            filters.push(("task_id", task_id.to_string()));
        }
        if let Some(project_id) = project_id {
            filters.push(("project_id", project_id.to_string()));
        }
        self.list_all("comments", &filters, limit, cursor).await
    }

    /// A single comment by ID.
    pub async fn get_comment(&self, comment_id: &str) -> ClientResult<Value> {
        self.request_resource(Method::GET, &format!("comments/{comment_id}"), None, None)
            .await
    }

    /// Create a comment on exactly one of a task or a project.
    pub async fn add_comment(&self, args: AddCommentArgs) -> ClientResult<Value> {
        validate::non_empty("Comment content", &args.content)?;
        validate::comment_target(args.task_id.as_deref(), args.project_id.as_deref())?;
        let body = body_of(&args)?;
        self.request_resource(Method::POST, "comments", Some(&body), None)
            .await
    }

    /// Replace a comment's content.
    pub async fn update_comment(
        &self,
        comment_id: &str,
        content: &str,
    ) -> ClientResult<Option<Value>> {
        validate::non_empty("Comment content", content)?;
        let mut body = Map::new();
        body.insert("content".to_string(), content.into());
        self.request(
            Method::POST,
            &format!("comments/{comment_id}"),
            Some(&body),
            None,
        )
        .await
    }

    /// Delete a comment. Success answers with an empty body.
    pub async fn delete_comment(&self, comment_id: &str) -> ClientResult<()> {
        self.request(
            Method::DELETE,
            &format!("comments/{comment_id}"),
            None,
            None,
        )
        .await?;
        Ok(())
    }
}
