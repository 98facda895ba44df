//! Project operations.

use reqwest::Method;
use serde_json::Value;

use crate::error::ClientResult;
use crate::http::TodoistApiClient;
use crate::params::{body_of, AddProjectArgs, UpdateProjectArgs};
use crate::validate;

impl TodoistApiClient {
    /// All projects, across every page.
    pub async fn get_projects(
        &self,
        limit: Option<u32>,
        cursor: Option<String>,
    ) -> ClientResult<Vec<Value>> {
        self.list_all("projects", &[], limit, cursor).await
    }

    /// A single project by ID.
    pub async fn get_project(&self, project_id: &str) -> ClientResult<Value> {
        self.request_resource(Method::GET, &format!("projects/{project_id}"), None, None)
            .await
    }

    /// Create a project.
    pub async fn add_project(&self, args: AddProjectArgs) -> ClientResult<Value> {
        validate::non_empty("Project name", &args.name)?;
        let body = body_of(&args)?;
        self.request_resource(Method::POST, "projects", Some(&body), None)
            .await
    }

    /// Update a project. Only the provided fields are sent.
    pub async fn update_project(
        &self,
        project_id: &str,
        args: UpdateProjectArgs,
    ) -> ClientResult<Option<Value>> {
        if let Some(name) = &args.name {
            validate::non_empty("Project name", name)?;
        }
        let body = body_of(&args)?;
        self.request(
            Method::POST,
            &format!("projects/{project_id}"),
            Some(&body),
            None,
        )
        .await
    }

    /// Delete a project. Success answers with an empty body.
    pub async fn delete_project(&self, project_id: &str) -> ClientResult<()> {
        self.request(
            Method::DELETE,
            &format!("projects/{project_id}"),
            None,
            None,
        )
        .await?;
        Ok(())
    }
}
