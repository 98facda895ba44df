//! Section operations.

use reqwest::Method;
use serde_json::{Map, Value};

use crate::error::ClientResult;
use crate::http::TodoistApiClient;
use crate::validate;

impl TodoistApiClient {
    /// All sections of a project, across every page.
    pub async fn get_sections(
        &self,
        project_id: &str,
        limit: Option<u32>,
        cursor: Option<String>,
    ) -> ClientResult<Vec<Value>> {
        let filters = [("project_id", project_id.to_string())];
        self.list_all("sections", &filters, limit, cursor).await
    }

    /// A single section by ID.
    pub async fn get_section(&self, section_id: &str) -> ClientResult<Value> {
        self.request_resource(Method::GET, &format!("sections/{section_id}"), None, None)
            .await
    }

    /// Create a section within a project.
    pub async fn add_section(
        &self,
        project_id: &str,
        name: &str,
        order: Option<i64>,
    ) -> ClientResult<Value> {
        validate::non_empty("Section name", name)?;
        if let Some(order) = order {
            validate::positive_order(order)?;
        }

        let mut body = Map::new();
        body.insert("project_id".to_string(), project_id.into());
        body.insert("name".to_string(), name.into());
        if let Some(order) = order {
            body.insert("order".to_string(), order.into());
        }
        self.request_resource(Method::POST, "sections", Some(&body), None)
            .await
    }

    /// Rename a section.
    pub async fn update_section(
        &self,
        section_id: &str,
        name: &str,
    ) -> ClientResult<Option<Value>> {
        validate::non_empty("Section name", name)?;
        let mut body = Map::new();
        body.insert("name".to_string(), name.into());
        self.request(
            Method::POST,
            &format!("sections/{section_id}"),
            Some(&body),
            None,
        )
        .await
    }

    /// Reorder a section within its project, sending only `order`.
    pub async fn move_section(
        &self,
        section_id: &str,
        order: i64,
    ) -> ClientResult<Option<Value>> {
        validate::positive_order(order)?;
        let mut body = Map::new();
        body.insert("order".to_string(), order.into());
        self.request(
            Method::POST,
            &format!("sections/{section_id}/move"),
            Some(&body),
            None,
        )
        .await
    }

    /// Delete a section. Success answers with an empty body.
    pub async fn delete_section(&self, section_id: &str) -> ClientResult<()> {
        self.request(
            Method::DELETE,
            &format!("sections/{section_id}"),
            None,
            None,
        )
        .await?;
        Ok(())
    }
}
