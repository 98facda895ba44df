//! Label operations.

use reqwest::Method;
use serde_json::Value;

use crate::error::ClientResult;
use crate::http::TodoistApiClient;
use crate::params::{body_of, AddLabelArgs, UpdateLabelArgs};
use crate::validate;

impl TodoistApiClient {
    /// All personal labels, across every page.
    pub async fn get_labels(
        &self,
        limit: Option<u32>,
        cursor: Option<String>,
    ) -> ClientResult<Vec<Value>> {
        self.list_all("labels", &[], limit, cursor).await
    }

    /// A single label by ID.
    pub async fn get_label(&self, label_id: &str) -> ClientResult<Value> {
        self.request_resource(Method::GET, &format!("labels/{label_id}"), None, None)
            .await
    }

    /// Create a label.
    pub async fn add_label(&self, args: AddLabelArgs) -> ClientResult<Value> {
        validate::non_empty("Label name", &args.name)?;
        if let Some(order) = args.order {
            validate::positive_order(order)?;
        }
        let body = body_of(&args)?;
        self.request_resource(Method::POST, "labels", Some(&body), None)
            .await
    }

    /// Update a label. Only the provided fields are sent.
    pub async fn update_label(
        &self,
        label_id: &str,
        args: UpdateLabelArgs,
    ) -> ClientResult<Option<Value>> {
        if let Some(name) = &args.name {
            validate::non_empty("Label name", name)?;
        }
        if let Some(order) = args.order {
            validate::positive_order(order)?;
        }
        let body = body_of(&args)?;
        self.request(Method::POST, &format!("labels/{label_id}"), Some(&body), None)
            .await
    }

    /// Delete a label. Success answers with an empty body.
    pub async fn delete_label(&self, label_id: &str) -> ClientResult<()> {
        self.request(Method::DELETE, &format!("labels/{label_id}"), None, None)
            .await?;
        Ok(())
    }
}
