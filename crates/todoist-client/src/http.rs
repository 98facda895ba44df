//! Request construction, dispatch, and the pagination walk.
//!
//! One network round trip per [`TodoistApiClient::request`] call; no retries
//! and no backoff. Failures propagate immediately and the caller owns retry
//! policy. List endpoints go through [`TodoistApiClient::list_all`], which
//! walks cursor pages into a single flattened sequence.

use std::collections::HashSet;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER};
use reqwest::Method;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::TodoistApiConfig;
use crate::error::{ClientError, ClientResult};
use crate::pagination::Page;

/// Client for the Todoist unified API v1.
///
/// Holds a reusable connection pool and the bearer credential. Safe to share
/// across sequential calls; callers needing concurrency should clone (cheap,
/// the pool is shared) or serialize access themselves.
#[derive(Debug, Clone)]
pub struct TodoistApiClient {
    http: reqwest::Client,
    config: TodoistApiConfig,
}

impl TodoistApiClient {
    /// Create a client against the production endpoint.
    pub fn new(token: impl AsRef<str>) -> ClientResult<Self> {
        Self::with_config(token, TodoistApiConfig::default())
    }

    /// Create a client with explicit configuration.
    pub fn with_config(token: impl AsRef<str>, config: TodoistApiConfig) -> ClientResult<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.as_ref()))
            .map_err(|_| ClientError::AuthError("API token contains invalid characters".into()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &TodoistApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Execute one round trip, returning the response headers and decoded body.
    ///
    /// Empty 2xx bodies decode to `None`; statuses ≥ 400 become `ApiError`
    /// carrying the raw body text (and the Retry-After hint for 429).
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Map<String, Value>>,
        query: Option<&[(&'static str, String)]>,
    ) -> ClientResult<(HeaderMap, Option<Value>)> {
        let mut request = self.http.request(method.clone(), self.url(path));
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;

        debug!(method = %method, path, status = status.as_u16(), "todoist api response");

        if status.as_u16() >= 400 {
            let message = String::from_utf8_lossy(&bytes).into_owned();
            let retry_after = headers
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok());
            return if status.as_u16() == 429 {
                Err(ClientError::rate_limited(message, retry_after))
            } else {
                Err(ClientError::api_error(status.as_u16(), message))
            };
        }

        if bytes.is_empty() {
            return Ok((headers, None));
        }
        let value: Value = serde_json::from_slice(&bytes)?;
        Ok((headers, Some(value)))
    }

    /// Single request returning the decoded JSON body, or `None` when empty.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Map<String, Value>>,
        query: Option<&[(&'static str, String)]>,
    ) -> ClientResult<Option<Value>> {
        let (_, value) = self.execute(method, path, body, query).await?;
        Ok(value)
    }

    /// Single request expecting a resource body; an empty response is a
    /// protocol violation for these endpoints.
    pub(crate) async fn request_resource(
        &self,
        method: Method,
        path: &str,
        body: Option<&Map<String, Value>>,
        query: Option<&[(&'static str, String)]>,
    ) -> ClientResult<Value> {
        self.request(method, path, body, query)
            .await?
            .ok_or_else(|| ClientError::invalid_response(path.to_string(), "empty response body"))
    }

    /// Fetch one page of a list endpoint, normalizing both envelope shapes.
    pub(crate) async fn request_page(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> ClientResult<Page> {
        let (headers, body) = self.execute(Method::GET, path, None, Some(query)).await?;
        Page::from_response(&headers, body)
    }

    /// Walk a cursor-paginated list endpoint into one flattened sequence.
    ///
    /// Issues requests with `limit` and the continuation `cursor` until the
    /// server stops returning one. A cursor that repeats one already
    /// requested (including the starting cursor) terminates the walk instead
    /// of looping. A page with zero items but a fresh cursor continues.
    /// Mid-walk failures discard accumulated items and propagate.
    pub(crate) async fn list_all(
        &self,
        path: &str,
        filters: &[(&'static str, String)],
        limit: Option<u32>,
        cursor: Option<String>,
    ) -> ClientResult<Vec<Value>> {
        let limit = limit.unwrap_or(self.config.page_limit);
        let mut items = Vec::new();
        let mut cursor = cursor;
        let mut seen: HashSet<String> = cursor.iter().cloned().collect();

        loop {
            let mut query: Vec<(&'static str, String)> = filters.to_vec();
            query.push(("limit", limit.to_string()));
            if let Some(c) = &cursor {
                query.push(("cursor", c.clone()));
            }

            let page = self.request_page(path, &query).await?;
            items.extend(page.items);

            match page.next_cursor {
                Some(next) if seen.insert(next.clone()) => cursor = Some(next),
                Some(_) => {
                    warn!(path, "continuation cursor repeated; terminating walk");
                    break;
                }
                None => break,
            }
        }

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = TodoistApiClient::with_config(
            "tok",
            TodoistApiConfig::with_base_url("http://localhost:1234/api/v1/"),
        )
        .unwrap();
        assert_eq!(client.url("sections"), "http://localhost:1234/api/v1/sections");
        assert_eq!(client.url("tasks/t1/move"), "http://localhost:1234/api/v1/tasks/t1/move");
    }

    #[test]
    fn test_invalid_token_rejected() {
        let err = TodoistApiClient::new("bad\ntoken").unwrap_err();
        assert!(matches!(err, ClientError::AuthError(_)));
    }
}
