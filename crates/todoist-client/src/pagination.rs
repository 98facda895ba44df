//! Page normalization for list endpoints.
//!
//! Todoist list endpoints answer in two shapes: a bare JSON array with the
//! continuation cursor in the `X-Pagination-Next-Cursor` response header, or
//! a `{"results": [...], "next_cursor": ...}` envelope. Both normalize into
//! [`Page`] here, before any pagination logic runs.

use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

/// Response header carrying the continuation cursor for bare-array endpoints.
/// Lookup is case-insensitive; the wire form is `X-Pagination-Next-Cursor`.
pub const NEXT_CURSOR_HEADER: &str = "x-pagination-next-cursor";

/// One response's worth of list results plus its continuation cursor.
///
/// `next_cursor` is `None` on the last page; empty-string and null cursors
/// normalize to `None`.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub items: Vec<Value>,
    pub next_cursor: Option<String>,
}

impl Page {
    /// Normalize a list response body (and its headers) into a `Page`.
    pub fn from_response(headers: &HeaderMap, body: Option<Value>) -> ClientResult<Self> {
        match body {
            None => Ok(Self {
                items: Vec::new(),
                next_cursor: header_cursor(headers),
            }),
            Some(Value::Array(items)) => Ok(Self {
                items,
                next_cursor: header_cursor(headers),
            }),
            Some(Value::Object(mut map)) => {
                let items = match map.remove("results") {
                    Some(Value::Array(items)) => items,
                    Some(_) => {
                        return Err(ClientError::invalid_response(
                            "results",
                            "expected an array of items",
                        ))
                    }
                    None => {
                        return Err(ClientError::invalid_response(
                            "results",
                            "list response is missing the results field",
                        ))
                    }
                };
                let next_cursor = map
                    .remove("next_cursor")
                    .and_then(|v| v.as_str().map(|s| s.to_string()))
                    .filter(|c| !c.is_empty());
                Ok(Self { items, next_cursor })
            }
            Some(other) => Err(ClientError::invalid_response(
                "body",
                format!("expected array or results envelope, got {other}"),
            )),
        }
    }
}

fn header_cursor(headers: &HeaderMap) -> Option<String> {
    headers
        .get(NEXT_CURSOR_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .filter(|c| !c.is_empty())
}
