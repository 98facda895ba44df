//! Task search over the `tasks/filter` endpoint.
//!
//! Structured search parameters compile into a Todoist filter expression so
//! the matching happens server-side. Three things the filter language cannot
//! express are applied to the assembled result set afterwards, as a
//! documented client-side fallback: `project_id`/`assignee_id`/`is_completed`
//! post-filters and `sort_by`/`sort_order` ordering.

use serde::Serialize;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};
use crate::http::TodoistApiClient;
use crate::params::{SearchArgs, SortBy};
use crate::validate;

/// Assembled search results.
///
/// `next_cursor` is populated only for single-page searches (explicit
/// `limit`); a full walk always ends with `None`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub tasks: Vec<Value>,
    pub total_count: usize,
    pub next_cursor: Option<String>,
}

/// Compile structured parameters into a Todoist filter expression.
///
/// Todoist filter priorities are inverted relative to API priorities: the
/// filter token `p1` matches API priority 4. An empty parameter set compiles
/// to `all`.
fn filter_expression(args: &SearchArgs) -> String {
    let mut clauses = Vec::new();
    if let Some(query) = &args.query {
        clauses.push(format!("search: {query}"));
    }
    if let Some(labels) = &args.labels {
        for label in labels {
            clauses.push(format!("@{label}"));
        }
    }
    if let Some(priority) = args.priority {
        clauses.push(format!("p{}", 5 - priority));
    }
    if let Some(due_date) = &args.due_date {
        clauses.push(format!("due: {due_date}"));
    }
    if let Some(due_before) = &args.due_before {
        clauses.push(format!("due before: {due_before}"));
    }
    if let Some(due_after) = &args.due_after {
        clauses.push(format!("due after: {due_after}"));
    }
    if clauses.is_empty() {
        "all".to_string()
    } else {
        clauses.join(" & ")
    }
}

fn matches_post_filters(task: &Value, args: &SearchArgs) -> bool {
    if let Some(project_id) = &args.project_id {
        if task.get("project_id").and_then(|v| v.as_str()) != Some(project_id.as_str()) {
            return false;
        }
    }
    if let Some(assignee_id) = &args.assignee_id {
        if task.get("assignee_id").and_then(|v| v.as_str()) != Some(assignee_id.as_str()) {
            return false;
        }
    }
    if let Some(is_completed) = args.is_completed {
        let completed = task
            .get("is_completed")
            .or_else(|| task.get("checked"))
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        if completed != is_completed {
            return false;
        }
    }
    true
}

fn str_key<'a>(task: &'a Value, field: &str) -> Option<&'a str> {
    task.get(field).and_then(|v| v.as_str())
}

fn due_date_key(task: &Value) -> Option<&str> {
    task.get("due").and_then(|d| d.get("date")).and_then(|v| v.as_str())
}

fn sort_tasks(tasks: &mut [Value], by: SortBy, descending: bool) {
    tasks.sort_by(|a, b| {
        let ord = match by {
            SortBy::CreatedAt => str_key(a, "created_at").cmp(&str_key(b, "created_at")),
            SortBy::Priority => {
                let pa = a.get("priority").and_then(|v| v.as_i64());
                let pb = b.get("priority").and_then(|v| v.as_i64());
                pa.cmp(&pb)
            }
            SortBy::DueDate => due_date_key(a).cmp(&due_date_key(b)),
        };
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
}

impl TodoistApiClient {
    /// Search tasks with structured filters.
    ///
    /// An explicit `limit` fetches a single page and surfaces the
    /// continuation cursor for caller-driven resumption; otherwise the whole
    /// result set is walked.
    pub async fn search_tasks(&self, args: SearchArgs) -> ClientResult<SearchResults> {
        if let Some(priority) = args.priority {
            validate::priority_in_range(priority)?;
        }
        for (field, value) in [
            ("due_date", &args.due_date),
            ("due_before", &args.due_before),
            ("due_after", &args.due_after),
        ] {
            if let Some(value) = value {
                validate::iso_date(field, value)?;
            }
        }
        let sort_by = args
            .sort_by
            .as_deref()
            .map(|s| s.parse::<SortBy>())
            .transpose()?;
        let descending = match args.sort_order.as_deref() {
            None | Some("asc") => false,
            Some("desc") => true,
            Some(other) => {
                return Err(ClientError::InvalidInput(format!(
                    "Unknown sort_order '{other}' (expected asc or desc)"
                )))
            }
        };

        let expression = filter_expression(&args);
        let filters = [("query", expression)];

        let (mut tasks, next_cursor) = if let Some(limit) = args.limit {
            let mut query: Vec<(&'static str, String)> = filters.to_vec();
            query.push(("limit", limit.to_string()));
            if let Some(cursor) = &args.cursor {
                query.push(("cursor", cursor.clone()));
            }
            let page = self.request_page("tasks/filter", &query).await?;
            (page.items, page.next_cursor)
        } else {
            let items = self
                .list_all("tasks/filter", &filters, None, args.cursor.clone())
                .await?;
            (items, None)
        };

        tasks.retain(|task| matches_post_filters(task, &args));
        if let Some(by) = sort_by {
            sort_tasks(&mut tasks, by, descending);
        }

        let total_count = tasks.len();
        Ok(SearchResults {
            tasks,
            total_count,
            next_cursor,
        })
    }
}
