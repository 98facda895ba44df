//! Parameter validation applied before any network call.
//!
//! Every mutation wrapper runs the relevant subset of these checks and
//! short-circuits with `InvalidInput` so malformed input never reaches the
//! request builder.

use chrono::NaiveDate;

use crate::error::{ClientError, ClientResult};

/// A required name/content string must be non-empty after trimming.
pub fn non_empty(field: &str, value: &str) -> ClientResult<()> {
    if value.trim().is_empty() {
        return Err(ClientError::InvalidInput(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// An order/position parameter must be a positive integer.
pub fn positive_order(order: i64) -> ClientResult<()> {
    if order <= 0 {
        return Err(ClientError::InvalidInput(
            "Order must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

/// A priority parameter must lie in [1, 4].
pub fn priority_in_range(priority: i64) -> ClientResult<()> {
    if !(1..=4).contains(&priority) {
        return Err(ClientError::InvalidInput(
            "Priority must be between 1 and 4".to_string(),
        ));
    }
    Ok(())
}

/// A comment must target exactly one of {task, project}.
pub fn comment_target(task_id: Option<&str>, project_id: Option<&str>) -> ClientResult<()> {
    match (task_id, project_id) {
        (Some(_), Some(_)) => Err(ClientError::InvalidInput(
            "Comment must be for either task or project, not both".to_string(),
        )),
        (None, None) => Err(ClientError::InvalidInput(
            "Must specify either task_id or project_id".to_string(),
        )),
        _ => Ok(()),
    }
}

/// A task move must change exactly one relational field.
pub fn move_target(
    project_id: Option<&str>,
    section_id: Option<&str>,
    parent_id: Option<&str>,
) -> ClientResult<()> {
    let set = [project_id, section_id, parent_id]
        .iter()
        .filter(|v| v.is_some())
        .count();
    if set != 1 {
        return Err(ClientError::InvalidInput(
            "Move requires exactly one of project_id, section_id, or parent_id".to_string(),
        ));
    }
    Ok(())
}

/// A date parameter must be an ISO `YYYY-MM-DD` calendar date.
pub fn iso_date(field: &str, value: &str) -> ClientResult<()> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        ClientError::InvalidInput(format!(
            "Invalid date format for {field}: '{value}' (expected YYYY-MM-DD)"
        ))
    })?;
    Ok(())
}
