//! Todoist unified API v1 client.
//!
//! Provides [`TodoistApiClient`], a pagination-aware REST client: typed
//! operation wrappers per resource (projects, tasks, sections, comments,
//! labels), cursor-based page assembly into flattened sequences, pre-network
//! parameter validation, and a typed error taxonomy. The client performs no
//! retries and holds no resource state across calls.

pub mod config;
pub mod error;
pub mod http;
pub mod pagination;
pub mod params;
pub mod resources;
pub mod validate;

pub use config::{config_file_path, resolve_token, TodoistApiConfig, TOKEN_ENV_VAR};
pub use error::{ClientError, ClientResult};
pub use http::TodoistApiClient;
pub use pagination::Page;
pub use params::{
    AddCommentArgs, AddLabelArgs, AddProjectArgs, AddTaskArgs, MoveTaskArgs, SearchArgs, SortBy,
    TaskFilter, UpdateLabelArgs, UpdateProjectArgs, UpdateTaskArgs,
};
pub use resources::search::SearchResults;
pub use resources::tasks::{BatchFailure, BatchUpdateOutcome};
