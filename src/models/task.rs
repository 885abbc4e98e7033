use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::borrow::Cow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Represents the status of a task.
///
/// Stored as plain TEXT rather than a SQL enum so that `ORDER BY status`
/// is ascending lexicographic: `done` sorts before `pending`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Task is yet to be completed.
    Pending,
    /// Task is completed.
    Done,
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

/// Sort order for task listings, parsed from the `sort` query parameter.
///
/// Three-way dispatch: `title` and `status` select their respective orders,
/// and anything else (including an absent parameter) falls back to newest
/// creation first, same as an explicit `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSort {
    Title,
    Status,
    Date,
}

impl TaskSort {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("title") => TaskSort::Title,
            Some("status") => TaskSort::Status,
            _ => TaskSort::Date,
        }
    }

    /// The ORDER BY clause for this sort. `status` breaks ties by newest
    /// creation first within each status group.
    pub fn order_by(self) -> &'static str {
        match self {
            TaskSort::Title => "title ASC",
            TaskSort::Status => "status ASC, created_at DESC",
            TaskSort::Date => "created_at DESC",
        }
    }
}

/// Query parameters accepted by the task listing endpoint.
#[derive(Debug, Deserialize)]
pub struct TaskListQuery {
    pub sort: Option<String>,
}

/// Input payload for creating a task.
///
/// Title and description are required; `status` defaults to `pending` when
/// omitted. Length constraints apply to the trimmed value.
#[derive(Debug, Deserialize, Validate)]
pub struct TaskInput {
    #[validate(custom = "validate_title")]
    pub title: String,

    #[validate(custom = "validate_description")]
    pub description: String,

    pub status: Option<TaskStatus>,
}

/// Input payload for updating a task. Every field is optional; only the
/// fields present in the request are validated and replaced.
#[derive(Debug, Deserialize, Validate)]
pub struct TaskUpdate {
    #[validate(custom = "validate_title")]
    pub title: Option<String>,

    #[validate(custom = "validate_description")]
    pub description: Option<String>,

    pub status: Option<TaskStatus>,
}

/// A task entity as stored in the database and returned by the API.
///
/// The wire shape follows the public contract: `_id`, `createdAt`,
/// `updatedAt`. The owner reference is reserved in the schema but never
/// populated by the exposed create path, so it is omitted from responses
/// while unset.
#[derive(Debug, Serialize, FromRow)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    #[serde(rename = "user", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    bounded_after_trim(title, 100, "Title is required", "Title cannot exceed 100 characters")
}

fn validate_description(description: &str) -> Result<(), ValidationError> {
    bounded_after_trim(
        description,
        500,
        "Description is required",
        "Description cannot exceed 500 characters",
    )
}

/// Non-empty and at most `max` characters, after trimming whitespace.
fn bounded_after_trim(
    value: &str,
    max: usize,
    empty_msg: &'static str,
    long_msg: &'static str,
) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(Cow::from(empty_msg));
        return Err(error);
    }
    if trimmed.chars().count() > max {
        let mut error = ValidationError::new("length");
        error.message = Some(Cow::from(long_msg));
        return Err(error);
    }
    Ok(())
}
