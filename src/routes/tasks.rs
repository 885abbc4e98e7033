use crate::{
    error::AppError,
    models::{Task, TaskInput, TaskListQuery, TaskSort, TaskUpdate},
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

const TASK_COLUMNS: &str = "id, title, description, status, user_id, created_at, updated_at";

/// Retrieves the full task collection.
///
/// Tasks are global: listing is not scoped to any user and no bearer token
/// is required. The `sort` query parameter selects the order:
/// - `title`: ascending lexicographic by title
/// - `status`: ascending by status value, ties broken newest-first
/// - `date`, absent, or anything unrecognized: newest creation first
#[get("")]
pub async fn get_tasks(
    pool: web::Data<PgPool>,
    query_params: web::Query<TaskListQuery>,
) -> Result<impl Responder, AppError> {
    let sort = TaskSort::parse(query_params.sort.as_deref());

    let sql = format!(
        "SELECT {} FROM tasks ORDER BY {}",
        TASK_COLUMNS,
        sort.order_by()
    );

    let tasks = sqlx::query_as::<_, Task>(&sql).fetch_all(&**pool).await?;

    Ok(HttpResponse::Ok().json(tasks))
}

/// Retrieves a single task by its ID, or 404 if the ID does not resolve.
#[get("/{id}")]
pub async fn get_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let sql = format!("SELECT {} FROM tasks WHERE id = $1", TASK_COLUMNS);
    let task = sqlx::query_as::<_, Task>(&sql)
        .bind(task_id.into_inner())
        .fetch_optional(&**pool)
        .await?;

    match task {
        Some(task) => Ok(HttpResponse::Ok().json(task)),
        None => Err(AppError::NotFound("Task not found".into())),
    }
}

/// Creates a new task.
///
/// Title and description are trimmed and bound-checked (1-100 and 1-500
/// characters); `status` defaults to `pending` when omitted. The store
/// assigns the identifier and both timestamps.
#[post("")]
pub async fn create_task(
    pool: web::Data<PgPool>,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    // Validate input
    task_data.validate()?;

    let status = task_data.status.unwrap_or_default();

    let sql = format!(
        "INSERT INTO tasks (title, description, status) VALUES ($1, $2, $3) RETURNING {}",
        TASK_COLUMNS
    );
    let task = sqlx::query_as::<_, Task>(&sql)
        .bind(task_data.title.trim())
        .bind(task_data.description.trim())
        .bind(status)
        .fetch_one(&**pool)
        .await?;

    Ok(HttpResponse::Created().json(task))
}

/// Updates a task, replacing only the fields present in the request.
///
/// Present fields are re-validated with the same constraints as creation.
/// The merge happens in a single UPDATE statement (COALESCE over the bound
/// values), so the read-modify-write is atomic from the caller's
/// perspective. Returns the fully merged record.
#[put("/{id}")]
pub async fn update_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
    task_data: web::Json<TaskUpdate>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let sql = format!(
        "UPDATE tasks \
         SET title = COALESCE($2, title), \
             description = COALESCE($3, description), \
             status = COALESCE($4, status) \
         WHERE id = $1 \
         RETURNING {}",
        TASK_COLUMNS
    );
    let task = sqlx::query_as::<_, Task>(&sql)
        .bind(task_id.into_inner())
        .bind(task_data.title.as_deref().map(str::trim))
        .bind(task_data.description.as_deref().map(str::trim))
        .bind(task_data.status)
        .fetch_optional(&**pool)
        .await?;

    match task {
        Some(task) => Ok(HttpResponse::Ok().json(task)),
        None => Err(AppError::NotFound("Task not found".into())),
    }
}

/// Deletes a task by its ID and acknowledges with a confirmation message.
#[delete("/{id}")]
pub async fn delete_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
        .bind(task_id.into_inner())
        .execute(&**pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Task not found".into()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Task deleted successfully"
    })))
}
