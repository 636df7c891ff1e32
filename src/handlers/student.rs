//! Student roster handlers: insert, list, two partial updates, delete.

use crate::db::ExecStatus;
use crate::error::AppError;
use crate::models::{NewStudent, StudentClassUpdate, StudentTitleUpdate};
use crate::service::RecordService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

#[utoipa::path(
    post,
    path = "/student",
    tag = "student",
    request_body = NewStudent,
    responses(
        (status = 200, description = "Row inserted", body = ExecStatus),
        (status = 422, description = "Body missing a required field"),
        (status = 500, description = "Statement failed")
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(body): Json<NewStudent>,
) -> Result<Json<ExecStatus>, AppError> {
    let status = RecordService::insert_student(&state.pool, &body).await?;
    Ok(Json(status))
}

#[utoipa::path(
    get,
    path = "/student",
    tag = "student",
    responses(
        (status = 200, description = "All student rows as a JSON array"),
        (status = 500, description = "Statement failed")
    )
)]
pub async fn list_students(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let rows = RecordService::list_students(&state.pool).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    put,
    path = "/student",
    tag = "student",
    request_body = StudentTitleUpdate,
    responses(
        (status = 200, description = "TITLE and SECTION updated for the given ROLLID", body = ExecStatus),
        (status = 500, description = "Statement failed")
    )
)]
pub async fn update_student_title(
    State(state): State<AppState>,
    Json(body): Json<StudentTitleUpdate>,
) -> Result<Json<ExecStatus>, AppError> {
    let status = RecordService::update_student_title(&state.pool, &body).await?;
    Ok(Json(status))
}

#[utoipa::path(
    patch,
    path = "/student",
    tag = "student",
    request_body = StudentClassUpdate,
    responses(
        (status = 200, description = "CLASS and SECTION updated for the given ROLLID", body = ExecStatus),
        (status = 500, description = "Statement failed")
    )
)]
pub async fn update_student_class(
    State(state): State<AppState>,
    Json(body): Json<StudentClassUpdate>,
) -> Result<Json<ExecStatus>, AppError> {
    let status = RecordService::update_student_class(&state.pool, &body).await?;
    Ok(Json(status))
}

#[utoipa::path(
    delete,
    path = "/student/{id}",
    tag = "student",
    params(("id" = i64, Path, description = "ROLLID of the row to delete")),
    responses(
        (status = 200, description = "Row deleted (rows_affected 0 if no such ROLLID)", body = ExecStatus),
        (status = 400, description = "Non-numeric id"),
        (status = 500, description = "Statement failed")
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ExecStatus>, AppError> {
    let status = RecordService::delete_student(&state.pool, id).await?;
    Ok(Json(status))
}
