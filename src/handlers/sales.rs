//! Read-only handlers over the sales sample tables: orders, listofitem,
//! agents, company.

use crate::error::AppError;
use crate::models::{AgentFilter, CompanyFilter};
use crate::service::RecordService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;

#[utoipa::path(
    get,
    path = "/orders",
    tag = "sales",
    responses(
        (status = 200, description = "All order rows as a JSON array"),
        (status = 500, description = "Statement failed")
    )
)]
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let rows = RecordService::list_orders(&state.pool).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/listofitem/{id}",
    tag = "sales",
    params(("id" = String, Path, description = "ITEMCODE to look up")),
    responses(
        (status = 200, description = "Item rows matching the ITEMCODE, empty array if none"),
        (status = 500, description = "Statement failed")
    )
)]
pub async fn items_by_code(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let rows = RecordService::items_by_code(&state.pool, &id).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/agents",
    tag = "sales",
    params(("city" = String, Query, description = "Exact WORKING_AREA to match")),
    responses(
        (status = 200, description = "Agent rows for the area, empty array if none"),
        (status = 400, description = "Missing city parameter"),
        (status = 500, description = "Statement failed")
    )
)]
pub async fn agents_by_city(
    State(state): State<AppState>,
    Query(filter): Query<AgentFilter>,
) -> Result<Json<Vec<Value>>, AppError> {
    let rows = RecordService::agents_by_area(&state.pool, &filter.city).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/company",
    tag = "sales",
    params(("name" = String, Query, description = "Exact COMPANY_NAME to match")),
    responses(
        (status = 200, description = "Company rows for the name, empty array if none"),
        (status = 400, description = "Missing name parameter"),
        (status = 500, description = "Statement failed")
    )
)]
pub async fn companies_by_name(
    State(state): State<AppState>,
    Query(filter): Query<CompanyFilter>,
) -> Result<Json<Vec<Value>>, AppError> {
    let rows = RecordService::companies_by_name(&state.pool, &filter.name).await?;
    Ok(Json(rows))
}
