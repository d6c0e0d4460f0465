use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::weight::{CreateWeightRequest, DeleteWeightResponse, UpdateWeightRequest, WeightResponse},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/weights",
    responses(
        (status = 200, description = "List all weight records, ordered by date ascending", body = Vec<WeightResponse>)
    ),
    tag = "weights"
)]
pub async fn list_weights(State(db): State<Database>) -> Result<Response, WebError> {
    let records = services::list_weights(db.pool()).await?;

    let response: Vec<WeightResponse> = records.into_iter().map(WeightResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/weights",
    request_body = CreateWeightRequest,
    responses(
        (status = 201, description = "Weight record created successfully", body = WeightResponse),
        (status = 400, description = "Missing or invalid weight or date")
    ),
    tag = "weights"
)]
pub async fn create_weight(
    State(db): State<Database>,
    Json(req): Json<CreateWeightRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let (weight, date) = req
        .parts()
        .ok_or_else(|| WebError::BadRequest("Weight and date are required".to_string()))?;
    let record = services::create_weight(db.pool(), weight, date).await?;

    Ok((StatusCode::CREATED, Json(WeightResponse::from(record))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/weights/{id}",
    params(
        ("id" = i64, Path, description = "Weight record id")
    ),
    request_body = UpdateWeightRequest,
    responses(
        (status = 200, description = "Weight record updated successfully", body = WeightResponse),
        (status = 400, description = "Missing or invalid weight or date"),
        (status = 404, description = "Weight record not found")
    ),
    tag = "weights"
)]
pub async fn update_weight(
    State(db): State<Database>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateWeightRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let (weight, date) = req
        .parts()
        .ok_or_else(|| WebError::BadRequest("Weight and date are required".to_string()))?;
    let record = services::update_weight(db.pool(), id, weight, date).await?;

    Ok(Json(WeightResponse::from(record)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/weights/{id}",
    params(
        ("id" = i64, Path, description = "Weight record id")
    ),
    responses(
        (status = 200, description = "Weight record deleted successfully", body = DeleteWeightResponse),
        (status = 404, description = "Weight record not found")
    ),
    tag = "weights"
)]
pub async fn delete_weight(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let record = services::delete_weight(db.pool(), id).await?;

    let response = DeleteWeightResponse {
        message: "Weight entry deleted successfully".to_string(),
        deleted_weight: WeightResponse::from(record),
    };

    Ok(Json(response).into_response())
}
