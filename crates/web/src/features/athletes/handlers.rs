use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::{
    athlete::{AthleteResponse, CreateAthleteRequest, UpdateAthleteRequest},
    common::ListParams,
};
use validator::Validate;

use crate::error::{WebError, WebResult};
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/athletes/",
    params(ListParams),
    responses(
        (status = 200, description = "List athletes successfully", body = Vec<AthleteResponse>),
        (status = 400, description = "Invalid listing window")
    ),
    tag = "athletes"
)]
pub async fn list_athletes(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> WebResult<Response> {
    params.validate().map_err(WebError::BadRequest)?;

    let athletes = services::list_athletes(state.store(), params).await?;

    let response: Vec<AthleteResponse> = athletes.into_iter().map(AthleteResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/athletes/{id}",
    params(
        ("id" = i32, Path, description = "Athlete id")
    ),
    responses(
        (status = 200, description = "Athlete found", body = AthleteResponse),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn get_athlete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> WebResult<Response> {
    let athlete = services::get_athlete(state.store(), id).await?;

    Ok(Json(AthleteResponse::from(athlete)).into_response())
}

#[utoipa::path(
    post,
    path = "/athletes/",
    request_body = CreateAthleteRequest,
    responses(
        (status = 201, description = "Athlete created successfully", body = AthleteResponse),
        (status = 409, description = "CPF already registered"),
        (status = 422, description = "Validation error")
    ),
    tag = "athletes"
)]
pub async fn create_athlete(
    State(state): State<AppState>,
    Json(req): Json<CreateAthleteRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let athlete = services::create_athlete(state.store(), &req).await?;

    Ok((StatusCode::CREATED, Json(AthleteResponse::from(athlete))).into_response())
}

#[utoipa::path(
    patch,
    path = "/athletes/{id}",
    params(
        ("id" = i32, Path, description = "Athlete id")
    ),
    request_body = UpdateAthleteRequest,
    responses(
        (status = 200, description = "Athlete updated successfully", body = AthleteResponse),
        (status = 404, description = "Athlete not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "athletes"
)]
pub async fn update_athlete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(update_req): Json<UpdateAthleteRequest>,
) -> WebResult<Response> {
    update_req.validate()?;

    let updated = services::update_athlete(state.store(), id, &update_req).await?;

    Ok(Json(AthleteResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/athletes/{id}",
    params(
        ("id" = i32, Path, description = "Athlete id")
    ),
    responses(
        (status = 204, description = "Athlete deleted successfully"),
        (status = 404, description = "Athlete not found"),
        (status = 409, description = "Athlete still has workouts")
    ),
    tag = "athletes"
)]
pub async fn delete_athlete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> WebResult<Response> {
    services::delete_athlete(state.store(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
