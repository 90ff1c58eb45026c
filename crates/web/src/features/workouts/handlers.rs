use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::{
    common::ListParams,
    workout::{CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutResponse},
};
use validator::Validate;

use crate::error::{WebError, WebResult};
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/workouts/",
    params(ListParams),
    responses(
        (status = 200, description = "List workouts successfully", body = Vec<WorkoutResponse>),
        (status = 400, description = "Invalid listing window")
    ),
    tag = "workouts"
)]
pub async fn list_workouts(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> WebResult<Response> {
    params.validate().map_err(WebError::BadRequest)?;

    let workouts = services::list_workouts(state.store(), params).await?;

    let response: Vec<WorkoutResponse> = workouts.into_iter().map(WorkoutResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/workouts/{id}",
    params(
        ("id" = i32, Path, description = "Workout id")
    ),
    responses(
        (status = 200, description = "Workout found", body = WorkoutResponse),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn get_workout(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> WebResult<Response> {
    let workout = services::get_workout(state.store(), id).await?;

    Ok(Json(WorkoutResponse::from(workout)).into_response())
}

#[utoipa::path(
    post,
    path = "/workouts/",
    request_body = CreateWorkoutRequest,
    responses(
        (status = 201, description = "Workout created successfully", body = WorkoutResponse),
        (status = 404, description = "Athlete not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "workouts"
)]
pub async fn create_workout(
    State(state): State<AppState>,
    Json(req): Json<CreateWorkoutRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let workout = services::create_workout(state.store(), &req).await?;

    Ok((StatusCode::CREATED, Json(WorkoutResponse::from(workout))).into_response())
}

#[utoipa::path(
    patch,
    path = "/workouts/{id}",
    params(
        ("id" = i32, Path, description = "Workout id")
    ),
    request_body = UpdateWorkoutRequest,
    responses(
        (status = 200, description = "Workout updated successfully", body = WorkoutResponse),
        (status = 404, description = "Workout not found"),
        (status = 422, description = "Validation error")
    ),
    tag = "workouts"
)]
pub async fn update_workout(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(update_req): Json<UpdateWorkoutRequest>,
) -> WebResult<Response> {
    update_req.validate()?;

    let updated = services::update_workout(state.store(), id, &update_req).await?;

    Ok(Json(WorkoutResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/workouts/{id}",
    params(
        ("id" = i32, Path, description = "Workout id")
    ),
    responses(
        (status = 204, description = "Workout deleted successfully"),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn delete_workout(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> WebResult<Response> {
    services::delete_workout(state.store(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
