use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};

use crate::clients::models::requests::{NewMealLog, NewWorkoutLog};
use crate::clients::models::responses::{MealLog, WorkoutLog};
use crate::error::ApiError;

use super::AppState;
use super::plans::{authenticate_request, parse_body};

const LOG_PAGE_SIZE: u32 = 50;

pub async fn list_meal_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<MealLog>>, ApiError> {
    authenticate_request(&headers, &state)?;

    let logs = state
        .store_client
        .recent_meal_logs(&user_id, LOG_PAGE_SIZE)
        .await
        .inspect_err(|e| tracing::error!(error = %e, %user_id, "failed to fetch meal logs"))?;

    tracing::debug!(%user_id, count = logs.len(), "meal_logs.fetched");
    Ok(Json(logs))
}

pub async fn create_meal_log(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<MealLog>), ApiError> {
    authenticate_request(&headers, &state)?;

    let mut log: NewMealLog = parse_body(&body)?;
    log.user_id = user_id.clone();

    let stored = state
        .store_client
        .insert_meal_log(&log)
        .await
        .inspect_err(|e| tracing::error!(error = %e, %user_id, "failed to insert meal log"))?;

    tracing::info!(%user_id, meal_log_id = %stored.id, "meal_log.created");
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn delete_meal_log(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((user_id, id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    authenticate_request(&headers, &state)?;

    state
        .store_client
        .delete_meal_log(&user_id, &id)
        .await
        .inspect_err(|e| tracing::error!(error = %e, %user_id, meal_log_id = %id, "failed to delete meal log"))?;

    tracing::info!(%user_id, meal_log_id = %id, "meal_log.deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_workout_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<WorkoutLog>>, ApiError> {
    authenticate_request(&headers, &state)?;

    let logs = state
        .store_client
        .recent_workout_logs(&user_id, LOG_PAGE_SIZE)
        .await
        .inspect_err(|e| tracing::error!(error = %e, %user_id, "failed to fetch workout logs"))?;

    tracing::debug!(%user_id, count = logs.len(), "workout_logs.fetched");
    Ok(Json(logs))
}

pub async fn create_workout_log(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<WorkoutLog>), ApiError> {
    authenticate_request(&headers, &state)?;

    let mut log: NewWorkoutLog = parse_body(&body)?;
    log.user_id = user_id.clone();

    let stored = state
        .store_client
        .insert_workout_log(&log)
        .await
        .inspect_err(|e| tracing::error!(error = %e, %user_id, "failed to insert workout log"))?;

    tracing::info!(%user_id, workout_log_id = %stored.id, "workout_log.created");
    Ok((StatusCode::CREATED, Json(stored)))
}
