use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    error::{ApiError, ApiResult},
    history::dto::{CreateHistoricalMealRequest, UpdateHistoricalMealRequest},
    history::repo::HistoricalMeal,
    meals::dto::Pagination,
    state::AppState,
};

pub fn history_routes() -> Router<AppState> {
    Router::new()
        .route("/history", get(list_history).post(create_historical_meal))
        .route(
            "/history/:id",
            put(update_historical_meal).delete(delete_historical_meal),
        )
}

#[instrument(skip(state))]
pub async fn list_history(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(p): Query<Pagination>,
) -> ApiResult<Json<Vec<HistoricalMeal>>> {
    let rows = HistoricalMeal::list_by_user(&state.db, user_id, p.limit, p.offset).await?;
    Ok(Json(rows))
}

#[instrument(skip(state, payload))]
pub async fn create_historical_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateHistoricalMealRequest>,
) -> ApiResult<(StatusCode, Json<HistoricalMeal>)> {
    if payload.meal_name.trim().is_empty() {
        return Err(ApiError::BadRequest("meal_name must not be empty".into()));
    }
    if !payload.food_components.is_array() {
        return Err(ApiError::BadRequest("food_components must be a list".into()));
    }

    let row = HistoricalMeal::create(
        &state.db,
        user_id,
        payload.meal_name.trim(),
        payload.food_components,
        payload.brand_preferences,
    )
    .await?;

    info!(historical_id = %row.id, %user_id, "historical meal created");
    Ok((StatusCode::CREATED, Json(row)))
}

#[instrument(skip(state, payload))]
pub async fn update_historical_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateHistoricalMealRequest>,
) -> ApiResult<Json<HistoricalMeal>> {
    if let Some(components) = &payload.food_components {
        if !components.is_array() {
            return Err(ApiError::BadRequest("food_components must be a list".into()));
        }
    }

    let row = HistoricalMeal::update_for_user(
        &state.db,
        user_id,
        id,
        payload.meal_name.as_deref().map(str::trim),
        payload.food_components,
        payload.brand_preferences,
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Historical meal not found".into()))?;

    Ok(Json(row))
}

#[instrument(skip(state))]
pub async fn delete_historical_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let deleted = HistoricalMeal::delete_for_user(&state.db, user_id, id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Historical meal not found".into()));
    }
    info!(historical_id = %id, %user_id, "historical meal deleted");
    Ok(StatusCode::NO_CONTENT)
}
