use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    components::repo::FoodComponent,
    error::{ApiError, ApiResult},
    meals::dto::{CreateMealRequest, MealDetails, MealListItem, Pagination, UpdateMealRequest},
    meals::repo::Meal,
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals))
        .route("/meals/:id", get(get_meal))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", post(create_meal))
        .route("/meals/:id", put(update_meal).delete(delete_meal))
}

#[instrument(skip(state))]
pub async fn list_meals(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(p): Query<Pagination>,
) -> ApiResult<Json<Vec<MealListItem>>> {
    let meals = Meal::list_by_user(&state.db, user_id, p.limit, p.offset).await?;
    Ok(Json(meals.into_iter().map(MealListItem::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<MealDetails>> {
    let meal = Meal::find_for_user(&state.db, user_id, id)
        .await?
        .ok_or_else(|| {
            warn!(%user_id, %id, "meal not found");
            ApiError::NotFound("Meal not found".into())
        })?;

    let components = FoodComponent::list_by_meal(&state.db, id).await?;
    Ok(Json(MealDetails::from_parts(meal, components)))
}

#[instrument(skip(state, payload))]
pub async fn create_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateMealRequest>,
) -> ApiResult<(StatusCode, Json<MealDetails>)> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::BadRequest("name must not be empty".into()));
    }

    let meal = Meal::create(
        &state.db,
        user_id,
        payload.name.trim(),
        payload.time_of_consumption,
        &payload.hunger_level,
        &payload.exercise,
    )
    .await?;

    info!(meal_id = %meal.id, %user_id, "meal created");
    Ok((
        StatusCode::CREATED,
        Json(MealDetails::from_parts(meal, Vec::new())),
    ))
}

#[instrument(skip(state, payload))]
pub async fn update_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMealRequest>,
) -> ApiResult<Json<MealDetails>> {
    if let Some(name) = &payload.name {
        if name.trim().is_empty() {
            return Err(ApiError::BadRequest("name must not be empty".into()));
        }
    }

    let meal = Meal::update_for_user(
        &state.db,
        user_id,
        id,
        payload.name.as_deref().map(str::trim),
        payload.time_of_consumption,
        payload.hunger_level.as_deref(),
        payload.exercise.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Meal not found".into()))?;

    let components = FoodComponent::list_by_meal(&state.db, id).await?;
    Ok(Json(MealDetails::from_parts(meal, components)))
}

#[instrument(skip(state))]
pub async fn delete_meal(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let deleted = Meal::delete_for_user(&state.db, user_id, id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Meal not found".into()));
    }
    info!(meal_id = %id, %user_id, "meal deleted");
    Ok(StatusCode::NO_CONTENT)
}
