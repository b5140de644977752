use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    components::dto::{ComponentResponse, CreateComponentRequest, UpdateComponentRequest},
    components::repo::{FoodComponent, FoodComponentPatch, NewFoodComponent},
    error::{ApiError, ApiResult},
    meals::repo::Meal,
    meals::totals::recompute_meal_totals,
    state::AppState,
};

pub fn meal_component_routes() -> Router<AppState> {
    Router::new().route("/meals/:id/components", post(create_component))
}

pub fn component_routes() -> Router<AppState> {
    Router::new().route(
        "/components/:id",
        put(update_component).delete(delete_component),
    )
}

/// Creates a component and recomputes the meal's totals in one transaction.
/// If anything fails the transaction rolls back and the meal keeps its
/// previous totals.
#[instrument(skip(state, payload))]
pub async fn create_component(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(meal_id): Path<Uuid>,
    Json(payload): Json<CreateComponentRequest>,
) -> ApiResult<(StatusCode, Json<ComponentResponse>)> {
    if payload.food_name.trim().is_empty() {
        return Err(ApiError::BadRequest("food_name must not be empty".into()));
    }

    let mut tx = state.db.begin().await?;

    if !Meal::exists_for_user(&mut tx, user_id, meal_id).await? {
        warn!(%user_id, %meal_id, "meal not found for component create");
        return Err(ApiError::NotFound("Meal not found".into()));
    }

    let component = FoodComponent::create(
        &mut tx,
        meal_id,
        NewFoodComponent {
            food_name: payload.food_name.trim(),
            brand: &payload.brand,
            weight: payload.weight,
            fat: payload.fat,
            protein: payload.protein,
            carbs: payload.carbs,
            sugar: payload.sugar,
            total_calories: payload.total_calories,
            micronutrients: payload.micronutrients,
        },
    )
    .await?;

    let totals = recompute_meal_totals(&mut tx, meal_id).await?;
    tx.commit().await?;

    info!(component_id = %component.id, %meal_id, %user_id, "food component created");
    Ok((
        StatusCode::CREATED,
        Json(ComponentResponse {
            component,
            meal_totals: totals.into(),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn update_component(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateComponentRequest>,
) -> ApiResult<Json<ComponentResponse>> {
    if let Some(name) = &payload.food_name {
        if name.trim().is_empty() {
            return Err(ApiError::BadRequest("food_name must not be empty".into()));
        }
    }

    let mut tx = state.db.begin().await?;

    let component = FoodComponent::update_for_user(
        &mut tx,
        user_id,
        id,
        FoodComponentPatch {
            food_name: payload.food_name.as_deref().map(str::trim),
            brand: payload.brand.as_deref(),
            weight: payload.weight,
            fat: payload.fat,
            protein: payload.protein,
            carbs: payload.carbs,
            sugar: payload.sugar,
            total_calories: payload.total_calories,
            micronutrients: payload.micronutrients,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Food component not found".into()))?;

    let totals = recompute_meal_totals(&mut tx, component.meal_id).await?;
    tx.commit().await?;

    info!(component_id = %id, meal_id = %component.meal_id, %user_id, "food component updated");
    Ok(Json(ComponentResponse {
        component,
        meal_totals: totals.into(),
    }))
}

#[instrument(skip(state))]
pub async fn delete_component(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let mut tx = state.db.begin().await?;

    let meal_id = FoodComponent::delete_for_user(&mut tx, user_id, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Food component not found".into()))?;

    recompute_meal_totals(&mut tx, meal_id).await?;
    tx.commit().await?;

    info!(component_id = %id, %meal_id, %user_id, "food component deleted");
    Ok(StatusCode::NO_CONTENT)
}
