use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::jwt::AuthUser,
    error::{ApiError, ApiResult},
    goals::dto::UpdateGoalsRequest,
    goals::parse::parse_goals,
    goals::repo::UserGoals,
    state::AppState,
};

pub fn goals_routes() -> Router<AppState> {
    Router::new().route("/goals", get(get_goals).put(update_goals))
}

#[instrument(skip(state))]
pub async fn get_goals(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<UserGoals>> {
    let goals = UserGoals::find_by_user(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Goals not set".into()))?;
    Ok(Json(goals))
}

#[instrument(skip(state, payload))]
pub async fn update_goals(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpdateGoalsRequest>,
) -> ApiResult<Json<UserGoals>> {
    let input = payload.goals_input.trim();
    if input.is_empty() {
        return Err(ApiError::BadRequest("goals_input must not be empty".into()));
    }

    let targets = parse_goals(input);
    let goals = UserGoals::upsert(&state.db, user_id, targets, input).await?;

    info!(%user_id, "goals updated");
    Ok(Json(goals))
}
