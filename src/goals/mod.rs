mod dto;
pub mod handlers;
mod parse;
pub mod repo;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::goals_routes())
}
