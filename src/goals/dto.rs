use serde::Deserialize;

/// Free-text goals description, e.g. "lose fat, keep protein high".
#[derive(Debug, Deserialize)]
pub struct UpdateGoalsRequest {
    pub goals_input: String,
}
