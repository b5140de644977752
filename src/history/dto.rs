use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateHistoricalMealRequest {
    pub meal_name: String,
    #[serde(default = "empty_list")]
    pub food_components: serde_json::Value,
    #[serde(default = "empty_object")]
    pub brand_preferences: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct UpdateHistoricalMealRequest {
    pub meal_name: Option<String>,
    pub food_components: Option<serde_json::Value>,
    pub brand_preferences: Option<serde_json::Value>,
}

fn empty_list() -> serde_json::Value {
    serde_json::json!([])
}

fn empty_object() -> serde_json::Value {
    serde_json::json!({})
}
