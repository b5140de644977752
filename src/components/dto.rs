use serde::{Deserialize, Serialize};

use crate::components::repo::FoodComponent;
use crate::meals::totals::NutritionTotals;

#[derive(Debug, Deserialize)]
pub struct CreateComponentRequest {
    pub food_name: String,
    #[serde(default)]
    pub brand: String,
    pub weight: f64,
    pub fat: f64,
    pub protein: f64,
    pub carbs: f64,
    pub sugar: f64,
    pub total_calories: f64,
    #[serde(default = "empty_object")]
    pub micronutrients: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct UpdateComponentRequest {
    pub food_name: Option<String>,
    pub brand: Option<String>,
    pub weight: Option<f64>,
    pub fat: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub sugar: Option<f64>,
    pub total_calories: Option<f64>,
    pub micronutrients: Option<serde_json::Value>,
}

fn empty_object() -> serde_json::Value {
    serde_json::json!({})
}

/// Component write result: the row itself plus the meal totals it produced.
#[derive(Debug, Serialize)]
pub struct ComponentResponse {
    #[serde(flatten)]
    pub component: FoodComponent,
    pub meal_totals: MealTotals,
}

#[derive(Debug, Serialize)]
pub struct MealTotals {
    pub total_calories: f64,
    pub total_fat: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_sugar: f64,
}

impl From<NutritionTotals> for MealTotals {
    fn from(t: NutritionTotals) -> Self {
        Self {
            total_calories: t.calories,
            total_fat: t.fat,
            total_protein: t.protein,
            total_carbs: t.carbs,
            total_sugar: t.sugar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_component_defaults_brand_and_micronutrients() {
        let req: CreateComponentRequest = serde_json::from_str(
            r#"{"food_name":"Eggs","weight":120.0,"fat":11.0,"protein":13.0,
                "carbs":1.1,"sugar":0.6,"total_calories":155.0}"#,
        )
        .unwrap();
        assert_eq!(req.food_name, "Eggs");
        assert!(req.brand.is_empty());
        assert_eq!(req.micronutrients, serde_json::json!({}));
    }

    #[test]
    fn update_component_all_fields_optional() {
        let req: UpdateComponentRequest = serde_json::from_str("{}").unwrap();
        assert!(req.food_name.is_none());
        assert!(req.total_calories.is_none());
        assert!(req.micronutrients.is_none());
    }
}
