use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::components::repo::FoodComponent;
use crate::meals::repo::Meal;

#[derive(Debug, Deserialize)]
pub struct CreateMealRequest {
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub time_of_consumption: OffsetDateTime,
    #[serde(default)]
    pub hunger_level: String,
    #[serde(default)]
    pub exercise: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMealRequest {
    pub name: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub time_of_consumption: Option<OffsetDateTime>,
    pub hunger_level: Option<String>,
    pub exercise: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MealListItem {
    pub id: Uuid,
    pub name: String,
    pub time_of_consumption: OffsetDateTime,
    pub total_calories: f64,
    pub created_at: OffsetDateTime,
}

impl From<Meal> for MealListItem {
    fn from(m: Meal) -> Self {
        Self {
            id: m.id,
            name: m.name,
            time_of_consumption: m.time_of_consumption,
            total_calories: m.total_calories,
            created_at: m.created_at,
        }
    }
}

/// Full meal view: descriptive fields, derived totals and the current
/// component set.
#[derive(Debug, Serialize)]
pub struct MealDetails {
    pub id: Uuid,
    pub name: String,
    pub time_of_consumption: OffsetDateTime,
    pub hunger_level: String,
    pub exercise: String,
    pub total_calories: f64,
    pub total_fat: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_sugar: f64,
    pub created_at: OffsetDateTime,
    pub components: Vec<FoodComponent>,
}

impl MealDetails {
    pub fn from_parts(m: Meal, components: Vec<FoodComponent>) -> Self {
        Self {
            id: m.id,
            name: m.name,
            time_of_consumption: m.time_of_consumption,
            hunger_level: m.hunger_level,
            exercise: m.exercise,
            total_calories: m.total_calories,
            total_fat: m.total_fat,
            total_protein: m.total_protein,
            total_carbs: m.total_carbs,
            total_sugar: m.total_sugar,
            created_at: m.created_at,
            components,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}
fn default_limit() -> i64 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_meal_request_parses_rfc3339() {
        let req: CreateMealRequest = serde_json::from_str(
            r#"{"name":"Breakfast","time_of_consumption":"2024-07-28T08:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(req.name, "Breakfast");
        assert_eq!(req.time_of_consumption.year(), 2024);
        assert!(req.hunger_level.is_empty());
        assert!(req.exercise.is_empty());
    }

    #[test]
    fn update_meal_request_fields_are_optional() {
        let req: UpdateMealRequest = serde_json::from_str(r#"{"name":"Lunch"}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("Lunch"));
        assert!(req.time_of_consumption.is_none());
        assert!(req.hunger_level.is_none());
    }

    #[test]
    fn pagination_defaults() {
        let p: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(p.limit, 20);
        assert_eq!(p.offset, 0);
    }
}
