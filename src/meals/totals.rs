use sqlx::{Postgres, Transaction};
use tracing::debug;
use uuid::Uuid;

use crate::components::repo::FoodComponent;

/// Summed nutrition over a meal's current food component set.
///
/// A meal's denormalized total_* columns must always equal these sums; the
/// zero value (empty component set) is the `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NutritionTotals {
    pub calories: f64,
    pub fat: f64,
    pub protein: f64,
    pub carbs: f64,
    pub sugar: f64,
}

impl NutritionTotals {
    pub fn from_components<'a, I>(components: I) -> Self
    where
        I: IntoIterator<Item = &'a FoodComponent>,
    {
        components.into_iter().fold(Self::default(), |acc, c| Self {
            calories: acc.calories + c.total_calories,
            fat: acc.fat + c.fat,
            protein: acc.protein + c.protein,
            carbs: acc.carbs + c.carbs,
            sugar: acc.sugar + c.sugar,
        })
    }
}

/// Recomputes a meal's totals from its current food components and persists
/// them, all within the caller's transaction. Runs after every component
/// create, update or delete; if any statement fails the whole transaction
/// rolls back and the meal keeps its previous totals.
pub async fn recompute_meal_totals(
    tx: &mut Transaction<'_, Postgres>,
    meal_id: Uuid,
) -> anyhow::Result<NutritionTotals> {
    let components = FoodComponent::list_by_meal_tx(tx, meal_id).await?;
    let totals = NutritionTotals::from_components(&components);

    sqlx::query(
        r#"
        UPDATE meals
        SET total_calories = $2,
            total_fat = $3,
            total_protein = $4,
            total_carbs = $5,
            total_sugar = $6
        WHERE id = $1
        "#,
    )
    .bind(meal_id)
    .bind(totals.calories)
    .bind(totals.fat)
    .bind(totals.protein)
    .bind(totals.carbs)
    .bind(totals.sugar)
    .execute(&mut **tx)
    .await?;

    debug!(
        %meal_id,
        calories = totals.calories,
        components = components.len(),
        "meal totals recomputed"
    );
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn component(calories: f64, fat: f64, protein: f64, carbs: f64, sugar: f64) -> FoodComponent {
        FoodComponent {
            id: Uuid::new_v4(),
            meal_id: Uuid::new_v4(),
            food_name: "test".into(),
            brand: String::new(),
            weight: 100.0,
            fat,
            protein,
            carbs,
            sugar,
            total_calories: calories,
            micronutrients: serde_json::json!({}),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn empty_set_sums_to_zero() {
        let totals = NutritionTotals::from_components(&[]);
        assert_eq!(totals, NutritionTotals::default());
        assert_eq!(totals.calories, 0.0);
    }

    #[test]
    fn single_component_becomes_the_totals() {
        let totals = NutritionTotals::from_components(&[component(200.0, 10.0, 30.0, 0.0, 0.0)]);
        assert_eq!(totals.calories, 200.0);
        assert_eq!(totals.fat, 10.0);
        assert_eq!(totals.protein, 30.0);
        assert_eq!(totals.carbs, 0.0);
        assert_eq!(totals.sugar, 0.0);
    }

    #[test]
    fn updated_component_values_replace_the_totals() {
        // The same component after an edit: recomputation works from the
        // current set, so the new values land exactly.
        let totals = NutritionTotals::from_components(&[component(250.0, 12.0, 32.0, 5.0, 1.0)]);
        assert_eq!(totals.calories, 250.0);
        assert_eq!(totals.fat, 12.0);
        assert_eq!(totals.protein, 32.0);
        assert_eq!(totals.carbs, 5.0);
        assert_eq!(totals.sugar, 1.0);
    }

    #[test]
    fn totals_equal_field_wise_sums() {
        let set = vec![
            component(155.0, 11.0, 13.0, 1.1, 0.6),
            component(95.0, 0.3, 0.5, 25.0, 19.0),
            component(0.0, 0.0, 0.0, 0.0, 0.0),
        ];
        let totals = NutritionTotals::from_components(&set);
        assert_eq!(
            totals.calories,
            set.iter().map(|c| c.total_calories).sum::<f64>()
        );
        assert_eq!(totals.fat, set.iter().map(|c| c.fat).sum::<f64>());
        assert_eq!(totals.protein, set.iter().map(|c| c.protein).sum::<f64>());
        assert_eq!(totals.carbs, set.iter().map(|c| c.carbs).sum::<f64>());
        assert_eq!(totals.sugar, set.iter().map(|c| c.sugar).sum::<f64>());
    }

    #[test]
    fn summation_is_order_independent() {
        let a = component(155.0, 11.0, 13.0, 1.1, 0.6);
        let b = component(95.0, 0.3, 0.5, 25.0, 19.0);
        let forward = NutritionTotals::from_components(vec![&a, &b]);
        let backward = NutritionTotals::from_components(vec![&b, &a]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let set = vec![
            component(155.0, 11.0, 13.0, 1.1, 0.6),
            component(95.0, 0.3, 0.5, 25.0, 19.0),
        ];
        let first = NutritionTotals::from_components(&set);
        let second = NutritionTotals::from_components(&set);
        assert_eq!(first, second);
    }
}
