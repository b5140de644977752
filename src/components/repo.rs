use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use time::OffsetDateTime;
use uuid::Uuid;

/// One ingredient/item within a meal, with its own nutrition values.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FoodComponent {
    pub id: Uuid,
    pub meal_id: Uuid,
    pub food_name: String,
    pub brand: String,
    pub weight: f64,
    pub fat: f64,
    pub protein: f64,
    pub carbs: f64,
    pub sugar: f64,
    pub total_calories: f64,
    pub micronutrients: serde_json::Value,
    pub created_at: OffsetDateTime,
}

const COMPONENT_COLUMNS: &str = "id, meal_id, food_name, brand, weight, fat, protein, carbs, \
     sugar, total_calories, micronutrients, created_at";

pub struct NewFoodComponent<'a> {
    pub food_name: &'a str,
    pub brand: &'a str,
    pub weight: f64,
    pub fat: f64,
    pub protein: f64,
    pub carbs: f64,
    pub sugar: f64,
    pub total_calories: f64,
    pub micronutrients: serde_json::Value,
}

pub struct FoodComponentPatch<'a> {
    pub food_name: Option<&'a str>,
    pub brand: Option<&'a str>,
    pub weight: Option<f64>,
    pub fat: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub sugar: Option<f64>,
    pub total_calories: Option<f64>,
    pub micronutrients: Option<serde_json::Value>,
}

impl FoodComponent {
    pub async fn list_by_meal(db: &PgPool, meal_id: Uuid) -> anyhow::Result<Vec<FoodComponent>> {
        let rows = sqlx::query_as::<_, FoodComponent>(&format!(
            r#"
            SELECT {COMPONENT_COLUMNS}
            FROM food_components
            WHERE meal_id = $1
            ORDER BY created_at ASC
            "#,
        ))
        .bind(meal_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn list_by_meal_tx(
        tx: &mut Transaction<'_, Postgres>,
        meal_id: Uuid,
    ) -> anyhow::Result<Vec<FoodComponent>> {
        let rows = sqlx::query_as::<_, FoodComponent>(&format!(
            r#"
            SELECT {COMPONENT_COLUMNS}
            FROM food_components
            WHERE meal_id = $1
            ORDER BY created_at ASC
            "#,
        ))
        .bind(meal_id)
        .fetch_all(&mut **tx)
        .await?;
        Ok(rows)
    }

    pub async fn create(
        tx: &mut Transaction<'_, Postgres>,
        meal_id: Uuid,
        new: NewFoodComponent<'_>,
    ) -> anyhow::Result<FoodComponent> {
        let component = sqlx::query_as::<_, FoodComponent>(&format!(
            r#"
            INSERT INTO food_components
                (meal_id, food_name, brand, weight, fat, protein, carbs, sugar,
                 total_calories, micronutrients)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {COMPONENT_COLUMNS}
            "#,
        ))
        .bind(meal_id)
        .bind(new.food_name)
        .bind(new.brand)
        .bind(new.weight)
        .bind(new.fat)
        .bind(new.protein)
        .bind(new.carbs)
        .bind(new.sugar)
        .bind(new.total_calories)
        .bind(new.micronutrients)
        .fetch_one(&mut **tx)
        .await?;
        Ok(component)
    }

    /// Partial update, scoped to the owning user through the meal join.
    pub async fn update_for_user(
        tx: &mut Transaction<'_, Postgres>,
        user_id: Uuid,
        component_id: Uuid,
        patch: FoodComponentPatch<'_>,
    ) -> anyhow::Result<Option<FoodComponent>> {
        let component = sqlx::query_as::<_, FoodComponent>(
            r#"
            UPDATE food_components c
            SET food_name = COALESCE($3, c.food_name),
                brand = COALESCE($4, c.brand),
                weight = COALESCE($5, c.weight),
                fat = COALESCE($6, c.fat),
                protein = COALESCE($7, c.protein),
                carbs = COALESCE($8, c.carbs),
                sugar = COALESCE($9, c.sugar),
                total_calories = COALESCE($10, c.total_calories),
                micronutrients = COALESCE($11, c.micronutrients)
            FROM meals m
            WHERE c.id = $1 AND m.id = c.meal_id AND m.user_id = $2
            RETURNING c.id, c.meal_id, c.food_name, c.brand, c.weight, c.fat, c.protein,
                      c.carbs, c.sugar, c.total_calories, c.micronutrients, c.created_at
            "#,
        )
        .bind(component_id)
        .bind(user_id)
        .bind(patch.food_name)
        .bind(patch.brand)
        .bind(patch.weight)
        .bind(patch.fat)
        .bind(patch.protein)
        .bind(patch.carbs)
        .bind(patch.sugar)
        .bind(patch.total_calories)
        .bind(patch.micronutrients)
        .fetch_optional(&mut **tx)
        .await?;
        Ok(component)
    }

    /// Deletes the component and returns the owning meal's id for the
    /// follow-up total recomputation.
    pub async fn delete_for_user(
        tx: &mut Transaction<'_, Postgres>,
        user_id: Uuid,
        component_id: Uuid,
    ) -> anyhow::Result<Option<Uuid>> {
        let row: Option<(Uuid,)> = sqlx::query_as(
            r#"
            DELETE FROM food_components c
            USING meals m
            WHERE c.id = $1 AND m.id = c.meal_id AND m.user_id = $2
            RETURNING c.meal_id
            "#,
        )
        .bind(component_id)
        .bind(user_id)
        .fetch_optional(&mut **tx)
        .await?;
        Ok(row.map(|(meal_id,)| meal_id))
    }
}
