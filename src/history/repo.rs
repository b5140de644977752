use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Denormalized snapshot of a past meal. Food components are embedded as
/// JSON, not relational rows; the record's lifecycle is independent of live
/// meals.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HistoricalMeal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub meal_name: String,
    pub food_components: serde_json::Value,
    pub brand_preferences: serde_json::Value,
    pub created_at: OffsetDateTime,
}

const HISTORY_COLUMNS: &str =
    "id, user_id, meal_name, food_components, brand_preferences, created_at";

impl HistoricalMeal {
    pub async fn list_by_user(
        db: &PgPool,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> anyhow::Result<Vec<HistoricalMeal>> {
        let rows = sqlx::query_as::<_, HistoricalMeal>(&format!(
            r#"
            SELECT {HISTORY_COLUMNS}
            FROM historical_meals
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        ))
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        meal_name: &str,
        food_components: serde_json::Value,
        brand_preferences: serde_json::Value,
    ) -> anyhow::Result<HistoricalMeal> {
        let row = sqlx::query_as::<_, HistoricalMeal>(&format!(
            r#"
            INSERT INTO historical_meals (user_id, meal_name, food_components, brand_preferences)
            VALUES ($1, $2, $3, $4)
            RETURNING {HISTORY_COLUMNS}
            "#,
        ))
        .bind(user_id)
        .bind(meal_name)
        .bind(food_components)
        .bind(brand_preferences)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    pub async fn update_for_user(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
        meal_name: Option<&str>,
        food_components: Option<serde_json::Value>,
        brand_preferences: Option<serde_json::Value>,
    ) -> anyhow::Result<Option<HistoricalMeal>> {
        let row = sqlx::query_as::<_, HistoricalMeal>(&format!(
            r#"
            UPDATE historical_meals
            SET meal_name = COALESCE($3, meal_name),
                food_components = COALESCE($4, food_components),
                brand_preferences = COALESCE($5, brand_preferences)
            WHERE id = $1 AND user_id = $2
            RETURNING {HISTORY_COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(user_id)
        .bind(meal_name)
        .bind(food_components)
        .bind(brand_preferences)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn delete_for_user(db: &PgPool, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM historical_meals WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
