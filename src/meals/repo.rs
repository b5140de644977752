use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Meal record. The five total_* columns are derived from the meal's food
/// components and are never written directly by handlers; see
/// [`crate::meals::totals::recompute_meal_totals`].
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Meal {
    pub id: Uuid,
    pub user_id: Uuid,
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
}

const MEAL_COLUMNS: &str = "id, user_id, name, time_of_consumption, hunger_level, exercise, \
     total_calories, total_fat, total_protein, total_carbs, total_sugar, created_at";

impl Meal {
    pub async fn list_by_user(
        db: &PgPool,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> anyhow::Result<Vec<Meal>> {
        let rows = sqlx::query_as::<_, Meal>(&format!(
            r#"
            SELECT {MEAL_COLUMNS}
            FROM meals
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

    pub async fn find_for_user(
        db: &PgPool,
        user_id: Uuid,
        meal_id: Uuid,
    ) -> anyhow::Result<Option<Meal>> {
        let meal = sqlx::query_as::<_, Meal>(&format!(
            r#"
            SELECT {MEAL_COLUMNS}
            FROM meals
            WHERE id = $1 AND user_id = $2
            "#,
        ))
        .bind(meal_id)
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(meal)
    }

    /// New meals start with all totals at zero (no components yet).
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        name: &str,
        time_of_consumption: OffsetDateTime,
        hunger_level: &str,
        exercise: &str,
    ) -> anyhow::Result<Meal> {
        let meal = sqlx::query_as::<_, Meal>(&format!(
            r#"
            INSERT INTO meals (user_id, name, time_of_consumption, hunger_level, exercise)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {MEAL_COLUMNS}
            "#,
        ))
        .bind(user_id)
        .bind(name)
        .bind(time_of_consumption)
        .bind(hunger_level)
        .bind(exercise)
        .fetch_one(db)
        .await?;
        Ok(meal)
    }

    /// Partial update of the descriptive fields only; totals stay derived.
    pub async fn update_for_user(
        db: &PgPool,
        user_id: Uuid,
        meal_id: Uuid,
        name: Option<&str>,
        time_of_consumption: Option<OffsetDateTime>,
        hunger_level: Option<&str>,
        exercise: Option<&str>,
    ) -> anyhow::Result<Option<Meal>> {
        let meal = sqlx::query_as::<_, Meal>(&format!(
            r#"
            UPDATE meals
            SET name = COALESCE($3, name),
                time_of_consumption = COALESCE($4, time_of_consumption),
                hunger_level = COALESCE($5, hunger_level),
                exercise = COALESCE($6, exercise)
            WHERE id = $1 AND user_id = $2
            RETURNING {MEAL_COLUMNS}
            "#,
        ))
        .bind(meal_id)
        .bind(user_id)
        .bind(name)
        .bind(time_of_consumption)
        .bind(hunger_level)
        .bind(exercise)
        .fetch_optional(db)
        .await?;
        Ok(meal)
    }

    /// Ownership check used by component writes, inside their transaction.
    pub async fn exists_for_user(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        user_id: Uuid,
        meal_id: Uuid,
    ) -> anyhow::Result<bool> {
        let row: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM meals WHERE id = $1 AND user_id = $2")
                .bind(meal_id)
                .bind(user_id)
                .fetch_optional(&mut **tx)
                .await?;
        Ok(row.is_some())
    }

    pub async fn delete_for_user(
        db: &PgPool,
        user_id: Uuid,
        meal_id: Uuid,
    ) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM meals WHERE id = $1 AND user_id = $2")
            .bind(meal_id)
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
