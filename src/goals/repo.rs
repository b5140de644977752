use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::goals::parse::GoalTargets;

/// Per-user nutrition goals, one row per user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserGoals {
    pub user_id: Uuid,
    pub fat_goal: f64,
    pub carb_goal: f64,
    pub protein_goal: f64,
    pub calorie_goal: f64,
    pub goals_input: String,
    pub updated_at: OffsetDateTime,
}

const GOALS_COLUMNS: &str =
    "user_id, fat_goal, carb_goal, protein_goal, calorie_goal, goals_input, updated_at";

impl UserGoals {
    pub async fn find_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<UserGoals>> {
        let row = sqlx::query_as::<_, UserGoals>(&format!(
            r#"
            SELECT {GOALS_COLUMNS}
            FROM user_goals
            WHERE user_id = $1
            "#,
        ))
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn upsert(
        db: &PgPool,
        user_id: Uuid,
        targets: GoalTargets,
        goals_input: &str,
    ) -> anyhow::Result<UserGoals> {
        let row = sqlx::query_as::<_, UserGoals>(&format!(
            r#"
            INSERT INTO user_goals (user_id, fat_goal, carb_goal, protein_goal, calorie_goal, goals_input)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id) DO UPDATE
            SET fat_goal = EXCLUDED.fat_goal,
                carb_goal = EXCLUDED.carb_goal,
                protein_goal = EXCLUDED.protein_goal,
                calorie_goal = EXCLUDED.calorie_goal,
                goals_input = EXCLUDED.goals_input,
                updated_at = now()
            RETURNING {GOALS_COLUMNS}
            "#,
        ))
        .bind(user_id)
        .bind(targets.fat_goal)
        .bind(targets.carb_goal)
        .bind(targets.protein_goal)
        .bind(targets.calorie_goal)
        .bind(goals_input)
        .fetch_one(db)
        .await?;
        Ok(row)
    }
}
