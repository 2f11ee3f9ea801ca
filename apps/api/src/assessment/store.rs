use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::assessment::AssessmentRow;
use crate::models::recommendation::{CareerEntry, RecommendationRow};

/// Persists the assessment submission before the pipeline runs. The row is
/// never updated or rolled back — a downstream failure leaves it orphaned,
/// which is accepted.
pub async fn create_submission(
    pool: &PgPool,
    user_id: Uuid,
    answers: &Map<String, Value>,
) -> Result<AssessmentRow, AppError> {
    let row: AssessmentRow = sqlx::query_as(
        r#"
        INSERT INTO assessments (id, user_id, answers, submitted_at)
        VALUES ($1, $2, $3, now())
        RETURNING id, user_id, answers, submitted_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(Json(answers))
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Recommendation persistence seam. Append-only: `create` always inserts a
/// new row, and "current" means most recent by `created_at`.
#[async_trait]
pub trait RecommendationStore: Send + Sync {
    async fn create(
        &self,
        user_id: Uuid,
        assessment_id: Uuid,
        analysis: &str,
        careers: &[CareerEntry],
    ) -> Result<RecommendationRow, AppError>;

    /// Latest recommendation for the user, or `None` when they have not
    /// completed an assessment yet — a normal condition, not an error.
    async fn get_latest(&self, user_id: Uuid) -> Result<Option<RecommendationRow>, AppError>;
}

pub struct PgRecommendationStore {
    pool: PgPool,
}

impl PgRecommendationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecommendationStore for PgRecommendationStore {
    async fn create(
        &self,
        user_id: Uuid,
        assessment_id: Uuid,
        analysis: &str,
        careers: &[CareerEntry],
    ) -> Result<RecommendationRow, AppError> {
        let row: RecommendationRow = sqlx::query_as(
            r#"
            INSERT INTO recommendations (id, user_id, assessment_id, analysis, careers, created_at)
            VALUES ($1, $2, $3, $4, $5, now())
            RETURNING id, user_id, assessment_id, analysis, careers, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(assessment_id)
        .bind(analysis)
        .bind(Json(careers))
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn get_latest(&self, user_id: Uuid) -> Result<Option<RecommendationRow>, AppError> {
        let row: Option<RecommendationRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, assessment_id, analysis, careers, created_at
            FROM recommendations
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
