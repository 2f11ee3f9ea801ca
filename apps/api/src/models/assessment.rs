use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// One completed questionnaire, captured before any AI processing occurs.
/// Created once per submission and never mutated afterwards. The row survives
/// even when downstream recommendation generation fails.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssessmentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Raw answer map exactly as submitted: question id → selected option(s).
    pub answers: Json<Map<String, Value>>,
    pub submitted_at: DateTime<Utc>,
}
