use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Salary figures for one career across seniority levels. All three levels
/// are hard-required: a career entry without them fails validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalaryRange {
    pub entry: String,
    pub mid: String,
    pub senior: String,
}

/// One recommended occupation within a Recommendation.
///
/// Required fields (`title`, `description`, `skills`, `salary_range`) reject
/// the whole document when absent; the rest default to empty. Unknown extra
/// fields from the model are ignored. This leniency boundary is deliberate —
/// do not tighten or loosen it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CareerEntry {
    pub title: String,
    #[serde(default)]
    pub industry: String,
    pub description: String,
    pub skills: Vec<String>,
    #[serde(default)]
    pub qualifications: Vec<String>,
    pub salary_range: SalaryRange,
    #[serde(default)]
    pub growth: String,
    #[serde(default)]
    pub match_reason: String,
    #[serde(default)]
    pub next_steps: Vec<String>,
    #[serde(default)]
    pub challenges: String,
    #[serde(default)]
    pub related_careers: Vec<String>,
}

/// Validated model output in its pre-persistence shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationPayload {
    pub analysis: String,
    pub careers: Vec<CareerEntry>,
}

/// A persisted recommendation. Append-only: one row per successful
/// submission, many rows per user over time; "current" is the most recent
/// by `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecommendationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub assessment_id: Uuid,
    pub analysis: String,
    pub careers: Json<Vec<CareerEntry>>,
    pub created_at: DateTime<Utc>,
}
