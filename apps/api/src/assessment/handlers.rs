use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::assessment::catalog::{Question, CATALOG};
use crate::assessment::pipeline::run_assessment;
use crate::assessment::store::create_submission;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::recommendation::CareerEntry;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub answers: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationBody {
    pub analysis: String,
    pub careers: Vec<CareerEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssessmentResponse {
    pub success: bool,
    pub assessment_id: Uuid,
    pub recommendations: RecommendationBody,
}

#[derive(Debug, Serialize)]
pub struct LatestRecommendationResponse {
    pub recommendations: RecommendationBody,
}

/// GET /api/v1/questions
/// Serves the question catalog so the UI consumes the single source of truth.
pub async fn handle_list_questions() -> Json<&'static [Question]> {
    Json(CATALOG)
}

/// POST /api/v1/assessments
///
/// Records the submission first, then runs the pipeline. A downstream
/// failure leaves the submission row in place by design.
pub async fn handle_submit_assessment(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(req): Json<SubmitAssessmentRequest>,
) -> Result<Json<SubmitAssessmentResponse>, AppError> {
    let submission = create_submission(&state.db, user_id, &req.answers).await?;

    let row = run_assessment(
        user_id,
        submission.id,
        &req.answers,
        state.completion.as_ref(),
        state.store.as_ref(),
    )
    .await?;

    Ok(Json(SubmitAssessmentResponse {
        success: true,
        assessment_id: submission.id,
        recommendations: RecommendationBody {
            analysis: row.analysis,
            careers: row.careers.0,
        },
    }))
}

/// GET /api/v1/recommendations
/// Latest recommendation for the authenticated user; 404 when none exists.
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<LatestRecommendationResponse>, AppError> {
    let row = state
        .store
        .get_latest(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No recommendations found".to_string()))?;

    Ok(Json(LatestRecommendationResponse {
        recommendations: RecommendationBody {
            analysis: row.analysis,
            careers: row.careers.0,
        },
    }))
}
