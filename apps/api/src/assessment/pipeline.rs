use serde_json::{Map, Value};
use tracing::info;
use uuid::Uuid;

use crate::assessment::format::format_answers;
use crate::assessment::parse::parse_recommendation;
use crate::assessment::prompts::{build_assessment_prompt, COUNSELOR_SYSTEM};
use crate::assessment::store::RecommendationStore;
use crate::errors::AppError;
use crate::llm_client::{CompletionClient, CompletionRequest};
use crate::models::recommendation::RecommendationRow;

/// Runs the assessment-to-recommendation pipeline for one submission:
/// format answers → build prompt → one completion call → parse/validate →
/// persist. Any stage failure aborts the remaining stages; nothing partial
/// reaches the store. The submission row itself is created by the caller
/// before this runs and is not rolled back on failure.
pub async fn run_assessment(
    user_id: Uuid,
    assessment_id: Uuid,
    answers: &Map<String, Value>,
    client: &dyn CompletionClient,
    store: &dyn RecommendationStore,
) -> Result<RecommendationRow, AppError> {
    let pairs = format_answers(answers)?;

    let request = CompletionRequest {
        system: COUNSELOR_SYSTEM.to_string(),
        user: build_assessment_prompt(&pairs),
    };

    let raw = client.send(&request).await?;
    let payload = parse_recommendation(&raw)?;

    let row = store
        .create(user_id, assessment_id, &payload.analysis, &payload.careers)
        .await?;

    info!(
        user_id = %user_id,
        assessment_id = %assessment_id,
        careers = row.careers.0.len(),
        "Recommendation created"
    );

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use serde_json::json;
    use sqlx::types::Json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use crate::llm_client::LlmError;
    use crate::models::recommendation::CareerEntry;

    const VALID_RESPONSE: &str = r#"{"analysis":"Analytical profile.","careers":[{"title":"Software Engineer","industry":"Tech","description":"Builds systems.","skills":["Coding"],"qualifications":["Degree"],"salaryRange":{"entry":"$60k","mid":"$90k","senior":"$140k"},"growth":"IC track.","matchReason":"Fits interests.","nextSteps":["Learn X"],"challenges":"Pace.","relatedCareers":["Data Analyst"]}]}"#;

    struct RecordingClient {
        calls: AtomicUsize,
        response: String,
    }

    impl RecordingClient {
        fn returning(response: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                response: response.to_string(),
            }
        }
    }

    #[async_trait]
    impl CompletionClient for RecordingClient {
        async fn send(&self, _request: &CompletionRequest) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    struct MemoryStore {
        creates: AtomicUsize,
        rows: Mutex<Vec<RecommendationRow>>,
    }

    impl MemoryStore {
        fn new() -> Self {
            Self {
                creates: AtomicUsize::new(0),
                rows: Mutex::new(Vec::new()),
            }
        }

        fn row_at(
            user_id: Uuid,
            analysis: &str,
            created_at: DateTime<Utc>,
        ) -> RecommendationRow {
            RecommendationRow {
                id: Uuid::new_v4(),
                user_id,
                assessment_id: Uuid::new_v4(),
                analysis: analysis.to_string(),
                careers: Json(Vec::new()),
                created_at,
            }
        }
    }

    #[async_trait]
    impl RecommendationStore for MemoryStore {
        async fn create(
            &self,
            user_id: Uuid,
            assessment_id: Uuid,
            analysis: &str,
            careers: &[CareerEntry],
        ) -> Result<RecommendationRow, AppError> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            let row = RecommendationRow {
                id: Uuid::new_v4(),
                user_id,
                assessment_id,
                analysis: analysis.to_string(),
                careers: Json(careers.to_vec()),
                created_at: Utc::now(),
            };
            self.rows.lock().unwrap().push(row.clone());
            Ok(row)
        }

        async fn get_latest(&self, user_id: Uuid) -> Result<Option<RecommendationRow>, AppError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .filter(|r| r.user_id == user_id)
                .max_by_key(|r| r.created_at)
                .cloned())
        }
    }

    fn answers(entries: &[(&str, Value)]) -> Map<String, Value> {
        let mut map = Map::new();
        for (k, v) in entries {
            map.insert(k.to_string(), v.clone());
        }
        map
    }

    #[tokio::test]
    async fn test_happy_path_persists_one_recommendation() {
        let client = RecordingClient::returning(VALID_RESPONSE);
        let store = MemoryStore::new();
        let map = answers(&[("1", json!(["Technology and Innovation"])), ("2", json!("Remote work"))]);

        let row = run_assessment(Uuid::new_v4(), Uuid::new_v4(), &map, &client, &store)
            .await
            .unwrap();

        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.creates.load(Ordering::SeqCst), 1);
        assert_eq!(row.careers.0.len(), 1);
        assert_eq!(row.careers.0[0].title, "Software Engineer");
    }

    #[tokio::test]
    async fn test_unknown_question_id_fails_before_any_completion_call() {
        let client = RecordingClient::returning(VALID_RESPONSE);
        let store = MemoryStore::new();
        let map = answers(&[("99", json!("Anything"))]);

        let err = run_assessment(Uuid::new_v4(), Uuid::new_v4(), &map, &client, &store)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::MissingQuestion(ref id) if id == "99"));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.creates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_schema_violation_never_reaches_store() {
        let client = RecordingClient::returning(r#"{"analysis":"ok"}"#);
        let store = MemoryStore::new();
        let map = answers(&[("2", json!("Remote work"))]);

        let err = run_assessment(Uuid::new_v4(), Uuid::new_v4(), &map, &client, &store)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ModelResponse(_)));
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.creates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_get_latest_returns_later_of_two_recommendations() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();
        let earlier = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        {
            let mut rows = store.rows.lock().unwrap();
            rows.push(MemoryStore::row_at(user_id, "first", earlier));
            rows.push(MemoryStore::row_at(user_id, "second", later));
        }

        let latest = store.get_latest(user_id).await.unwrap().unwrap();
        assert_eq!(latest.analysis, "second");
        assert_eq!(latest.created_at, later);
    }

    #[tokio::test]
    async fn test_get_latest_empty_for_unknown_user() {
        let store = MemoryStore::new();
        assert!(store.get_latest(Uuid::new_v4()).await.unwrap().is_none());
    }
}
