use std::sync::Arc;

use sqlx::PgPool;

use crate::assessment::store::RecommendationStore;
use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Outbound completion seam. Production: OpenRouterClient; tests swap doubles.
    pub completion: Arc<dyn CompletionClient>,
    /// Recommendation persistence seam backed by Postgres in production.
    pub store: Arc<dyn RecommendationStore>,
}
