use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Connection budget for the assessment pipeline. Each request holds at most
/// one connection at a time across its two short writes (submission, then
/// recommendation), and the long LLM round-trip happens with no connection
/// checked out, so a small pool covers the workload.
const MAX_CONNECTIONS: u32 = 5;

/// Creates the PostgreSQL pool backing the assessment and recommendation tables.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to the assessment database...");

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await?;

    info!(
        max_connections = MAX_CONNECTIONS,
        "Assessment database pool ready"
    );
    Ok(pool)
}
