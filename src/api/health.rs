use chrono::Utc;
use poem_openapi::{payload::Json, OpenApi, Tags};
use sea_orm::DatabaseConnection;

use crate::types::dto::common::HealthResponse;

/// Health check API
pub struct HealthApi {
    db: Option<DatabaseConnection>,
}

impl HealthApi {
    /// `db` is `None` when the catalog runs on the in-memory store
    pub fn new(db: Option<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// API tags for health endpoints
#[derive(Tags)]
enum ApiTags {
    /// Health check endpoints
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Reports service status and whether the catalog database answers a ping
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        let database = match &self.db {
            Some(db) => match db.ping().await {
                Ok(()) => "ok",
                Err(e) => {
                    tracing::warn!(error = %e, "Health check database ping failed");
                    "unreachable"
                }
            },
            None => "not_configured",
        };

        Json(HealthResponse {
            status: "healthy".to_string(),
            database: database.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
