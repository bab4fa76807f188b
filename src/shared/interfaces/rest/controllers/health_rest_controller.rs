use axum::{Json, Router, routing::get};
use chrono::Utc;

use crate::shared::interfaces::rest::resources::health_resource::HealthResource;

pub fn router() -> Router {
    Router::new().route("/api/health", get(health_check))
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResource))
)]
pub async fn health_check() -> Json<HealthResource> {
    Json(HealthResource {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
