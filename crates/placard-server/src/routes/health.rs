use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
}

/// Liveness probe. Does not touch the browser.
pub async fn health_check() -> Json<Health> {
    Json(Health { status: "ok" })
}
