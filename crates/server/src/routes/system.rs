use actix_web::{get, HttpResponse};
use chrono::{SecondsFormat, Utc};

use crate::types::HealthResponse;

/// Liveness probe
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
