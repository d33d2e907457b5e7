use actix_web::{get, HttpResponse};

use crate::models::{GenresResponse, HealthResponse, GENRES};

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "System",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// List the genres offered by the onboarding form
#[utoipa::path(
    get,
    path = "/api/genres",
    tag = "Onboarding",
    responses(
        (status = 200, description = "Selectable genres", body = GenresResponse)
    )
)]
#[get("/genres")]
pub async fn list_genres() -> HttpResponse {
    HttpResponse::Ok().json(GenresResponse {
        genres: GENRES.iter().map(|g| g.to_string()).collect(),
    })
}
