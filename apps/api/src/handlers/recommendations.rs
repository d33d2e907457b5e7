use crate::{
    error::{ApiError, Result},
    models::{
        ErrorResponse, ExplainRequest, ExplanationResponse, RecommendationResponse,
        UserProfileInput,
    },
    services::{RecommendationGenerator, RecommendationService},
};
use actix_web::{
    web::{self, Json},
    HttpResponse,
};
use serde_json::Value;

pub fn recommendations_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/recommendations").route(web::post().to(get_recommendations)))
        .service(
            web::resource("/recommendations/explain")
                .route(web::post().to(explain_recommendation)),
        );
}

/// Get book recommendations
///
/// Validates the onboarding answers, compiles them into a reader profile and asks
/// the generative model for up to 10 books. Covers are resolved separately per book.
#[utoipa::path(
    post,
    path = "/api/recommendations",
    tag = "Recommendations",
    request_body = UserProfileInput,
    responses(
        (status = 200, description = "Recommendations in model order, without covers", body = RecommendationResponse),
        (status = 400, description = "Profile failed validation", body = ErrorResponse),
        (status = 502, description = "Generation failed or returned invalid output", body = ErrorResponse),
    )
)]
pub async fn get_recommendations(
    payload: Json<Value>,
    recommendation_service: web::Data<RecommendationService>,
) -> Result<HttpResponse> {
    let recommendations = recommendation_service
        .get_recommendations(&payload)
        .await?;

    Ok(HttpResponse::Ok().json(RecommendationResponse { recommendations }))
}

/// Explain why a book suits a reader
#[utoipa::path(
    post,
    path = "/api/recommendations/explain",
    tag = "Recommendations",
    request_body = ExplainRequest,
    responses(
        (status = 200, description = "Personalized explanation", body = ExplanationResponse),
        (status = 400, description = "Missing title or profile", body = ErrorResponse),
        (status = 502, description = "Generation failed", body = ErrorResponse),
    )
)]
pub async fn explain_recommendation(
    request: Json<ExplainRequest>,
    generator: web::Data<RecommendationGenerator>,
) -> Result<HttpResponse> {
    if request.book_title.trim().is_empty() {
        return Err(ApiError::InvalidInput("bookTitle cannot be empty".to_string()));
    }
    if request.user_profile.trim().is_empty() {
        return Err(ApiError::InvalidInput("userProfile cannot be empty".to_string()));
    }

    let explanation = generator
        .explain(&request.book_title, &request.user_profile)
        .await?;

    Ok(HttpResponse::Ok().json(ExplanationResponse { explanation }))
}
