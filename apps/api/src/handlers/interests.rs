use crate::{
    error::{ApiError, Result},
    models::{AnalyzeInterestsRequest, ErrorResponse, InterestAnalysis},
    services::RecommendationGenerator,
};
use actix_web::{post, web, HttpResponse};

/// Analyze free-form interest text into themes and tone
#[utoipa::path(
    post,
    path = "/api/interests/analyze",
    tag = "Onboarding",
    request_body = AnalyzeInterestsRequest,
    responses(
        (status = 200, description = "Dominant themes and desired tone", body = InterestAnalysis),
        (status = 400, description = "Empty text", body = ErrorResponse),
        (status = 502, description = "Generation failed", body = ErrorResponse),
    )
)]
#[post("/interests/analyze")]
pub async fn analyze_interests(
    request: web::Json<AnalyzeInterestsRequest>,
    generator: web::Data<RecommendationGenerator>,
) -> Result<HttpResponse> {
    if request.interests_text.trim().is_empty() {
        return Err(ApiError::InvalidInput(
            "interestsText cannot be empty".to_string(),
        ));
    }

    let analysis = generator.analyze_interests(&request.interests_text).await?;
    Ok(HttpResponse::Ok().json(analysis))
}
