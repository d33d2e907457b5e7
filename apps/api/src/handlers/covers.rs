use crate::{
    error::{ApiError, Result},
    models::{
        CoverResponse, CoverSearchParams, EnrichRequest, ErrorResponse, IsbnParams,
        RecommendationResponse,
    },
    schema::MAX_RECOMMENDATIONS,
    services::CoverResolver,
};
use actix_web::{get, post, web, HttpResponse};

/// Look up a cover by title and author
///
/// A miss is a normal answer (`coverUrl: null`), never an error.
#[utoipa::path(
    get,
    path = "/api/covers/search",
    tag = "Covers",
    params(
        ("title" = String, Query, description = "Book title"),
        ("author" = String, Query, description = "Book author")
    ),
    responses(
        (status = 200, description = "Cover URL or null", body = CoverResponse)
    )
)]
#[get("/search")]
pub async fn search_cover(
    params: web::Query<CoverSearchParams>,
    covers: web::Data<CoverResolver>,
) -> HttpResponse {
    let cover_url = covers.resolve_cover(&params.title, &params.author).await;
    HttpResponse::Ok().json(CoverResponse { cover_url })
}

/// Build a cover URL from an ISBN without contacting the catalog
#[utoipa::path(
    get,
    path = "/api/covers/isbn",
    tag = "Covers",
    params(
        ("isbn" = Option<String>, Query, description = "10 or 13 digit ISBN")
    ),
    responses(
        (status = 200, description = "ISBN cover URL, or the placeholder when no ISBN is given", body = CoverResponse)
    )
)]
#[get("/isbn")]
pub async fn isbn_cover(
    params: web::Query<IsbnParams>,
    covers: web::Data<CoverResolver>,
) -> HttpResponse {
    HttpResponse::Ok().json(CoverResponse {
        cover_url: Some(covers.cover_for_isbn(params.isbn.as_deref())),
    })
}

/// Fill in covers for a list of recommendations
///
/// Accepts at most one response's worth of recommendations.
#[utoipa::path(
    post,
    path = "/api/covers/enrich",
    tag = "Covers",
    request_body = EnrichRequest,
    responses(
        (status = 200, description = "Same recommendations with coverImage set", body = RecommendationResponse),
        (status = 400, description = "Too many recommendations", body = ErrorResponse)
    )
)]
#[post("/enrich")]
pub async fn enrich_covers(
    request: web::Json<EnrichRequest>,
    covers: web::Data<CoverResolver>,
) -> Result<HttpResponse> {
    let recommendations = request.into_inner().recommendations;
    if recommendations.len() > MAX_RECOMMENDATIONS {
        return Err(ApiError::InvalidInput(format!(
            "recommendations must contain at most {} items, got {}",
            MAX_RECOMMENDATIONS,
            recommendations.len()
        )));
    }

    let recommendations = covers.enrich_all(recommendations).await;
    Ok(HttpResponse::Ok().json(RecommendationResponse { recommendations }))
}

pub fn covers_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/covers")
            .service(search_cover)
            .service(isbn_cover)
            .service(enrich_covers),
    );
}
