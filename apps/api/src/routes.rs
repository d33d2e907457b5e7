use actix_web::{web, HttpResponse, Scope};
use utoipa::OpenApi;

use crate::app::ApiDoc;
use crate::handlers::{
    analyze_interests, covers_config, health_check, list_genres, recommendations_config,
};

/// Configure all routes for the API
pub fn api_routes() -> Scope {
    web::scope("/api")
        .service(health_check)
        .service(list_genres)
        .service(analyze_interests)
        .configure(recommendations_config)
        .configure(covers_config)
}

/// Configure OpenAPI documentation JSON endpoint
pub fn openapi_route() -> actix_web::Resource {
    web::resource("/api-docs/openapi.json")
        .route(web::get().to(|| async { HttpResponse::Ok().json(ApiDoc::openapi()) }))
}
