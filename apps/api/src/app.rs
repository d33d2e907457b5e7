use crate::{
    config::Config,
    error::Result,
    handlers, models,
    routes::{api_routes, openapi_route},
    services::{CoverResolver, GeminiClient, RecommendationGenerator, RecommendationService},
};
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use log::info;
use std::net::TcpListener;
use std::sync::Arc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health_check,
        handlers::health::list_genres,
        handlers::recommendations::get_recommendations,
        handlers::recommendations::explain_recommendation,
        handlers::interests::analyze_interests,
        handlers::covers::search_cover,
        handlers::covers::isbn_cover,
        handlers::covers::enrich_covers,
    ),
    components(schemas(
        models::UserProfileInput,
        models::Recommendation,
        models::GeneratedBook,
        models::RecommendationResponse,
        models::EnrichRequest,
        models::ExplainRequest,
        models::ExplanationResponse,
        models::AnalyzeInterestsRequest,
        models::InterestAnalysis,
        models::DesiredTone,
        models::CoverResponse,
        models::GenresResponse,
        models::HealthResponse,
        models::ErrorResponse,
    )),
    tags(
        (name = "Recommendations", description = "Generated book recommendations"),
        (name = "Covers", description = "Best-effort cover art lookup"),
        (name = "Onboarding", description = "Reader profile helpers"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

pub struct Application {
    port: u16,
    host: String,
    config: Config,
}

impl Application {
    /// Create a new application instance
    pub fn new(config: &Config) -> Self {
        Self {
            port: config.port,
            host: config.host.clone(),
            config: config.clone(),
        }
    }

    /// Build and run the server
    pub async fn run(&self) -> Result<()> {
        let listener = TcpListener::bind((self.host.as_str(), self.port))?;
        info!("Starting server at http://{}:{}", self.host, self.port);

        self.run_with_listener(listener).await
    }

    /// Run the server with a specific TCP listener
    /// This is useful for testing where we want to use a random port
    pub async fn run_with_listener(&self, listener: TcpListener) -> Result<()> {
        let model = GeminiClient::new(&self.config)
            .context("Failed to initialize generative model client")?;
        let generator = RecommendationGenerator::new(Arc::new(model));
        let covers =
            CoverResolver::new(&self.config).context("Failed to initialize cover resolver")?;

        let recommendation_service =
            web::Data::new(RecommendationService::new(generator.clone()));
        let generator = web::Data::new(generator);
        let covers = web::Data::new(covers);

        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header();

            App::new()
                .wrap(cors)
                .wrap(Logger::default())
                .app_data(recommendation_service.clone())
                .app_data(generator.clone())
                .app_data(covers.clone())
                .service(api_routes())
                .service(openapi_route())
        })
        .listen(listener)?
        .run()
        .await?;

        Ok(())
    }
}
