use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::models::{GeneratedBook, InterestAnalysis};
use crate::schema;
use crate::services::llm::{GenerationError, GenerativeModel};
use crate::services::prompts::{
    render, ANALYZE_INTERESTS_PROMPT, EXPLAIN_RECOMMENDATION_PROMPT, RECOMMENDATIONS_PROMPT,
};

type GenerationResult<T> = std::result::Result<T, GenerationError>;

/// Turns prompts into validated, typed model output.
///
/// Every method makes exactly one model call and never retries; the model's
/// answer is checked against its schema before anything is returned.
#[derive(Clone)]
pub struct RecommendationGenerator {
    model: Arc<dyn GenerativeModel>,
}

impl RecommendationGenerator {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Generate up to ten book recommendations for a compiled profile
    pub async fn generate(&self, profile: &str) -> GenerationResult<Vec<GeneratedBook>> {
        let prompt = render(RECOMMENDATIONS_PROMPT, &[("user_profile", profile)]);
        debug!("Recommendation prompt:\n{}", prompt);

        let raw = self
            .model
            .generate_json(&prompt, &schema::recommendations_schema())
            .await?;

        let books = schema::validate_recommendations(&raw).map_err(|violation| {
            warn!("Rejected model output: {}", violation);
            GenerationError::Schema(violation)
        })?;

        info!("Model produced {} recommendations", books.len());
        Ok(books)
    }

    /// Extract dominant themes and the desired tone from free-form text
    pub async fn analyze_interests(&self, interests_text: &str) -> GenerationResult<InterestAnalysis> {
        let prompt = render(ANALYZE_INTERESTS_PROMPT, &[("interests_text", interests_text)]);

        let raw = self
            .model
            .generate_json(&prompt, &schema::interest_analysis_schema())
            .await?;

        Ok(schema::validate_interest_analysis(&raw)?)
    }

    /// Explain why `book_title` suits the reader described by `user_profile`
    pub async fn explain(&self, book_title: &str, user_profile: &str) -> GenerationResult<String> {
        let prompt = render(
            EXPLAIN_RECOMMENDATION_PROMPT,
            &[("book_title", book_title), ("user_profile", user_profile)],
        );

        let raw = self
            .model
            .generate_json(&prompt, &schema::explanation_schema())
            .await?;

        Ok(schema::validate_explanation(&raw)?)
    }
}
