use serde_json::Value;
use tracing::{error, info};

use crate::error::Result;
use crate::models::{Recommendation, UserProfileInput};
use crate::schema;
use crate::services::assembler::assemble;
use crate::services::generator::RecommendationGenerator;
use crate::services::profile_compiler::compile_profile;

/// Entry point from the presentation layer: onboarding answers in,
/// cover-less recommendations out.
#[derive(Clone)]
pub struct RecommendationService {
    generator: RecommendationGenerator,
}

impl RecommendationService {
    pub fn new(generator: RecommendationGenerator) -> Self {
        Self { generator }
    }

    /// Validate a raw onboarding submission and recommend books for it.
    ///
    /// All-or-nothing: a validation or generation failure yields no list.
    pub async fn get_recommendations(&self, payload: &Value) -> Result<Vec<Recommendation>> {
        let input = schema::validate_profile(payload)?;
        self.recommend(&input).await
    }

    /// Recommend books for an already validated profile
    pub async fn recommend(&self, input: &UserProfileInput) -> Result<Vec<Recommendation>> {
        let profile = compile_profile(input);
        info!(
            "Generating recommendations for genres: {}",
            input.genres.join(", ")
        );

        let books = self.generator.generate(&profile).await.map_err(|e| {
            error!("Recommendation generation failed: {}", e);
            e
        })?;

        Ok(assemble(&books))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::services::llm::{GenerationError, GenerativeModel};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingModel {
        calls: AtomicUsize,
        answer: Value,
    }

    #[async_trait]
    impl GenerativeModel for CountingModel {
        async fn generate_json(
            &self,
            _prompt: &str,
            _response_schema: &Value,
        ) -> std::result::Result<Value, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.answer.clone())
        }
    }

    fn service(answer: Value) -> (RecommendationService, Arc<CountingModel>) {
        let model = Arc::new(CountingModel {
            calls: AtomicUsize::new(0),
            answer,
        });
        let service = RecommendationService::new(RecommendationGenerator::new(model.clone()));
        (service, model)
    }

    fn payload() -> Value {
        json!({
            "genres": ["Fantasy"],
            "interests": "Morally grey characters and heist plots",
        })
    }

    #[tokio::test]
    async fn test_full_pipeline() {
        let (service, model) = service(json!({
            "recommendations": [{
                "title": "Six of Crows",
                "author": "Leigh Bardugo",
                "summary": "A crew attempts an impossible heist.",
                "genres": ["Fantasy", "Young Adult"],
                "themes": ["loyalty"],
                "rating": 4.5
            }]
        }));

        let recommendations = service.get_recommendations(&payload()).await.unwrap();

        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].id, 0);
        assert_eq!(
            recommendations[0].explanation,
            "This book is recommended based on your interest in Fantasy and Young Adult."
        );
        assert_eq!(recommendations[0].cover_image, "");
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_model() {
        let (service, model) = service(json!({ "recommendations": [] }));

        let err = service
            .get_recommendations(&json!({ "genres": [], "interests": "too short" }))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_nonconforming_output_is_a_generation_error() {
        let (service, _) = service(json!({ "recommendations": "none" }));

        let err = service.get_recommendations(&payload()).await.unwrap_err();

        assert!(matches!(
            err,
            ApiError::Generation(GenerationError::Schema(_))
        ));
    }
}
