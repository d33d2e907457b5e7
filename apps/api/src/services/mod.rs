pub mod assembler;
pub mod covers;
pub mod generator;
pub mod llm;
pub mod profile_compiler;
pub mod prompts;
pub mod recommendation;

// Re-export public types
pub use covers::CoverResolver;
pub use generator::RecommendationGenerator;
pub use llm::{GeminiClient, GenerationError, GenerativeModel};
pub use recommendation::RecommendationService;
