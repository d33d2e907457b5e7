use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use book::{GeneratedBook, Recommendation};
pub use profile::{UserProfileInput, GENRES};

mod book;
mod profile;

/// Response structure for book recommendations
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecommendationResponse {
    /// Recommendations in the order the model produced them
    pub recommendations: Vec<Recommendation>,
}

/// Request to enrich already-assembled recommendations with cover art
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EnrichRequest {
    pub recommendations: Vec<Recommendation>,
}

/// Request for a personalized explanation of one recommendation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExplainRequest {
    #[schema(example = "Dune")]
    pub book_title: String,
    /// Compiled user profile the recommendation was made for
    pub user_profile: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExplanationResponse {
    pub explanation: String,
}

/// Request to analyze free-form interest text
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeInterestsRequest {
    #[schema(example = "I love cozy mysteries set in small English villages")]
    pub interests_text: String,
}

/// Tone a reader is looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DesiredTone {
    Lighthearted,
    Gritty,
    Serious,
}

impl DesiredTone {
    pub const ALL: [&'static str; 3] = ["lighthearted", "gritty", "serious"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "lighthearted" => Some(Self::Lighthearted),
            "gritty" => Some(Self::Gritty),
            "serious" => Some(Self::Serious),
            _ => None,
        }
    }
}

/// Structured analysis of a reader's interests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InterestAnalysis {
    #[schema(example = json!(["small towns", "amateur sleuths"]))]
    pub dominant_themes: Vec<String>,
    pub desired_tone: DesiredTone,
}

/// Query parameters for a title/author cover lookup
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CoverSearchParams {
    pub title: String,
    pub author: String,
}

/// Query parameters for an ISBN cover lookup
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct IsbnParams {
    pub isbn: Option<String>,
}

/// Resolved cover URL; `null` when no cover was found
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoverResponse {
    #[schema(example = "https://covers.openlibrary.org/b/id/12345-L.jpg")]
    pub cover_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenresResponse {
    pub genres: Vec<String>,
}

/// Health check response structure
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    /// Current timestamp in RFC3339 format
    #[schema(example = "2024-01-15T10:30:00Z")]
    pub timestamp: String,
}

/// Error response structure
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Invalid input: field `genres` must contain at least one genre")]
    pub error: String,
}
