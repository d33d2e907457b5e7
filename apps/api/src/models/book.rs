use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single book as produced by the generative model, before assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedBook {
    pub title: String,
    pub author: String,
    /// Short 2-3 sentence summary
    pub summary: String,
    pub genres: Vec<String>,
    pub themes: Vec<String>,
    /// Estimated rating out of 5
    pub rating: f64,
}

/// The user-facing recommendation entity.
///
/// `cover_image` and `isbn` are empty when the list is assembled; covers are
/// filled in later, per entity, by cover enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Position in the generated list, unique within one response
    #[schema(example = 0)]
    pub id: usize,
    #[schema(example = "Dune")]
    pub title: String,
    #[schema(example = "Frank Herbert")]
    pub author: String,
    pub summary: String,
    #[serde(default)]
    pub cover_image: String,
    #[schema(example = json!(["Science Fiction", "Adventure"]))]
    pub genres: Vec<String>,
    pub themes: Vec<String>,
    #[schema(example = 4.5)]
    pub rating: f64,
    #[serde(default)]
    pub isbn: String,
    #[schema(example = "https://www.amazon.com/s?k=Dune%20Frank%20Herbert")]
    pub amazon_link: String,
    pub explanation: String,
}
