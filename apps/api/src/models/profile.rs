use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Genres offered by the onboarding form.
pub const GENRES: [&str; 12] = [
    "Fantasy",
    "Science Fiction",
    "Mystery",
    "Thriller",
    "Romance",
    "Historical Fiction",
    "Horror",
    "Biography",
    "Non-Fiction",
    "Literary Fiction",
    "Adventure",
    "Dystopian",
];

/// Onboarding answers describing a reader's tastes.
///
/// Values of this type only come out of `schema::validate_profile`, so
/// `genres` is non-empty and duplicate-free and `interests` is long enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfileInput {
    /// Age range, e.g. "25-34"
    #[schema(example = "25-34")]
    pub age: Option<String>,
    #[schema(example = "Canada")]
    pub country: Option<String>,
    /// At least one genre
    #[schema(example = json!(["Science Fiction", "Fantasy"]))]
    pub genres: Vec<String>,
    /// Free-form description, at least 20 characters
    #[schema(example = "Sprawling space operas with political intrigue and ecology")]
    pub interests: String,
    #[schema(example = "Ursula K. Le Guin, The Expanse")]
    pub favorites: Option<String>,
}
