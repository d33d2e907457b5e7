use serde_json::Value;

use super::{as_object, optional_string, required_string, string_array, SchemaViolation, ROOT};
use crate::models::UserProfileInput;

/// Minimum number of characters in the free-form interests text.
pub const MIN_INTERESTS_LEN: usize = 20;

/// Validate an onboarding submission.
///
/// Blank genre entries are dropped and duplicates removed (first occurrence
/// wins); at least one genre must remain.
pub fn validate_profile(value: &Value) -> Result<UserProfileInput, SchemaViolation> {
    let obj = as_object(value, ROOT)?;

    let mut genres: Vec<String> = Vec::new();
    for genre in string_array(obj, ROOT, "genres")? {
        let genre = genre.trim();
        if !genre.is_empty() && !genres.iter().any(|g| g == genre) {
            genres.push(genre.to_string());
        }
    }
    if genres.is_empty() {
        return Err(SchemaViolation::new(
            "genres",
            "must contain at least one genre",
        ));
    }

    let interests = required_string(obj, ROOT, "interests")?;
    let length = interests.chars().count();
    if length < MIN_INTERESTS_LEN {
        return Err(SchemaViolation::new(
            "interests",
            format!(
                "must be at least {} characters (got {})",
                MIN_INTERESTS_LEN, length
            ),
        ));
    }

    Ok(UserProfileInput {
        age: optional_string(obj, ROOT, "age")?,
        country: optional_string(obj, ROOT, "country")?,
        genres,
        interests,
        favorites: optional_string(obj, ROOT, "favorites")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_profile() {
        let profile = validate_profile(&json!({
            "age": "25-34",
            "genres": ["Fantasy", "Mystery"],
            "interests": "Slow-burn mysteries with unreliable narrators",
        }))
        .unwrap();

        assert_eq!(profile.genres, vec!["Fantasy", "Mystery"]);
        assert_eq!(profile.age.as_deref(), Some("25-34"));
        assert_eq!(profile.country, None);
        assert_eq!(profile.favorites, None);
    }

    #[test]
    fn test_genres_are_deduplicated_in_order() {
        let profile = validate_profile(&json!({
            "genres": ["Horror", "", "Fantasy", "Horror"],
            "interests": "Haunted houses and folk horror settings",
        }))
        .unwrap();

        assert_eq!(profile.genres, vec!["Horror", "Fantasy"]);
    }

    #[test]
    fn test_empty_genres_rejected() {
        let err = validate_profile(&json!({
            "genres": [],
            "interests": "Anything with dragons and long journeys",
        }))
        .unwrap_err();
        assert_eq!(err.field, "genres");

        let err = validate_profile(&json!({
            "genres": ["  "],
            "interests": "Anything with dragons and long journeys",
        }))
        .unwrap_err();
        assert_eq!(err.field, "genres");
    }

    #[test]
    fn test_missing_genres_rejected() {
        let err = validate_profile(&json!({
            "interests": "Anything with dragons and long journeys",
        }))
        .unwrap_err();
        assert_eq!(err, SchemaViolation::new("genres", "is required"));
    }

    #[test]
    fn test_short_interests_rejected() {
        let err = validate_profile(&json!({
            "genres": ["Romance"],
            "interests": "love stories",
        }))
        .unwrap_err();
        assert_eq!(err.field, "interests");
        assert!(err.expected.contains("at least 20"));
    }

    #[test]
    fn test_interests_length_counts_characters() {
        // 20 multi-byte characters
        let interests = "é".repeat(20);
        assert!(validate_profile(&json!({
            "genres": ["Romance"],
            "interests": interests,
        }))
        .is_ok());
    }

    #[test]
    fn test_optional_field_with_wrong_kind_rejected() {
        let err = validate_profile(&json!({
            "genres": ["Romance"],
            "interests": "Regency romances with witty banter",
            "country": 44,
        }))
        .unwrap_err();
        assert_eq!(err.field, "country");
    }

    #[test]
    fn test_non_object_rejected() {
        let err = validate_profile(&json!(["Fantasy"])).unwrap_err();
        assert_eq!(err.field, ROOT);
    }
}
