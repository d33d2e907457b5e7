use crate::models::UserProfileInput;

/// Render onboarding answers as the free-text profile embedded in prompts.
///
/// Age and country are collected by the form but not forwarded here.
pub fn compile_profile(input: &UserProfileInput) -> String {
    let favorites = input
        .favorites
        .as_deref()
        .filter(|f| !f.is_empty())
        .unwrap_or("None");

    format!(
        "Selected Genres: {}\nUser Interests: {}\nFavorite Books/Authors Mentioned: {}",
        input.genres.join(", "),
        input.interests,
        favorites
    )
}
