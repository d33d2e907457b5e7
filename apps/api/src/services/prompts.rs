//! Prompt templates for every generation call.
//!
//! Placeholders are `{{name}}`; [`render`] substitutes them verbatim.

pub const RECOMMENDATIONS_PROMPT: &str = "You are an AI book recommendation expert. Based on the following user profile, generate a list of 10 unique and interesting book recommendations. Do not repeat books. For each book, provide a title, author, a short 2-3 sentence summary, a list of genres, key themes, and an estimated rating out of 5.

User Profile:
{{user_profile}}

Ensure the recommendations are tailored to the user's specific interests and desired tone.";

pub const ANALYZE_INTERESTS_PROMPT: &str = "You are an AI assistant designed to analyze user interests from free-form text.

Your goal is to identify the dominant themes and the desired tone expressed in the user's input.

Input: {{interests_text}}

Output the dominant themes as a list of strings and the desired tone as a single string.
The desired tone should be one of the following values: lighthearted, gritty, serious.";

pub const EXPLAIN_RECOMMENDATION_PROMPT: &str = "You are an AI book recommendation expert. A user has been recommended the book \"{{book_title}}\". Based on the following user profile:

{{user_profile}}

Explain why this book was recommended to the user. Focus on how the book aligns with their interests, favorite genres, and past behavior.";

/// Fill `{{name}}` placeholders in one pass over `template`.
///
/// Substituted values are never rescanned. Unknown placeholders are left as-is.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = &after[..end];
        match vars.iter().find(|(var, _)| *var == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push_str("{{");
                out.push_str(name);
                out.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_all_placeholders() {
        let prompt = render(
            EXPLAIN_RECOMMENDATION_PROMPT,
            &[("book_title", "Dune"), ("user_profile", "Selected Genres: Fantasy")],
        );
        assert!(prompt.contains("\"Dune\""));
        assert!(prompt.contains("Selected Genres: Fantasy"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_render_does_not_expand_substituted_values() {
        let prompt = render(
            "Book: {{book_title}} / Profile: {{user_profile}}",
            &[("book_title", "{{user_profile}}"), ("user_profile", "Horror fan")],
        );
        assert_eq!(prompt, "Book: {{user_profile}} / Profile: Horror fan");
    }

    #[test]
    fn test_render_leaves_unknown_and_unclosed_placeholders() {
        assert_eq!(render("{{missing}} and {{open", &[("x", "y")]), "{{missing}} and {{open");
    }

    #[test]
    fn test_recommendations_prompt_asks_for_ten_unique_books() {
        let prompt = render(RECOMMENDATIONS_PROMPT, &[("user_profile", "profile")]);
        assert!(prompt.contains("10 unique and interesting book recommendations"));
        assert!(prompt.contains("Do not repeat books"));
    }
}
