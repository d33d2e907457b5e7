use serde_json::{json, Value};

use super::{
    as_object, kind_of, non_empty_string, required, required_number, required_string,
    string_array, SchemaViolation, ROOT,
};
use crate::models::{DesiredTone, GeneratedBook, InterestAnalysis};

/// Upper bound on the number of books accepted from one generation.
pub const MAX_RECOMMENDATIONS: usize = 10;

/// Response schema sent with a recommendation request.
pub fn recommendations_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "recommendations": {
                "type": "ARRAY",
                "description": "A list of 10 book recommendations.",
                "maxItems": MAX_RECOMMENDATIONS,
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING", "description": "The title of the recommended book." },
                        "author": { "type": "STRING", "description": "The author of the recommended book." },
                        "summary": { "type": "STRING", "description": "A short, compelling summary of the book (2-3 sentences)." },
                        "genres": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "A list of genres for the book." },
                        "themes": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "A list of key themes in the book." },
                        "rating": { "type": "NUMBER", "description": "An estimated rating for the book out of 5." }
                    },
                    "required": ["title", "author", "summary", "genres", "themes", "rating"]
                }
            }
        },
        "required": ["recommendations"]
    })
}

/// Response schema sent with an interest analysis request.
pub fn interest_analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "dominantThemes": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of dominant themes identified in the user's interests."
            },
            "desiredTone": {
                "type": "STRING",
                "enum": DesiredTone::ALL,
                "description": "The desired tone or mood expressed by the user."
            }
        },
        "required": ["dominantThemes", "desiredTone"]
    })
}

/// Response schema sent with an explanation request.
pub fn explanation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "explanation": {
                "type": "STRING",
                "description": "The explanation of why the book was recommended to the user."
            }
        },
        "required": ["explanation"]
    })
}

/// Validate the model's recommendation payload and type its items.
pub fn validate_recommendations(value: &Value) -> Result<Vec<GeneratedBook>, SchemaViolation> {
    let obj = as_object(value, ROOT)?;
    let list = required(obj, ROOT, "recommendations")?;
    let items = list.as_array().ok_or_else(|| {
        SchemaViolation::new(
            "recommendations",
            format!("must be an array (got {})", kind_of(list)),
        )
    })?;

    if items.len() > MAX_RECOMMENDATIONS {
        return Err(SchemaViolation::new(
            "recommendations",
            format!(
                "must contain at most {} items (got {})",
                MAX_RECOMMENDATIONS,
                items.len()
            ),
        ));
    }

    items
        .iter()
        .enumerate()
        .map(|(i, item)| validate_book(item, &format!("recommendations[{}]", i)))
        .collect()
}

fn validate_book(value: &Value, path: &str) -> Result<GeneratedBook, SchemaViolation> {
    let obj = as_object(value, path)?;

    Ok(GeneratedBook {
        title: required_string(obj, path, "title")?,
        author: required_string(obj, path, "author")?,
        summary: non_empty_string(obj, path, "summary")?,
        genres: string_array(obj, path, "genres")?,
        themes: string_array(obj, path, "themes")?,
        rating: required_number(obj, path, "rating")?,
    })
}

/// Validate the model's interest analysis payload.
pub fn validate_interest_analysis(value: &Value) -> Result<InterestAnalysis, SchemaViolation> {
    let obj = as_object(value, ROOT)?;
    let dominant_themes = string_array(obj, ROOT, "dominantThemes")?;
    let tone = required_string(obj, ROOT, "desiredTone")?;
    let desired_tone = DesiredTone::parse(&tone).ok_or_else(|| {
        SchemaViolation::new(
            "desiredTone",
            format!("must be one of {} (got {:?})", DesiredTone::ALL.join(", "), tone),
        )
    })?;

    Ok(InterestAnalysis {
        dominant_themes,
        desired_tone,
    })
}

/// Validate the model's explanation payload.
pub fn validate_explanation(value: &Value) -> Result<String, SchemaViolation> {
    let obj = as_object(value, ROOT)?;
    non_empty_string(obj, ROOT, "explanation")
}
