use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::{GeneratedBook, Recommendation};

pub const AMAZON_SEARCH_URL: &str = "https://www.amazon.com/s?k=";

/// Characters a browser's `encodeURIComponent` leaves as-is.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Map generated books to recommendations, keeping the model's order.
///
/// Ids are list positions, so they are only meaningful within one response.
pub fn assemble(books: &[GeneratedBook]) -> Vec<Recommendation> {
    books
        .iter()
        .enumerate()
        .map(|(index, book)| Recommendation {
            id: index,
            title: book.title.clone(),
            author: book.author.clone(),
            summary: book.summary.clone(),
            cover_image: String::new(),
            genres: book.genres.clone(),
            themes: book.themes.clone(),
            rating: book.rating,
            isbn: String::new(),
            amazon_link: amazon_link(&book.title, &book.author),
            explanation: generic_explanation(&book.genres),
        })
        .collect()
}

/// Marketplace search link for a title/author pair
pub fn amazon_link(title: &str, author: &str) -> String {
    format!(
        "{}{}",
        AMAZON_SEARCH_URL,
        utf8_percent_encode(&format!("{} {}", title, author), COMPONENT)
    )
}

fn generic_explanation(genres: &[String]) -> String {
    format!(
        "This book is recommended based on your interest in {}.",
        genres.join(" and ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, author: &str, genres: &[&str]) -> GeneratedBook {
        GeneratedBook {
            title: title.to_string(),
            author: author.to_string(),
            summary: "A summary.".to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            themes: vec!["survival".to_string()],
            rating: 4.2,
        }
    }

    #[test]
    fn test_ids_follow_input_order() {
        let books: Vec<GeneratedBook> = (0..7)
            .map(|i| book(&format!("Book {}", i), "Author", &["Fantasy"]))
            .collect();

        let recommendations = assemble(&books);

        assert_eq!(recommendations.len(), 7);
        for (i, rec) in recommendations.iter().enumerate() {
            assert_eq!(rec.id, i);
            assert_eq!(rec.title, format!("Book {}", i));
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(assemble(&[]).is_empty());
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let books = vec![
            book("Dune", "Frank Herbert", &["Science Fiction"]),
            book("Rebecca", "Daphne du Maurier", &["Mystery", "Romance"]),
        ];
        assert_eq!(assemble(&books), assemble(&books));
    }

    #[test]
    fn test_derived_fields() {
        let rec = assemble(&[book("Rebecca", "Daphne du Maurier", &["Mystery", "Romance"])])
            .remove(0);

        assert_eq!(
            rec.explanation,
            "This book is recommended based on your interest in Mystery and Romance."
        );
        assert_eq!(rec.cover_image, "");
        assert_eq!(rec.isbn, "");
        assert_eq!(rec.rating, 4.2);
        assert_eq!(rec.themes, vec!["survival"]);
    }

    #[test]
    fn test_amazon_link_is_percent_encoded() {
        assert_eq!(
            amazon_link("Dune", "Frank Herbert"),
            "https://www.amazon.com/s?k=Dune%20Frank%20Herbert"
        );
        assert_eq!(
            amazon_link("Cat's Cradle", "Kurt Vonnegut & Co"),
            "https://www.amazon.com/s?k=Cat's%20Cradle%20Kurt%20Vonnegut%20%26%20Co"
        );
    }

    #[test]
    fn test_amazon_link_keeps_component_safe_punctuation() {
        assert_eq!(
            amazon_link("Ender's Game", "Orson Scott Card"),
            "https://www.amazon.com/s?k=Ender's%20Game%20Orson%20Scott%20Card"
        );
        assert_eq!(
            amazon_link("Wait! (A Novel)*", "Jo-Ann_B. ~Smith"),
            "https://www.amazon.com/s?k=Wait!%20(A%20Novel)*%20Jo-Ann_B.%20~Smith"
        );
        assert_eq!(
            amazon_link("Cien años", "García Márquez/Ed?#"),
            "https://www.amazon.com/s?k=Cien%20a%C3%B1os%20Garc%C3%ADa%20M%C3%A1rquez%2FEd%3F%23"
        );
    }

    #[test]
    fn test_recommendation_serializes_camel_case() {
        let rec = assemble(&[book("Dune", "Frank Herbert", &["Science Fiction"])]).remove(0);
        let value = serde_json::to_value(&rec).unwrap();

        assert_eq!(value["id"], 0);
        assert_eq!(value["coverImage"], "");
        assert_eq!(
            value["amazonLink"],
            "https://www.amazon.com/s?k=Dune%20Frank%20Herbert"
        );
    }
}
