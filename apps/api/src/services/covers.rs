use futures::future::join_all;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::Recommendation;

/// Shown when a book has no known cover.
pub const PLACEHOLDER_COVER_URL: &str = "https://placehold.co/300x450.png";

/// Later docs are never inspected, so they stay untyped.
#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Vec<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchDoc {
    cover_i: Option<i64>,
    isbn: Option<Vec<String>>,
}

/// Best-effort cover lookup against the Open Library catalog.
///
/// Lookups never fail: every problem on the way (network, status, body)
/// collapses into "no cover" and the caller falls back to a placeholder.
#[derive(Debug, Clone)]
pub struct CoverResolver {
    client: Client,
    search_url: String,
    covers_base_url: String,
}

impl CoverResolver {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.cover_timeout_secs))
            .build()
            .map_err(|e| ApiError::InternalError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            search_url: format!(
                "{}/search.json",
                config.catalog_base_url.trim_end_matches('/')
            ),
            covers_base_url: config.covers_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Look up a cover by title and author; `None` when nothing usable is found
    pub async fn resolve_cover(&self, title: &str, author: &str) -> Option<String> {
        if title.trim().is_empty() || author.trim().is_empty() {
            return None;
        }

        let response = match self
            .client
            .get(&self.search_url)
            .query(&[("title", title), ("author", author)])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Cover search failed for '{}' by {}: {}", title, author, e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(
                "Cover search for '{}' returned status {}",
                title,
                response.status()
            );
            return None;
        }

        let body: SearchResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Cover search for '{}' returned an unreadable body: {}", title, e);
                return None;
            }
        };

        let cover = self.cover_from_search(body);
        if cover.is_none() {
            debug!("No cover found for '{}' by {}", title, author);
        }
        cover
    }

    /// Cover URL for a known ISBN, or the placeholder. Makes no request.
    pub fn cover_for_isbn(&self, isbn: Option<&str>) -> String {
        match isbn.map(str::trim).filter(|i| !i.is_empty()) {
            Some(isbn) => self.isbn_url(isbn),
            None => PLACEHOLDER_COVER_URL.to_string(),
        }
    }

    /// Return `recommendation` with its cover filled in.
    pub async fn enrich(&self, recommendation: Recommendation) -> Recommendation {
        let cover_image = self
            .resolve_cover(&recommendation.title, &recommendation.author)
            .await
            .unwrap_or_else(|| PLACEHOLDER_COVER_URL.to_string());

        Recommendation {
            cover_image,
            ..recommendation
        }
    }

    /// Enrich several recommendations concurrently, keeping their order
    pub async fn enrich_all(&self, recommendations: Vec<Recommendation>) -> Vec<Recommendation> {
        join_all(recommendations.into_iter().map(|rec| self.enrich(rec))).await
    }

    fn cover_from_search(&self, body: SearchResponse) -> Option<String> {
        let first = body.docs.into_iter().next()?;
        let first: SearchDoc = match serde_json::from_value(first) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("Cover search returned an unreadable first doc: {}", e);
                return None;
            }
        };

        if let Some(id) = first.cover_i.filter(|id| *id != 0) {
            return Some(format!("{}/b/id/{}-L.jpg", self.covers_base_url, id));
        }

        first
            .isbn
            .as_ref()
            .and_then(|isbns| isbns.first())
            .filter(|isbn| !isbn.is_empty())
            .map(|isbn| self.isbn_url(isbn))
    }

    fn isbn_url(&self, isbn: &str) -> String {
        format!("{}/b/isbn/{}-L.jpg", self.covers_base_url, isbn)
    }
}
