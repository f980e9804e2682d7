use std::time::Duration;

use anyhow::{Result, anyhow};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use bookwish_types::{Book, SearchField};

pub const DEFAULT_BASE_URL: &str = "https://openlibrary.org";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Most candidates returned for one search.
pub const MAX_RESULTS: usize = 8;

const UNKNOWN_TITLE: &str = "Unknown title";
const UNKNOWN_AUTHOR: &str = "Unknown author";

/// Best-effort client for the Open Library search endpoint.
///
/// Every failure (transport, status, decoding) degrades to an empty result.
/// There is no retry.
#[derive(Clone)]
pub struct BookLookup {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Vec<SearchDoc>,
}

#[derive(Debug, Deserialize)]
struct SearchDoc {
    title: Option<String>,
    #[serde(default)]
    author_name: Vec<String>,
}

impl BookLookup {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub async fn search(&self, query: &str, field: SearchField) -> Vec<Book> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        match self.try_search(query, field).await {
            Ok(books) => {
                debug!("Book search {}={:?}: {} results", field.as_param(), query, books.len());
                books
            }
            Err(e) => {
                warn!("Book search {}={:?} failed: {}", field.as_param(), query, e);
                Vec::new()
            }
        }
    }

    async fn try_search(&self, query: &str, field: SearchField) -> Result<Vec<Book>> {
        let resp = self
            .client
            .get(format!("{}/search.json", self.base_url))
            .query(&[(field.as_param(), query)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("catalog returned {}", status));
        }

        let body = resp.text().await?;
        parse_search_response(&body)
    }
}

/// Decode a catalog response into at most [`MAX_RESULTS`] books, filling
/// in placeholders for missing titles and authors.
pub fn parse_search_response(body: &str) -> Result<Vec<Book>> {
    let response: SearchResponse = serde_json::from_str(body)?;

    let books = response
        .docs
        .into_iter()
        .take(MAX_RESULTS)
        .map(|doc| Book {
            title: doc.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            author: doc
                .author_name
                .into_iter()
                .next()
                .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
        })
        .collect();

    Ok(books)
}
