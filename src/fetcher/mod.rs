mod types;

pub use types::{ArticleFields, ArticleResult, SearchEnvelope, SearchResponse};

use reqwest::blocking::Client;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Content API returned status {status} for page {page}")]
    BadStatus { status: u16, page: u32 },
}

/// An externally-fetched article: the unit the chunker consumes.
///
/// Immutable once fetched; the chunker owns it transiently.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Unique source identifier assigned by the content API
    pub id: String,
    /// Full article body text
    pub body_text: String,
    /// Publication timestamp as reported by the API
    pub publication_date: String,
}

/// Paged client for a Guardian-style content API.
pub struct ArticleFetcher {
    http: Client,
    base_url: String,
    api_key: String,
    section: String,
    page_size: u32,
}

impl ArticleFetcher {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        section: impl Into<String>,
        page_size: u32,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            section: section.into(),
            page_size,
        }
    }

    /// Fetch up to `max_pages` pages of articles, newest first.
    ///
    /// A transport error or non-success status on page N stops the loop and
    /// keeps the documents collected so far; completeness degrades, the run
    /// does not abort. Articles without body text are skipped with a logged
    /// reason.
    pub fn fetch_documents(&self, max_pages: u32) -> Vec<Document> {
        let mut documents = Vec::new();

        for page in 1..=max_pages {
            let results = match self.fetch_page(page) {
                Ok(results) => results,
                Err(err) => {
                    tracing::warn!(page, error = %err, "stopping fetch, keeping collected pages");
                    break;
                }
            };

            for article in results {
                if chrono::DateTime::parse_from_rfc3339(&article.web_publication_date).is_err() {
                    tracing::warn!(id = %article.id, "publication date is not RFC 3339");
                }

                match article.fields.and_then(|f| f.body_text) {
                    Some(body_text) => documents.push(Document {
                        id: article.id,
                        body_text,
                        publication_date: article.web_publication_date,
                    }),
                    None => {
                        tracing::warn!(id = %article.id, "skipping article without body text");
                    }
                }
            }

            tracing::info!(page, collected = documents.len(), "completed page");
        }

        documents
    }

    fn fetch_page(&self, page: u32) -> Result<Vec<ArticleResult>, FetchError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("api-key", self.api_key.as_str()),
                ("section", self.section.as_str()),
                ("show-fields", "all"),
                ("order-by", "newest"),
            ])
            .query(&[("page-size", self.page_size), ("page", page)])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus {
                status: status.as_u16(),
                page,
            });
        }

        let envelope: SearchEnvelope = response.json()?;
        Ok(envelope.response.results)
    }
}
