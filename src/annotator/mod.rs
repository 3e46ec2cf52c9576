mod types;

pub use types::{AnnotateRequest, AnnotateResponse, SpanResult};

use reqwest::blocking::Client;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnotateError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Model server returned error status {status}: {body}")]
    ServerError { status: u16, body: String },
}

/// One raw predicted span from the annotator.
///
/// Scores are whatever the model reported, unrounded and unclamped.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanPrediction {
    pub text: String,
    pub label: String,
    pub score: f64,
}

/// Span-prediction capability over chunk text.
///
/// Constructed once with its model loaded, then passed by reference into
/// each stage that needs it; no implicit global model state.
pub trait Annotator: Send + Sync {
    /// Predict zero or more spans for one chunk's text, in model order
    fn annotate(&self, text: &str) -> Result<Vec<SpanPrediction>, AnnotateError>;
}

/// Annotator backed by an HTTP model server.
pub struct HttpAnnotator {
    http: Client,
    endpoint: String,
}

impl HttpAnnotator {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, Duration::from_secs(60))
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            endpoint: endpoint.into(),
        }
    }
}

impl Annotator for HttpAnnotator {
    fn annotate(&self, text: &str) -> Result<Vec<SpanPrediction>, AnnotateError> {
        let req = AnnotateRequest {
            text: text.to_string(),
        };

        let response = self
            .http
            .post(format!("{}/annotate", self.endpoint))
            .json(&req)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AnnotateError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        let res: AnnotateResponse = response.json()?;
        Ok(res
            .spans
            .into_iter()
            .map(|s| SpanPrediction {
                text: s.text,
                label: s.label,
                score: s.score,
            })
            .collect())
    }
}
