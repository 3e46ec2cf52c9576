// The model server contract
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct AnnotateRequest {
    pub text: String,
}

#[derive(Deserialize)]
pub struct AnnotateResponse {
    pub spans: Vec<SpanResult>,
}

#[derive(Deserialize)]
pub struct SpanResult {
    pub text: String,
    pub label: String,
    pub score: f64,
}
