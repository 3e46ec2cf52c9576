// The content API contract
use serde::Deserialize;

#[derive(Deserialize)]
pub struct SearchEnvelope {
    pub response: SearchResponse,
}

#[derive(Deserialize)]
pub struct SearchResponse {
    pub results: Vec<ArticleResult>,
}

#[derive(Deserialize)]
pub struct ArticleResult {
    pub id: String,
    #[serde(rename = "webPublicationDate")]
    pub web_publication_date: String,
    #[serde(default)]
    pub fields: Option<ArticleFields>,
}

#[derive(Deserialize)]
pub struct ArticleFields {
    #[serde(rename = "bodyText")]
    pub body_text: Option<String>,
}
