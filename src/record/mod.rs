mod jsonl;

#[cfg(test)]
mod tests;

pub use jsonl::{read_jsonl, read_unique_examples, write_jsonl, RecordError};

use serde::{Deserialize, Serialize};

/// One chunk of article text, the atomic unit fed to annotation.
///
/// Serialized shape: `{"text": "...", "meta": {"id": "...", "publication_date": "..."}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// Concatenated sentence run from one source document
    pub text: String,
    /// Metadata carried alongside the text
    pub meta: ChunkMeta,
}

/// Metadata for a chunk record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkMeta {
    /// Composite identifier: `{doc_id}_{chunk_index}`
    pub id: String,
    /// Publication timestamp inherited unchanged from the source document
    pub publication_date: String,
}

/// A chunk plus a reviewer decision, as produced by the labelling tool.
///
/// The labelling tool owns additional span-annotation fields; they are
/// preserved verbatim through the flattened `extra` map so a split run
/// rewrites records byte-equivalent in content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelledExample {
    pub text: String,
    pub meta: ChunkMeta,
    /// Reviewer decision; only `"accept"` is eligible for corpus splitting
    pub answer: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl LabelledExample {
    /// Whether the reviewer marked this example usable for training/evaluation
    pub fn is_accepted(&self) -> bool {
        self.answer == "accept"
    }
}

/// Normalized output of running the annotator over one chunk.
///
/// `sc_info` is always present in the serialized form. `None` encodes the
/// explicit "no spans found" marker (JSON `null`); a record missing the
/// field entirely fails to deserialize, so "model found nothing" is never
/// conflated with "field never computed".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedRecord {
    /// Chunk id this record was produced from
    pub id: String,
    /// Ordered predicted spans, or `None` when the annotator found nothing.
    /// `deserialize_with` disables serde's implicit-None handling so a
    /// missing field is an error rather than a silent "no spans".
    #[serde(deserialize_with = "Option::deserialize")]
    pub sc_info: Option<Vec<SpanInfo>>,
}

/// One predicted span with its score rounded for serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanInfo {
    /// Predicted span text
    pub span: String,
    /// Span category label
    pub label: String,
    /// Confidence score, rounded to 2 decimal places
    pub score: f64,
}
