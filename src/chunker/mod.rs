
use thiserror::Error;

use crate::fetcher::Document;
use crate::record::{ChunkMeta, ChunkRecord};
use crate::segmenter::SentenceSegmenter;

/// Default maximum sentences per chunk
pub const DEFAULT_MAX_SENTENCES: usize = 10;

#[derive(Error, Debug)]
pub enum ChunkerError {
    #[error("Chunk size must be at least 1 sentence (got {0})")]
    InvalidChunkSize(usize),
}

/// A bounded run of consecutive sentences from one document
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    /// Sentences in the run, joined with single spaces
    pub text: String,
    /// Composite identifier: `{doc_id}_{chunk_index}`
    pub chunk_id: String,
    /// Publication timestamp inherited unchanged from the parent document
    pub publication_date: String,
}

impl Chunk {
    /// Convert to the serializable JSONL record shape
    pub fn into_record(self) -> ChunkRecord {
        ChunkRecord {
            text: self.text,
            meta: ChunkMeta {
                id: self.chunk_id,
                publication_date: self.publication_date,
            },
        }
    }
}

/// Splits documents into runs of at most `max_sentences` sentences.
///
/// Pure transformation: the same document and segmenter output always
/// produce the same chunks, so chunking can be rerun or parallelized by
/// document without affecting ids.
pub struct Chunker {
    max_sentences: usize,
}

impl Chunker {
    /// Create a chunker.
    ///
    /// A zero chunk size is a configuration error, caught here before any
    /// document is processed.
    pub fn new(max_sentences: usize) -> Result<Self, ChunkerError> {
        if max_sentences == 0 {
            return Err(ChunkerError::InvalidChunkSize(max_sentences));
        }
        Ok(Self { max_sentences })
    }

    /// Split a document into chunks in document order.
    ///
    /// Sentence runs never split a sentence; every chunk except possibly the
    /// last holds exactly `max_sentences` sentences. Chunk indices are
    /// zero-based and gapless, so ids are `{doc_id}_0 .. {doc_id}_{n-1}`.
    /// An empty body yields zero chunks.
    pub fn chunk_document(
        &self,
        document: &Document,
        segmenter: &dyn SentenceSegmenter,
    ) -> Vec<Chunk> {
        let sentences = segmenter.segment(&document.body_text);

        sentences
            .chunks(self.max_sentences)
            .enumerate()
            .map(|(index, run)| Chunk {
                text: run.join(" "),
                chunk_id: format!("{}_{}", document.id, index),
                publication_date: document.publication_date.clone(),
            })
            .collect()
    }
}
