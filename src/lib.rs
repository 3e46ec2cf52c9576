// Public API exports
pub mod annotator;
pub mod chunker;
pub mod commands;
pub mod corpus;
pub mod fetcher;
pub mod normalizer;
pub mod record;
pub mod segmenter;

// Re-export main types for convenience
pub use record::{
    AnnotatedRecord, ChunkMeta, ChunkRecord, LabelledExample, RecordError, SpanInfo,
};

pub use fetcher::{ArticleFetcher, Document, FetchError};

pub use segmenter::{RuleSegmenter, SentenceSegmenter};

pub use chunker::{Chunk, Chunker, DEFAULT_MAX_SENTENCES};

pub use corpus::{split_corpus, CorpusSplit};

pub use annotator::{AnnotateError, Annotator, HttpAnnotator, SpanPrediction};

pub use normalizer::normalize_predictions;
