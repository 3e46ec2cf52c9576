//! Stage orchestration behind the CLI subcommands.
//!
//! Each stage reads and writes JSONL files; no stage calls into another's
//! state. Configuration problems abort before any processing starts,
//! collaborator failures degrade the output set, malformed records are
//! rejected per line.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::annotator::Annotator;
use crate::chunker::Chunker;
use crate::corpus::split_corpus;
use crate::fetcher::ArticleFetcher;
use crate::normalizer::normalize_predictions;
use crate::record::{read_jsonl, read_unique_examples, write_jsonl, AnnotatedRecord, ChunkRecord};
use crate::segmenter::SentenceSegmenter;

/// Parameters for the fetch stage, validated before any request is made
pub struct FetchParams {
    pub max_pages: u32,
    pub max_sentences: usize,
    pub sample_size: usize,
    pub shuffle_seed: u64,
    pub out_dir: PathBuf,
}

/// Fetch articles, chunk them, shuffle deterministically and write the
/// sample + main corpus files.
pub fn run_fetch(
    fetcher: &ArticleFetcher,
    segmenter: &dyn SentenceSegmenter,
    params: &FetchParams,
) -> Result<()> {
    // Chunk-size validation happens here, before the first request
    let chunker = Chunker::new(params.max_sentences)?;

    let documents = fetcher.fetch_documents(params.max_pages);
    tracing::info!(documents = documents.len(), "fetched documents");

    let mut records: Vec<ChunkRecord> = documents
        .iter()
        .flat_map(|doc| chunker.chunk_document(doc, segmenter))
        .map(|chunk| chunk.into_record())
        .collect();

    let mut rng = ChaCha8Rng::seed_from_u64(params.shuffle_seed);
    records.shuffle(&mut rng);

    fs::create_dir_all(&params.out_dir).with_context(|| {
        format!("Failed to create output directory {}", params.out_dir.display())
    })?;

    let cut = params.sample_size.min(records.len());
    let (sample, main) = records.split_at(cut);

    let sample_path = params.out_dir.join("articles_sample.jsonl");
    write_jsonl(&sample_path, sample).context("Failed to write sample corpus")?;

    let main_path = params.out_dir.join("articles.jsonl");
    write_jsonl(&main_path, main).context("Failed to write main corpus")?;

    tracing::info!(
        chunks = records.len(),
        sample = sample.len(),
        main = main.len(),
        "wrote chunked corpus"
    );
    Ok(())
}

/// Split a labelled corpus into train and eval files next to the input.
///
/// `labelled.jsonl` produces `train_labelled.jsonl` and `eval_labelled.jsonl`
/// in the same directory.
pub fn run_split(labelled_path: &Path, eval_fraction: f64, seed: u64) -> Result<()> {
    let examples = read_unique_examples(labelled_path)
        .with_context(|| format!("Failed to read {}", labelled_path.display()))?;
    tracing::info!(examples = examples.len(), "loaded labelled examples");

    let split = split_corpus(examples, eval_fraction, seed)?;

    let train_path = sibling_with_prefix(labelled_path, "train_")?;
    let eval_path = sibling_with_prefix(labelled_path, "eval_")?;

    write_jsonl(&train_path, &split.train).context("Failed to write training set")?;
    write_jsonl(&eval_path, &split.eval).context("Failed to write evaluation set")?;

    tracing::info!(
        train = split.train.len(),
        eval = split.eval.len(),
        "wrote corpus split"
    );
    Ok(())
}

/// Run the annotator over every chunk and write one normalized record per
/// input chunk.
///
/// A failed annotation skips that chunk with a logged reason; the run
/// continues and the output set is correspondingly smaller.
pub fn run_extract(
    annotator: &dyn Annotator,
    articles_path: &Path,
    output_path: &Path,
) -> Result<()> {
    let records: Vec<ChunkRecord> = read_jsonl(articles_path)
        .with_context(|| format!("Failed to read {}", articles_path.display()))?;
    tracing::info!(chunks = records.len(), "loaded chunks for annotation");

    let mut annotated: Vec<AnnotatedRecord> = Vec::with_capacity(records.len());
    for record in &records {
        match annotator.annotate(&record.text) {
            Ok(predictions) => {
                annotated.push(normalize_predictions(&record.meta.id, predictions));
            }
            Err(err) => {
                tracing::warn!(id = %record.meta.id, error = %err, "skipping failed chunk");
            }
        }
    }

    write_jsonl(output_path, &annotated).context("Failed to write annotated records")?;

    tracing::info!(
        annotated = annotated.len(),
        skipped = records.len() - annotated.len(),
        "wrote normalized predictions"
    );
    Ok(())
}

/// Build `dir/<prefix><file_name>` from `dir/<file_name>`
fn sibling_with_prefix(path: &Path, prefix: &str) -> Result<PathBuf> {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        bail!("Input path has no file name: {}", path.display());
    };
    Ok(path.with_file_name(format!("{}{}", prefix, name)))
}
