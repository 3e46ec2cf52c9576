#[cfg(test)]
mod tests;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::record::LabelledExample;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Eval fraction must be in (0, 1), got {0}")]
    InvalidEvalFraction(f64),
}

/// Disjoint partition of accepted examples into train and eval sets
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusSplit {
    pub train: Vec<LabelledExample>,
    pub eval: Vec<LabelledExample>,
}

/// Deterministically partition labelled examples into train and eval sets.
///
/// Only examples with `answer == "accept"` participate; everything else is
/// dropped. The accepted subsequence is shuffled once with Fisher-Yates
/// under `ChaCha8Rng::seed_from_u64(seed)` and cut at
/// `floor(len * (1 - eval_fraction))`: everything before the cut is train,
/// everything after is eval.
///
/// The RNG algorithm is part of the contract. Fixing ChaCha8 with a u64
/// seed makes the partition reproducible across machines and releases;
/// swapping in another generator would silently reshuffle every corpus.
///
/// Zero accepted examples produce two empty sets, not an error. A computed
/// cut of 0 or `len` is valid: the whole set lands on one side.
pub fn split_corpus(
    examples: Vec<LabelledExample>,
    eval_fraction: f64,
    seed: u64,
) -> Result<CorpusSplit, SplitError> {
    if !(eval_fraction > 0.0 && eval_fraction < 1.0) {
        return Err(SplitError::InvalidEvalFraction(eval_fraction));
    }

    let mut accepted: Vec<LabelledExample> = examples
        .into_iter()
        .filter(LabelledExample::is_accepted)
        .collect();

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    accepted.shuffle(&mut rng);

    let split_index = (accepted.len() as f64 * (1.0 - eval_fraction)).floor() as usize;
    let eval = accepted.split_off(split_index);

    tracing::info!(
        train = accepted.len(),
        eval = eval.len(),
        seed,
        "split corpus"
    );

    Ok(CorpusSplit {
        train: accepted,
        eval,
    })
}
