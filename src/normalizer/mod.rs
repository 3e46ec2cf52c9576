
use crate::annotator::SpanPrediction;
use crate::record::{AnnotatedRecord, SpanInfo};

/// Normalize one chunk's raw predictions into an [`AnnotatedRecord`].
///
/// Zero predictions become `sc_info: None` (serialized as `null`), never an
/// empty list, so downstream consumers can tell "model found nothing" from
/// a missing or corrupt field. With predictions present, model order is
/// preserved and each score is rounded to 2 decimal places.
///
/// Rounding rule: round-half-to-even (`f64::round_ties_even`), applied at
/// the second decimal. Scores outside [0, 1] pass through unclamped; the
/// normalizer reports what the model said.
///
/// Duplicate chunk ids across calls are each normalized independently;
/// deduplicating the output stream is an aggregation concern.
pub fn normalize_predictions(chunk_id: &str, predictions: Vec<SpanPrediction>) -> AnnotatedRecord {
    let sc_info = if predictions.is_empty() {
        None
    } else {
        Some(
            predictions
                .into_iter()
                .map(|p| SpanInfo {
                    span: p.text,
                    label: p.label,
                    score: round_score(p.score),
                })
                .collect(),
        )
    };

    AnnotatedRecord {
        id: chunk_id.to_string(),
        sc_info,
    }
}

/// Round a confidence score to 2 decimal places, ties to even
fn round_score(score: f64) -> f64 {
    (score * 100.0).round_ties_even() / 100.0
}
