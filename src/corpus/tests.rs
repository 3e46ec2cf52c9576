use super::*;
use crate::record::{ChunkMeta, LabelledExample};
use std::collections::HashSet;

fn make_example(id: &str, answer: &str) -> LabelledExample {
    LabelledExample {
        text: format!("Text for {}", id),
        meta: ChunkMeta {
            id: id.to_string(),
            publication_date: "2020-01-01".to_string(),
        },
        answer: answer.to_string(),
        extra: serde_json::Map::new(),
    }
}

fn accepted_examples(n: usize) -> Vec<LabelledExample> {
    (0..n).map(|i| make_example(&format!("a1_{}", i), "accept")).collect()
}

fn id_set(examples: &[LabelledExample]) -> HashSet<String> {
    examples.iter().map(|e| e.meta.id.clone()).collect()
}

#[test]
fn test_invalid_eval_fraction_is_rejected() {
    assert!(split_corpus(accepted_examples(10), 0.0, 42).is_err());
    assert!(split_corpus(accepted_examples(10), 1.0, 42).is_err());
    assert!(split_corpus(accepted_examples(10), -0.1, 42).is_err());
    assert!(split_corpus(accepted_examples(10), 1.5, 42).is_err());
    assert!(split_corpus(accepted_examples(10), f64::NAN, 42).is_err());
}

#[test]
fn test_only_accepted_examples_participate() {
    let mut examples = accepted_examples(5);
    examples.push(make_example("r_0", "reject"));
    examples.push(make_example("i_0", "ignore"));

    let split = split_corpus(examples, 0.2, 42).unwrap();
    assert_eq!(split.train.len() + split.eval.len(), 5);

    let all = id_set(&split.train).union(&id_set(&split.eval)).cloned().collect::<HashSet<_>>();
    assert!(!all.contains("r_0"));
    assert!(!all.contains("i_0"));
}

#[test]
fn test_zero_accepted_examples_give_empty_sets() {
    let examples = vec![make_example("r_0", "reject")];
    let split = split_corpus(examples, 0.2, 42).unwrap();
    assert!(split.train.is_empty());
    assert!(split.eval.is_empty());
}

#[test]
fn test_partition_is_exact() {
    let examples = accepted_examples(37);
    let input_ids = id_set(&examples);

    let split = split_corpus(examples, 0.3, 7).unwrap();

    // No loss, no duplication, no overlap
    assert_eq!(split.train.len() + split.eval.len(), 37);
    assert!(id_set(&split.train).is_disjoint(&id_set(&split.eval)));

    let output_ids: HashSet<String> =
        id_set(&split.train).union(&id_set(&split.eval)).cloned().collect();
    assert_eq!(output_ids, input_ids);
}

#[test]
fn test_split_sizes_follow_floor_rule() {
    let split = split_corpus(accepted_examples(100), 0.2, 42).unwrap();
    assert_eq!(split.train.len(), 80);
    assert_eq!(split.eval.len(), 20);

    // floor(7 * 0.7) = 4 train, 3 eval
    let split = split_corpus(accepted_examples(7), 0.3, 42).unwrap();
    assert_eq!(split.train.len(), 4);
    assert_eq!(split.eval.len(), 3);
}

#[test]
fn test_identical_inputs_reproduce_identical_split() {
    let first = split_corpus(accepted_examples(100), 0.2, 42).unwrap();
    let second = split_corpus(accepted_examples(100), 0.2, 42).unwrap();

    // Same membership and same order on both sides
    assert_eq!(first, second);
}

#[test]
fn test_split_is_seed_sensitive() {
    let with_42 = split_corpus(accepted_examples(100), 0.2, 42).unwrap();
    let with_7 = split_corpus(accepted_examples(100), 0.2, 7).unwrap();

    // 100-choose-20 memberships; identical eval sets across two seeds would
    // mean the shuffle ignored the seed
    assert_ne!(id_set(&with_42.eval), id_set(&with_7.eval));
}

#[test]
fn test_tiny_sets_can_land_entirely_on_one_side() {
    // floor(1 * 0.5) = 0: everything goes to eval
    let split = split_corpus(accepted_examples(1), 0.5, 42).unwrap();
    assert!(split.train.is_empty());
    assert_eq!(split.eval.len(), 1);
}
