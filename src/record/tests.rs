use super::*;
use std::io::Write;

fn chunk_record(id: &str) -> ChunkRecord {
    ChunkRecord {
        text: "Some article text.".to_string(),
        meta: ChunkMeta {
            id: id.to_string(),
            publication_date: "2020-01-01T00:00:00Z".to_string(),
        },
    }
}

#[test]
fn test_chunk_record_wire_shape() {
    let json = serde_json::to_string(&chunk_record("a1_0")).unwrap();
    assert_eq!(
        json,
        r#"{"text":"Some article text.","meta":{"id":"a1_0","publication_date":"2020-01-01T00:00:00Z"}}"#
    );
}

#[test]
fn test_annotated_record_null_is_not_missing() {
    // Explicit "no spans" marker serializes as null, field always present
    let record = AnnotatedRecord {
        id: "a1_0".to_string(),
        sc_info: None,
    };
    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, r#"{"id":"a1_0","sc_info":null}"#);

    // null round-trips back to None
    let parsed: AnnotatedRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.sc_info, None);

    // A record missing the field entirely is malformed, not "no spans"
    let missing: Result<AnnotatedRecord, _> = serde_json::from_str(r#"{"id":"a1_0"}"#);
    assert!(missing.is_err());
}

#[test]
fn test_labelled_example_preserves_tool_fields() {
    let raw = r#"{"text":"t","meta":{"id":"a1_0","publication_date":"2020-01-01"},"answer":"accept","spans":[{"start":0,"end":1,"label":"HABITAT"}]}"#;
    let example: LabelledExample = serde_json::from_str(raw).unwrap();

    assert!(example.is_accepted());
    assert!(example.extra.contains_key("spans"));

    // Tool-owned fields survive a rewrite
    let rewritten = serde_json::to_string(&example).unwrap();
    let reparsed: LabelledExample = serde_json::from_str(&rewritten).unwrap();
    assert_eq!(example, reparsed);
}

#[test]
fn test_labelled_example_requires_answer() {
    let raw = r#"{"text":"t","meta":{"id":"a1_0","publication_date":"2020-01-01"}}"#;
    let result: Result<LabelledExample, _> = serde_json::from_str(raw);
    assert!(result.is_err());
}

#[test]
fn test_read_jsonl_skips_malformed_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.jsonl");

    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{}", serde_json::to_string(&chunk_record("a1_0")).unwrap()).unwrap();
    writeln!(file, "{{not valid json").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "{}", serde_json::to_string(&chunk_record("a1_1")).unwrap()).unwrap();
    drop(file);

    let records: Vec<ChunkRecord> = read_jsonl(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].meta.id, "a1_0");
    assert_eq!(records[1].meta.id, "a1_1");
}

#[test]
fn test_read_unique_examples_rejects_duplicate_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labelled.jsonl");

    let make = |id: &str, answer: &str| {
        format!(
            r#"{{"text":"t","meta":{{"id":"{}","publication_date":"2020-01-01"}},"answer":"{}"}}"#,
            id, answer
        )
    };
    std::fs::write(
        &path,
        [make("a1_0", "accept"), make("a1_1", "reject"), make("a1_0", "accept")].join("\n"),
    )
    .unwrap();

    let examples = read_unique_examples(&path).unwrap();
    assert_eq!(examples.len(), 2);
    assert_eq!(examples[0].meta.id, "a1_0");
    assert_eq!(examples[1].meta.id, "a1_1");
}

#[test]
fn test_write_jsonl_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.jsonl");

    let records = vec![chunk_record("a1_0"), chunk_record("a1_1")];
    write_jsonl(&path, &records).unwrap();

    // No temp file left behind
    assert!(!dir.path().join("out.jsonl.tmp").exists());

    let read_back: Vec<ChunkRecord> = read_jsonl(&path).unwrap();
    assert_eq!(read_back, records);
}

#[test]
fn test_write_jsonl_one_object_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.jsonl");

    write_jsonl(&path, &[chunk_record("a1_0"), chunk_record("a1_1")]).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        assert!(serde_json::from_str::<serde_json::Value>(line).is_ok());
    }
}
