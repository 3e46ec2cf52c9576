use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::LabelledExample;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to read line {line} of {path}: {source}")]
    ReadLine {
        path: String,
        line: usize,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to serialize record for {path}: {source}")]
    Serialize {
        path: String,
        source: serde_json::Error,
    },
}

/// Read newline-delimited JSON records from a file.
///
/// Malformed lines are rejected with a logged reason and skipped; the rest
/// of the file still loads. Blank lines are ignored. I/O failures abort.
pub fn read_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, RecordError> {
    let display_path = path.display().to_string();
    let file = File::open(path).map_err(|source| RecordError::Open {
        path: display_path.clone(),
        source,
    })?;

    let mut records = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| RecordError::ReadLine {
            path: display_path.clone(),
            line: idx + 1,
            source,
        })?;

        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<T>(&line) {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::warn!(
                    path = %display_path,
                    line = idx + 1,
                    error = %err,
                    "rejecting malformed record"
                );
            }
        }
    }

    Ok(records)
}

/// Read labelled examples, rejecting any record whose `meta.id` repeats an
/// id seen earlier in the file. Chunk ids are assumed unique; a duplicate is
/// a data invariant violation, logged and excluded rather than coerced.
pub fn read_unique_examples(path: &Path) -> Result<Vec<LabelledExample>, RecordError> {
    let records: Vec<LabelledExample> = read_jsonl(path)?;

    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(records.len());
    for record in records {
        if seen.insert(record.meta.id.clone()) {
            unique.push(record);
        } else {
            tracing::warn!(
                path = %path.display(),
                id = %record.meta.id,
                "rejecting duplicate chunk id"
            );
        }
    }

    Ok(unique)
}

/// Write records as newline-delimited JSON, one object per line.
///
/// The full output goes to `<path>.tmp` first and is renamed over the
/// destination on success, so a mid-run failure never leaves a truncated
/// mid-record line behind.
pub fn write_jsonl<T: Serialize>(path: &Path, records: &[T]) -> Result<(), RecordError> {
    let display = path.display().to_string();
    let tmp_path = path.with_extension("jsonl.tmp");

    {
        let file = File::create(&tmp_path).map_err(|source| RecordError::Write {
            path: display.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        for record in records {
            let line =
                serde_json::to_string(record).map_err(|source| RecordError::Serialize {
                    path: display.clone(),
                    source,
                })?;
            writeln!(writer, "{}", line).map_err(|source| RecordError::Write {
                path: display.clone(),
                source,
            })?;
        }

        writer.flush().map_err(|source| RecordError::Write {
            path: display.clone(),
            source,
        })?;
    }

    fs::rename(&tmp_path, path).map_err(|source| RecordError::Write {
        path: display,
        source,
    })
}
