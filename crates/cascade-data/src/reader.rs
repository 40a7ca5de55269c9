//! File opening and JSON-lines decoding shared by the cascade tools.
//!
//! Inputs are consumed one line at a time; at most one decoded record is
//! alive at any point.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines};
use std::marker::PhantomData;
use std::path::Path;

use cascade_core::error::{CascadeError, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

// ── Public API ────────────────────────────────────────────────────────────────

/// Open `path` for buffered line reading.
pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| CascadeError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Opened input {}", path.display());
    Ok(BufReader::new(file))
}

/// Create (or truncate) `path` for buffered writing.
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| CascadeError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Created output {}", path.display());
    Ok(BufWriter::new(file))
}

/// Decode one JSON-lines record. `line_number` is 1-based and only used for
/// error reporting.
pub fn parse_record<T: DeserializeOwned>(line: &str, line_number: usize) -> Result<T> {
    serde_json::from_str(line).map_err(|source| CascadeError::Record {
        line: line_number,
        source,
    })
}

/// Iterator decoding every line of a reader into `T`.
///
/// Blank lines are not skipped: they are not valid JSON and surface as a
/// [`CascadeError::Record`]. Callers are expected to stop at the first error.
pub struct JsonLines<R, T> {
    lines: Lines<R>,
    line_number: usize,
    _record: PhantomData<fn() -> T>,
}

impl<R: BufRead, T: DeserializeOwned> JsonLines<R, T> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            _record: PhantomData,
        }
    }
}

impl<R: BufRead, T: DeserializeOwned> Iterator for JsonLines<R, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(l) => l,
            Err(e) => return Some(Err(CascadeError::Io(e))),
        };
        self.line_number += 1;
        Some(parse_record(&line, self.line_number))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_core::models::{TimestampRecord, UserRecord};
    use std::io::{Cursor, Write};
    use std::path::PathBuf;
    use tempfile::TempDir;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn write_jsonl(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        path
    }

    // ── open_input / create_output ────────────────────────────────────────────

    #[test]
    fn test_open_input_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.json");
        let err = open_input(&missing).unwrap_err();
        match err {
            CascadeError::FileRead { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_create_output_in_missing_directory() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("no-such-dir").join("out.txt");
        let err = create_output(&target).unwrap_err();
        assert!(matches!(err, CascadeError::FileWrite { .. }));
    }

    #[test]
    fn test_create_output_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "stale contents\n").unwrap();
        drop(create_output(&path).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    // ── JsonLines ─────────────────────────────────────────────────────────────

    #[test]
    fn test_json_lines_from_file() {
        let dir = TempDir::new().unwrap();
        let path = write_jsonl(
            dir.path(),
            "cascade.json",
            &[
                r#"{"user":{"id":1},"created_at":"a"}"#,
                r#"{"user":{"id":2},"created_at":"b"}"#,
            ],
        );

        let records: Vec<TimestampRecord> = JsonLines::new(open_input(&path).unwrap())
            .collect::<Result<_>>()
            .unwrap();
        let stamps: Vec<&str> = records.iter().map(|r| r.created_at.as_str()).collect();
        assert_eq!(stamps, vec!["a", "b"]);
    }

    #[test]
    fn test_json_lines_reports_line_number() {
        let input = Cursor::new("{\"user\":{\"id\":1}}\n{\"user\":{}}\n{\"user\":{\"id\":3}}\n");
        let mut iter: JsonLines<_, UserRecord> = JsonLines::new(input);

        assert!(iter.next().unwrap().is_ok());
        match iter.next().unwrap() {
            Err(CascadeError::Record { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected item: {other:?}"),
        }
        assert!(iter.next().unwrap().is_ok());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_json_lines_blank_line_is_an_error() {
        let input = Cursor::new("{\"created_at\":\"a\"}\n\n");
        let results: Vec<Result<TimestampRecord>> = JsonLines::new(input).collect();
        assert_eq!(results.len(), 2);
        assert!(matches!(results[1], Err(CascadeError::Record { line: 2, .. })));
    }

    #[test]
    fn test_json_lines_empty_input() {
        let mut iter: JsonLines<_, UserRecord> = JsonLines::new(Cursor::new(""));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_parse_record_invalid_json() {
        let err = parse_record::<UserRecord>("{not json", 7).unwrap_err();
        assert!(matches!(err, CascadeError::Record { line: 7, .. }));
    }
}
