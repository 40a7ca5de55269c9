//! Duplicate-timestamp census over a cascade file.
//!
//! Counts how often each `created_at` string occurs, then folds those counts
//! into a histogram of occurrence-count → number of timestamps.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::io::BufRead;
use std::path::Path;

use cascade_core::error::Result;
use cascade_core::formatting::format_histogram;
use cascade_core::models::TimestampRecord;
use tracing::debug;

use crate::reader::{open_input, JsonLines};

// ── TimestampCounts ───────────────────────────────────────────────────────────

/// Running tally of timestamp occurrences.
#[derive(Debug, Clone, Default)]
pub struct TimestampCounts {
    counts: HashMap<String, u64>,
    total: u64,
}

impl TimestampCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one retweet with the given `created_at` key.
    pub fn add(&mut self, created_at: String) {
        *self.counts.entry(created_at).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn unique(&self) -> u64 {
        self.counts.len() as u64
    }

    /// Occurrence-count → number of distinct timestamps with that count.
    pub fn histogram(&self) -> BTreeMap<u64, u64> {
        let mut histogram = BTreeMap::new();
        for &occurrences in self.counts.values() {
            *histogram.entry(occurrences).or_insert(0) += 1;
        }
        histogram
    }

    pub fn into_report(self) -> CensusReport {
        CensusReport {
            histogram: self.histogram(),
            total: self.total(),
            unique: self.unique(),
        }
    }
}

// ── CensusReport ──────────────────────────────────────────────────────────────

/// Final figures printed by the census tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensusReport {
    pub histogram: BTreeMap<u64, u64>,
    /// Number of records (lines) read.
    pub total: u64,
    /// Number of distinct timestamps.
    pub unique: u64,
}

impl CensusReport {
    /// Records sharing a timestamp with an earlier record.
    pub fn duplicates(&self) -> u64 {
        self.total - self.unique
    }
}

impl fmt::Display for CensusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", format_histogram(&self.histogram))?;
        writeln!(f, "Retweets: {}", self.total)?;
        writeln!(f, "Unique Timestamps: {}", self.unique)?;
        writeln!(f, "Duplicate Timestamps: {}", self.duplicates())
    }
}

// ── Entry points ──────────────────────────────────────────────────────────────

/// Run the census over the cascade file at `input`.
pub fn census(input: &Path) -> Result<CensusReport> {
    let report = census_lines(open_input(input)?)?;
    debug!(
        "Census of {}: {} retweets, {} unique timestamps",
        input.display(),
        report.total,
        report.unique
    );
    Ok(report)
}

/// Stream-level census; stops at the first record that fails to decode.
pub fn census_lines<R: BufRead>(reader: R) -> Result<CensusReport> {
    let mut counts = TimestampCounts::new();
    for record in JsonLines::<R, TimestampRecord>::new(reader) {
        counts.add(record?.created_at);
    }
    Ok(counts.into_report())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_core::error::CascadeError;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn cascade(stamps: &[&str]) -> String {
        stamps
            .iter()
            .enumerate()
            .map(|(i, t)| {
                serde_json::json!({"user": {"id": i}, "created_at": t}).to_string() + "\n"
            })
            .collect()
    }

    #[test]
    fn test_histogram_scenario() {
        let input = cascade(&["t1", "t1", "t2", "t3", "t3", "t3"]);
        let report = census_lines(Cursor::new(input)).unwrap();

        let expected: BTreeMap<u64, u64> = [(1, 1), (2, 1), (3, 1)].into_iter().collect();
        assert_eq!(report.histogram, expected);
        assert_eq!(report.total, 6);
        assert_eq!(report.unique, 3);
        assert_eq!(report.duplicates(), 3);
    }

    #[test]
    fn test_totals_invariant() {
        let inputs: [&[&str]; 4] = [
            &[],
            &["a"],
            &["a", "a", "a", "a"],
            &["a", "b", "c", "b", "d", "a", "a"],
        ];
        for stamps in inputs {
            let report = census_lines(Cursor::new(cascade(stamps))).unwrap();
            assert_eq!(report.unique + report.duplicates(), report.total);
            assert_eq!(report.total, stamps.len() as u64);
            let from_histogram: u64 = report.histogram.iter().map(|(c, n)| c * n).sum();
            assert_eq!(from_histogram, report.total);
        }
    }

    #[test]
    fn test_timestamps_are_opaque_keys() {
        let input = cascade(&[
            "Mon Jan 02 10:00:00 +0000 2017",
            "Mon Jan 02 11:00:00 +0100 2017",
            "Mon Jan 02 10:00:00 +0000 2017 ",
        ]);
        let report = census_lines(Cursor::new(input)).unwrap();
        assert_eq!(report.unique, 3);
        assert_eq!(report.duplicates(), 0);
    }

    #[test]
    fn test_timestamp_counts_tally() {
        let mut counts = TimestampCounts::new();
        counts.add("x".to_string());
        counts.add("x".to_string());
        counts.add("y".to_string());
        let expected: BTreeMap<u64, u64> = [(1, 1), (2, 1)].into_iter().collect();
        assert_eq!(counts.histogram(), expected);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.unique(), 2);
    }

    #[test]
    fn test_report_display() {
        let report = census_lines(Cursor::new(cascade(&["t1", "t1", "t2", "t3", "t3", "t3"])))
            .unwrap();
        assert_eq!(
            report.to_string(),
            "{1: 1, 2: 1, 3: 1}\nRetweets: 6\nUnique Timestamps: 3\nDuplicate Timestamps: 3\n"
        );
    }

    #[test]
    fn test_empty_cascade() {
        let report = census_lines(Cursor::new("")).unwrap();
        assert_eq!(
            report.to_string(),
            "{}\nRetweets: 0\nUnique Timestamps: 0\nDuplicate Timestamps: 0\n"
        );
    }

    #[test]
    fn test_missing_created_at_aborts() {
        let input = "{\"created_at\":\"a\"}\n{\"user\":{\"id\":1}}\n";
        let err = census_lines(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, CascadeError::Record { line: 2, .. }));
    }

    #[test]
    fn test_census_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cascade.json");
        std::fs::write(&path, cascade(&["a", "b", "a"])).unwrap();

        let report = census(&path).unwrap();
        assert_eq!(report.total, 3);
        assert_eq!(report.unique, 2);
        assert_eq!(report.histogram.get(&2), Some(&1));
        assert_eq!(report.histogram.get(&1), Some(&1));
    }

    #[test]
    fn test_census_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = census(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CascadeError::FileRead { .. }));
    }
}
