//! Throughput annotation of benchmark output.
//!
//! Copies a benchmark log line by line. Data lines inside the
//! "Iteration with Insertion and Containment Check" section get the
//! retweets-per-second rate derived from their median column appended.

use std::io::{BufRead, Write};
use std::path::Path;

use cascade_core::error::{CascadeError, Result};
use cascade_core::formatting::format_rate_suffix;
use cascade_core::models::{BenchmarkRecord, LineKind};
use tracing::{debug, warn};

use crate::reader::{create_output, open_input};

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Counts collected while annotating one log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotateSummary {
    pub lines_read: usize,
    pub lines_annotated: usize,
}

/// Annotate the log at `input` and write the result to `output`.
pub fn annotate(input: &Path, retweets: f64, output: &Path) -> Result<AnnotateSummary> {
    let reader = open_input(input)?;
    let mut writer = create_output(output)?;

    let summary = annotate_lines(reader, retweets, &mut writer)?;
    writer.flush().map_err(|source| CascadeError::FileWrite {
        path: output.to_path_buf(),
        source,
    })?;

    debug!(
        "Annotated {} of {} lines from {}",
        summary.lines_annotated,
        summary.lines_read,
        input.display()
    );
    Ok(summary)
}

/// Stream-level annotation: every line of `reader` is written to `writer`
/// followed by `\n`, with a rate suffix where one applies.
pub fn annotate_lines<R: BufRead, W: Write>(
    reader: R,
    retweets: f64,
    writer: &mut W,
) -> Result<AnnotateSummary> {
    let mut summary = AnnotateSummary::default();
    let mut in_target_section = false;

    for line in reader.lines() {
        let line = line?;
        summary.lines_read += 1;

        let kind = LineKind::classify(&line);
        match kind {
            LineKind::TargetHeader => in_target_section = true,
            LineKind::OtherHeader => in_target_section = false,
            LineKind::Data => {}
        }

        let suffix = if in_target_section && !kind.is_header() {
            rate_suffix(&line, retweets, summary.lines_read)?
        } else {
            None
        };

        writer.write_all(line.as_bytes())?;
        if let Some(suffix) = suffix {
            writer.write_all(suffix.as_bytes())?;
            summary.lines_annotated += 1;
        }
        writer.write_all(b"\n")?;
    }

    Ok(summary)
}

/// Rate suffix for a data line inside the target section.
///
/// `Ok(None)` when the line is too short or its median column is not a
/// number. A median that is not strictly positive, or a rate that does
/// not fit in an `i64`, is an error.
fn rate_suffix(line: &str, retweets: f64, line_number: usize) -> Result<Option<String>> {
    let Some(record) = BenchmarkRecord::parse(line) else {
        return Ok(None);
    };
    let Some(median) = record.median_nanos() else {
        warn!(
            "Line {}: median column {:?} is not a number, leaving line unannotated",
            line_number,
            record.median_token()
        );
        return Ok(None);
    };

    let rate = retweets_per_second(retweets, median, line_number)?;
    Ok(Some(format_rate_suffix(rate)))
}

/// `floor(retweets / (median_nanos / 1e9))` for the data line `line_number`.
///
/// Fails when the median is zero, negative or not finite, and when the
/// floored rate is NaN, infinite or outside the `i64` range.
pub fn retweets_per_second(retweets: f64, median_nanos: f64, line_number: usize) -> Result<i64> {
    if !median_nanos.is_finite() || median_nanos <= 0.0 {
        return Err(CascadeError::NonPositiveDuration {
            line: line_number,
            median: median_nanos,
        });
    }
    let seconds = median_nanos / NANOS_PER_SECOND;
    let rate = (retweets / seconds).floor();
    // `i64::MAX as f64` rounds up to 2^63, hence the strict upper bound.
    if !(rate >= i64::MIN as f64 && rate < i64::MAX as f64) {
        return Err(CascadeError::RateOutOfRange {
            line: line_number,
            rate,
        });
    }
    Ok(rate as i64)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
