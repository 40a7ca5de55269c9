//! Extraction of retweeting user ids from a cascade file.

use std::io::{BufRead, Write};
use std::path::Path;

use cascade_core::error::{CascadeError, Result};
use cascade_core::models::UserRecord;
use tracing::debug;

use crate::reader::{create_output, open_input, JsonLines};

/// Counts collected while extracting users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub users_written: usize,
}

/// Write the `user.id` of every record in `input` to `output`, one per line.
///
/// The first record that fails to decode aborts the run; nothing after it
/// is written.
pub fn extract_users(input: &Path, output: &Path) -> Result<ExtractSummary> {
    let reader = open_input(input)?;
    let mut writer = create_output(output)?;

    let summary = extract_user_lines(reader, &mut writer)?;
    writer.flush().map_err(|source| CascadeError::FileWrite {
        path: output.to_path_buf(),
        source,
    })?;

    debug!(
        "Wrote {} users from {} to {}",
        summary.users_written,
        input.display(),
        output.display()
    );
    Ok(summary)
}

/// Stream-level extraction from `reader` to `writer`.
pub fn extract_user_lines<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
) -> Result<ExtractSummary> {
    let mut summary = ExtractSummary::default();

    for record in JsonLines::<R, UserRecord>::new(reader) {
        let record = record?;
        writeln!(writer, "{}", record.user.id)?;
        summary.users_written += 1;
    }

    Ok(summary)
}
