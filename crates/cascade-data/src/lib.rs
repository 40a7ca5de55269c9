//! Line-oriented transformations over cascade and benchmark files.
//!
//! Each tool has a path-based entry point and a stream-level variant generic
//! over `BufRead`/`Write`.

pub mod annotator;
pub mod census;
pub mod extractor;
pub mod reader;
