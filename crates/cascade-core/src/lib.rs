//! Shared building blocks for the cascade tools.
//!
//! Holds the error taxonomy, the minimal record shapes read from cascade and
//! benchmark files, the command-line argument structs and the helpers that
//! parse and render numbers and reports.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{CascadeError, Result};
