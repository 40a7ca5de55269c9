use clap::Parser;
use std::path::PathBuf;

/// Accepted `--log-level` values.
pub const LOG_LEVELS: [&str; 5] = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"];

/// Arguments shared by every tool.
pub trait ToolArgs: Parser {
    /// Requested diagnostic level, one of [`LOG_LEVELS`].
    fn log_level(&self) -> &str;
}

// ── get_rts ────────────────────────────────────────────────────────────────────

/// Annotate benchmark output with retweets-per-second figures
#[derive(Parser, Debug, Clone)]
#[command(
    name = "get_rts",
    about = "Annotate benchmark output with retweets-per-second figures",
    version
)]
pub struct AnnotateArgs {
    /// Benchmark log to read
    #[arg(value_name = "INPUT-FILE")]
    pub input: PathBuf,

    /// Number of retweets processed per benchmark iteration
    #[arg(value_name = "RETWEETS", allow_negative_numbers = true)]
    pub retweets: f64,

    /// Path of the annotated copy
    #[arg(value_name = "OUTPUT-FILE")]
    pub output: PathBuf,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = LOG_LEVELS)]
    pub log_level: String,
}

impl ToolArgs for AnnotateArgs {
    fn log_level(&self) -> &str {
        &self.log_level
    }
}

// ── get_users_of_cascade ───────────────────────────────────────────────────────

/// List the retweeting user of every record in a cascade file
#[derive(Parser, Debug, Clone)]
#[command(
    name = "get_users_of_cascade",
    about = "List the retweeting user of every record in a cascade file",
    version
)]
pub struct ExtractArgs {
    /// JSON-lines cascade file
    #[arg(value_name = "CASCADE.json")]
    pub cascade: PathBuf,

    /// Path to write one user id per line to
    #[arg(value_name = "OUTPUT-FILE")]
    pub output: PathBuf,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = LOG_LEVELS)]
    pub log_level: String,
}

impl ToolArgs for ExtractArgs {
    fn log_level(&self) -> &str {
        &self.log_level
    }
}

// ── unique_times ───────────────────────────────────────────────────────────────

/// Count duplicate timestamps in a cascade file
#[derive(Parser, Debug, Clone)]
#[command(
    name = "unique_times",
    about = "Count duplicate timestamps in a cascade file",
    version
)]
pub struct CensusArgs {
    /// JSON-lines cascade file
    #[arg(value_name = "CASCADE.json")]
    pub cascade: PathBuf,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = LOG_LEVELS)]
    pub log_level: String,
}

impl ToolArgs for CensusArgs {
    fn log_level(&self) -> &str {
        &self.log_level
    }
}
