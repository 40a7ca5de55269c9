use cascade_core::settings::ToolArgs;
use clap::error::ErrorKind;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit status for malformed command lines.
pub const USAGE_EXIT_CODE: i32 = 1;

// ── Argument bootstrap ─────────────────────────────────────────────────────────

/// Parse the process arguments into `T`.
///
/// `--help` and `--version` behave as usual. Any other argument error is
/// reported on stderr, the usage line is printed to stdout and the process
/// exits with [`USAGE_EXIT_CODE`].
pub fn parse_args<T: ToolArgs>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            eprint!("{}", err);
            println!("{}", usage_line::<T>());
            std::process::exit(USAGE_EXIT_CODE);
        }
    }
}

/// The tool's one-line usage, e.g.
/// `Usage: unique_times [OPTIONS] <CASCADE.json>`.
pub fn usage_line<T: ToolArgs>() -> String {
    T::command().render_usage().to_string()
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a `--log-level` value to a `tracing` level name.
///
/// Unrecognised names are passed through lowercased so that raw
/// [`EnvFilter`] directives still work.
pub fn normalise_level(log_level: &str) -> String {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" | "CRITICAL" => "error".to_string(),
        _ => log_level.to_lowercase(),
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Diagnostics always go to stderr; stdout is reserved for tool output.
/// Falls back to `"warn"` if the level does not form a valid filter.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(normalise_level(log_level)).unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()?;

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
