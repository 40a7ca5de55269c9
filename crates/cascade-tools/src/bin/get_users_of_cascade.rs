use anyhow::Result;
use cascade_core::settings::{ExtractArgs, ToolArgs};
use cascade_data::extractor::extract_users;
use cascade_tools::bootstrap;

fn main() -> Result<()> {
    let args: ExtractArgs = bootstrap::parse_args();
    bootstrap::setup_logging(args.log_level())?;

    let summary = extract_users(&args.cascade, &args.output)?;

    tracing::info!(
        "Extracted {} users to {}",
        summary.users_written,
        args.output.display()
    );
    Ok(())
}
