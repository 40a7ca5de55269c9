use anyhow::Result;
use cascade_core::settings::{AnnotateArgs, ToolArgs};
use cascade_data::annotator::annotate;
use cascade_tools::bootstrap;

fn main() -> Result<()> {
    let args: AnnotateArgs = bootstrap::parse_args();
    bootstrap::setup_logging(args.log_level())?;

    tracing::info!(
        "Annotating {} with {} retweets per iteration",
        args.input.display(),
        args.retweets
    );

    let summary = annotate(&args.input, args.retweets, &args.output)?;

    tracing::info!(
        "Wrote {} lines ({} annotated) to {}",
        summary.lines_read,
        summary.lines_annotated,
        args.output.display()
    );
    Ok(())
}
