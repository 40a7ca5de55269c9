use anyhow::Result;
use cascade_core::settings::{CensusArgs, ToolArgs};
use cascade_data::census::census;
use cascade_tools::bootstrap;

fn main() -> Result<()> {
    let args: CensusArgs = bootstrap::parse_args();
    bootstrap::setup_logging(args.log_level())?;

    let report = census(&args.cascade)?;
    print!("{}", report);
    Ok(())
}
