use clap::Parser;
use gridbot::cli::{self, logger, CliConfig};
use std::io;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);

    tracing::debug!(?config, "starting gridbot");

    let mut session = config.session()?;
    cli::run(&mut session, io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}
