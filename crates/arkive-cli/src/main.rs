use clap::Parser;

mod cli;

use crate::cli::Cli;
use arkive_core::logging;

fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible; stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging(cli.verbose) {
        logging::init_logging_stderr(cli.verbose);
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    if let Err(err) = cli.run() {
        eprintln!("arkive error: {:#}", err);
        std::process::exit(1);
    }
}
