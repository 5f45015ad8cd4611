// Entrypoint for the uploader.
// - Keeps `main` small: parse flags, set up logging and hand over to the UI.
// - Returns `anyhow::Result` so fatal errors print and exit with code 1.

use clap::Parser;
use log::LevelFilter;
use signage_upload::{options::Options, ui::run};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let options = Options::parse();

    let mut logger = env_logger::Builder::new();
    logger.filter_level(LevelFilter::Warn).parse_default_env();
    if options.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    run(&options)
}
