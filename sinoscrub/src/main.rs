// sinoscrub/src/main.rs
//! sinoscrub entry point.
//!
//! Parses arguments, bootstraps logging, and hands off to the scrub command
//! runner.

use anyhow::Result;
use clap::Parser;

use sinoscrub::cli::Cli;
use sinoscrub::commands::scrub;
use sinoscrub::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.verbose {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    scrub::run(args)
}
