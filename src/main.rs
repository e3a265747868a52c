// src/main.rs
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use patch_version::{
    cli::Args,
    config::{self, Config},
    logging, presentation,
};
use patch_version_domain::validate;
use patch_version_infra::FsTextStore;
use patch_version_usecase::PatchConnector;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(config::log_level(&args));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    // Nothing to do without a tag; no file is opened.
    let Some(tag) = args.tag.as_deref() else {
        log::debug!("no tag given, nothing to patch");
        return Ok(());
    };

    let tag = validate(tag)?;
    let config = Config::from_args(args, tag.as_str())?;
    presentation::print_started(&tag, config.format);

    let store = FsTextStore::new();
    let report = PatchConnector::new(&store).run(&config.to_request())?;
    presentation::print_report(&report, config.format)?;
    Ok(())
}
