// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use patch_version_domain::DEFAULT_PLACEHOLDER;

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "patch_version",
    version = crate::VERSION,
    about = "Patch the data connector version from a release tag",
    long_about = "Patch the data connector version from a release tag.\n\n\
        The tag must contain a major.minor.patch triple (e.g. 3.1.4, v3.1.4-beta.7). \
        It is reduced to its first three numbers and written into the first \
        [Version = \"...\"] line of the connector definition. \
        Without a tag the command does nothing."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Release tag, e.g. `3.1.4` or `v3.1.4-beta.7`
    pub tag: Option<String>,

    /// Connector file to patch (relative paths resolve against --base-dir)
    #[arg(short = 'f', long, value_hint = ValueHint::FilePath, help_heading = "Target")]
    pub file: Option<PathBuf>,

    /// Directory the target path is resolved against [default: current directory]
    #[arg(short = 'C', long, value_hint = ValueHint::DirPath, help_heading = "Target")]
    pub base_dir: Option<PathBuf>,

    /// Version literal the marker line must hold
    #[arg(long, default_value = DEFAULT_PLACEHOLDER, help_heading = "Marker")]
    pub placeholder: String,

    /// Match any `[Version = "..."]` line regardless of its value
    #[arg(long, conflicts_with = "placeholder", help_heading = "Marker")]
    pub any_version: bool,

    /// Fail when no marker line is found
    #[arg(long, help_heading = "Behavior")]
    pub require_match: bool,

    /// Show what would change without writing the file
    #[arg(long, help_heading = "Behavior")]
    pub dry_run: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "Output")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, help_heading = "Output")]
    pub quiet: bool,
}
