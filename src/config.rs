// src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use log::LevelFilter;
use patch_version_domain::MarkerPolicy;
use patch_version_shared_kernel::{FilePath, PresentationError, Result};
use patch_version_usecase::PatchRequest;

use crate::cli::Args;

/// Connector definition location, relative to the repository root.
pub const DEFAULT_TARGET: &str = "src/powerbi-data-connector/Speckle.pq";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Fully resolved settings for one patch run.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub tag: String,
    pub target: FilePath,
    #[builder(default)]
    pub policy: MarkerPolicy,
    #[builder(default)]
    pub require_match: bool,
    #[builder(default)]
    pub dry_run: bool,
    #[builder(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Resolve `args` into a config for `tag`.
    ///
    /// # Errors
    ///
    /// Fails when the base directory cannot be determined or the placeholder
    /// cannot form a marker.
    pub fn from_args(args: &Args, tag: &str) -> Result<Self> {
        let base_dir = match &args.base_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()
                .map_err(|source| PresentationError::MissingBaseDir { source })?,
        };
        let target = FilePath::new(
            args.file
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET)),
        )
        .resolve_against(&base_dir);

        let policy = if args.any_version {
            MarkerPolicy::AnyValue
        } else {
            MarkerPolicy::exact(args.placeholder.as_str())?
        };

        ConfigBuilder::default()
            .tag(tag)
            .target(target)
            .policy(policy)
            .require_match(args.require_match)
            .dry_run(args.dry_run)
            .format(args.format)
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()).into())
    }

    pub fn to_request(&self) -> PatchRequest {
        PatchRequest {
            tag: self.tag.clone(),
            target: self.target.clone(),
            policy: self.policy.clone(),
            require_match: self.require_match,
            dry_run: self.dry_run,
        }
    }
}

/// Log level selected by `-v`/`-q`; `RUST_LOG` still wins when set.
pub fn log_level(args: &Args) -> LevelFilter {
    if args.quiet {
        return LevelFilter::Error;
    }
    match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
