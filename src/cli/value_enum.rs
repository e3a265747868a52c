// src/cli/value_enum.rs
use clap::ValueEnum;

use crate::config::OutputFormat;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    /// Progress and confirmation lines
    #[default]
    Text,
    /// One JSON report object
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}
