use anyhow::{Context, Result};
use clap::Args;

use seqview::render::Representation;

use crate::commands::{ExtractArgs, IoParameters, RangeArgs, StyleArg, load_sequence, write_output};

/// Prints the 3D viewer style directives for the color ranges as JSON.
#[derive(Debug, Default, Args)]
pub struct DirectivesArgs {
    #[command(flatten)]
    pub extract: ExtractArgs,
    #[command(flatten)]
    pub ranges: RangeArgs,
    /// Representation used for highlighted ranges.
    #[arg(long, value_enum)]
    pub highlight: Option<StyleArg>,
}

pub fn run(params: &IoParameters, args: &DirectivesArgs) -> Result<()> {
    let config = args.ranges.load_config()?;
    let (_, sequence) = load_sequence(params, &args.extract)?;
    let ranges = args.ranges.range_set(&config, &sequence)?;

    let highlight = args
        .highlight
        .map(Representation::from)
        .unwrap_or_else(|| config.viewer_config().highlight);
    let directives = ranges.to_style_directives(highlight);

    let json = serde_json::to_string_pretty(&directives)
        .context("Failed to serialize style directives")?;
    write_output(&json, params)
}
