use anyhow::Result;
use clap::Args;

use crate::commands::{ExtractArgs, IoParameters, RangeArgs, load_sequence, write_output};

/// Renders the sequence as HTML with every color range wrapped in a colored span.
#[derive(Debug, Default, Args)]
pub struct AnnotateArgs {
    #[command(flatten)]
    pub extract: ExtractArgs,
    #[command(flatten)]
    pub ranges: RangeArgs,
}

pub fn run(params: &IoParameters, args: &AnnotateArgs) -> Result<()> {
    let config = args.ranges.load_config()?;
    let (_, sequence) = load_sequence(params, &args.extract)?;
    let ranges = args.ranges.range_set(&config, &sequence)?;

    log::debug!("annotating {} residues with {} range(s)", sequence.len(), ranges.len());
    write_output(&ranges.to_html(&sequence), params)
}
