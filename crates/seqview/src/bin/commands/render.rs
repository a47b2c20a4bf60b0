use anyhow::{Context, Result};
use clap::Args;

use seqview::io::decode;
use seqview::render::{PageContent, Representation, render_page};

use crate::commands::{
    ExtractArgs, IoParameters, RangeArgs, StyleArg, load_sequence, run_with_spinner, write_output,
};

const DEFAULT_TITLE: &str = "Protein Structure Viewer";

/// Renders a standalone HTML page with the sequence and an interactive 3D viewer.
#[derive(Debug, Default, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub extract: ExtractArgs,
    #[command(flatten)]
    pub ranges: RangeArgs,
    /// Base representation for the whole structure.
    #[arg(long, value_enum)]
    pub style: Option<StyleArg>,
    /// Representation used for highlighted ranges.
    #[arg(long, value_enum)]
    pub highlight: Option<StyleArg>,
    /// Page title.
    #[arg(long)]
    pub title: Option<String>,
}

pub fn run(params: &IoParameters, args: &RenderArgs) -> Result<()> {
    let config = args.ranges.load_config()?;
    let (bytes, sequence) = load_sequence(params, &args.extract)?;
    let pdb_text = decode(&bytes).context("Failed to decode PDB input")?;
    let ranges = args.ranges.range_set(&config, &sequence)?;

    let mut viewer = config.viewer_config();
    if let Some(style) = args.style {
        viewer.representation = Representation::from(style);
    }
    if let Some(highlight) = args.highlight {
        viewer.highlight = Representation::from(highlight);
    }

    let page = run_with_spinner("Rendering page", || {
        Ok(render_page(&PageContent {
            title: args.title.as_deref().unwrap_or(DEFAULT_TITLE),
            sequence: &sequence,
            pdb_text,
            ranges: &ranges,
            viewer: &viewer,
        }))
    })?;

    write_output(&page, params)
}
