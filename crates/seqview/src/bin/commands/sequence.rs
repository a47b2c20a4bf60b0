use anyhow::Result;
use clap::Args;

use seqview::render::sequence_display_html;

use crate::commands::{ExtractArgs, IoParameters, load_sequence, write_output};

/// Prints the one-letter sequence of the first chain.
#[derive(Debug, Default, Args)]
pub struct SequenceArgs {
    #[command(flatten)]
    pub extract: ExtractArgs,
    /// Emit the hoverable sequence markup instead of plain text.
    #[arg(long)]
    pub html: bool,
}

pub fn run(params: &IoParameters, args: &SequenceArgs) -> Result<()> {
    let (_, sequence) = load_sequence(params, &args.extract)?;
    if sequence.is_empty() && !args.html {
        return Ok(());
    }

    let text = if args.html {
        sequence_display_html(&sequence)
    } else {
        sequence.to_string()
    };
    write_output(&text, params)
}
