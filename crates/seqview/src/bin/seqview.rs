use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::IoParameters;
use commands::{annotate, directives, info, render, sequence};

#[derive(Parser, Debug)]
#[command(
    name = "seqview",
    about = "Extracts protein sequences from PDB files and renders color-annotated sequence and 3D viewer output.",
    version,
    author,
    arg_required_else_help = true
)]
struct Cli {
    /// Input PDB file path. When omitted, stdin is used.
    #[arg(short, long, value_name = "FILE", global = true)]
    input: Option<PathBuf>,
    /// Output file path. When omitted, stdout is used.
    #[arg(short, long, value_name = "FILE", global = true)]
    output: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the one-letter sequence of the first chain.
    Sequence(sequence::SequenceArgs),
    /// Summarize chains, residue categories, and the extracted sequence.
    Info(info::InfoArgs),
    /// Render the sequence as HTML with colored ranges.
    Annotate(annotate::AnnotateArgs),
    /// Print the 3D viewer style directives for the colored ranges as JSON.
    Directives(directives::DirectivesArgs),
    /// Render a standalone HTML page with the sequence and a 3D viewer.
    Render(render::RenderArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let io_params = IoParameters {
        input: cli.input.clone(),
        output: cli.output.clone(),
    };

    match cli.command {
        Command::Sequence(args) => sequence::run(&io_params, &args)?,
        Command::Info(args) => info::run(&io_params, &args)?,
        Command::Annotate(args) => annotate::run(&io_params, &args)?,
        Command::Directives(args) => directives::run(&io_params, &args)?,
        Command::Render(args) => render::run(&io_params, &args)?,
    }

    Ok(())
}
