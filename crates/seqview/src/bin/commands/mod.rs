use std::fs::{self, File};
use std::io::{self as stdio, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use is_terminal::IsTerminal;

use seqview::ops::{
    self, ColorRange, ExtractConfig, RangeSet, ResidueFilter, Sequence, extract_sequence,
};
use seqview::render::{RenderConfig, Representation};

pub mod annotate;
pub mod directives;
pub mod info;
pub mod render;
pub mod sequence;

/// Drawing styles accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    Stick,
    Cartoon,
    Line,
    Cross,
    Sphere,
}

impl From<StyleArg> for Representation {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Stick => Representation::Stick,
            StyleArg::Cartoon => Representation::Cartoon,
            StyleArg::Line => Representation::Line,
            StyleArg::Cross => Representation::Cross,
            StyleArg::Sphere => Representation::Sphere,
        }
    }
}

/// Aggregated IO parameters shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct IoParameters {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl IoParameters {
    /// Names the input file in decoding and parsing errors. Stdin stays a stream source.
    pub fn attach_path(&self, err: ops::Error) -> ops::Error {
        match &self.input {
            Some(path) => err.with_path(path.clone()),
            None => err,
        }
    }

    /// Human-readable name of the input source for messages.
    pub fn source_name(&self) -> String {
        match &self.input {
            Some(path) => path.display().to_string(),
            None => "stdin".to_string(),
        }
    }
}

/// Residue selection flags shared by the extracting commands.
#[derive(Debug, Default, Args)]
pub struct ExtractArgs {
    /// Include modified amino acids (MSE, SEP, ...) under their parent's one-letter code.
    #[arg(long)]
    pub modified: bool,
}

impl ExtractArgs {
    pub fn config(&self) -> ExtractConfig {
        let residues = if self.modified {
            ResidueFilter::Modified
        } else {
            ResidueFilter::Standard
        };
        ExtractConfig {
            residues,
            ..ExtractConfig::default()
        }
    }
}

/// Color range flags shared by the annotating commands.
#[derive(Debug, Default, Args)]
pub struct RangeArgs {
    /// Color range as START:END:COLOR with inclusive 0-based indices. Repeatable.
    #[arg(long = "range", value_name = "START:END:COLOR")]
    pub ranges: Vec<ColorRange>,
    /// Reject overlapping or inverted ranges instead of rendering them as given.
    #[arg(long)]
    pub strict: bool,
    /// TOML render configuration with style, highlight, and [[ranges]] entries.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl RangeArgs {
    /// Loads the render configuration file, or defaults when none was given.
    pub fn load_config(&self) -> Result<RenderConfig> {
        match &self.config {
            Some(path) => RenderConfig::from_path(path)
                .with_context(|| format!("Failed to load render config {}", path.display())),
            None => Ok(RenderConfig::default()),
        }
    }

    /// Validates the ranges against `sequence`. Command-line ranges replace configured ones.
    pub fn range_set(&self, config: &RenderConfig, sequence: &Sequence) -> Result<RangeSet> {
        let ranges = if self.ranges.is_empty() {
            config.ranges.clone()
        } else {
            self.ranges.clone()
        };

        RangeSet::validated(ranges, sequence.len(), self.strict).context("Invalid color range")
    }
}

/// Reads the whole input into memory.
pub fn load_input_bytes(params: &IoParameters) -> Result<Vec<u8>> {
    if let Some(path) = &params.input {
        return fs::read(path)
            .with_context(|| format!("Failed to read input file {}", path.display()));
    }

    let stdin = stdio::stdin();
    if stdin.is_terminal() {
        bail!(
            "No --input provided and stdin is a TTY. Provide -i/--input or pipe a PDB file into seqview."
        );
    }
    let mut bytes = Vec::new();
    stdin
        .lock()
        .read_to_end(&mut bytes)
        .context("Failed to read PDB input from stdin")?;
    Ok(bytes)
}

/// Reads the input and extracts its sequence.
pub fn load_sequence(params: &IoParameters, extract: &ExtractArgs) -> Result<(Vec<u8>, Sequence)> {
    let bytes = load_input_bytes(params)?;
    let config = extract.config();
    let sequence = run_with_spinner("Extracting sequence", || {
        extract_sequence(&bytes, &config)
            .map_err(|err| params.attach_path(err))
            .context("Failed to extract a sequence")
    })?;

    if sequence.is_empty() {
        log::warn!("No sequence found in {}", params.source_name());
    }
    Ok((bytes, sequence))
}

/// Writes `text` to the configured output file, or stdout.
pub fn write_output(text: &str, params: &IoParameters) -> Result<()> {
    match params.output.as_deref() {
        Some(path) => write_to_file(text, path),
        None => {
            let stdout = stdio::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            writer
                .write_all(text.as_bytes())
                .context("Failed to write output to stdout")?;
            if !text.ends_with('\n') {
                writer.write_all(b"\n").context("Failed to write output to stdout")?;
            }
            writer.flush().context("Failed to flush stdout")
        }
    }
}

fn write_to_file(text: &str, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .with_context(|| format!("Failed to write output to {}", path.display()))?;
    writer.flush().context("Failed to flush output writer")?;
    log::info!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

/// Wraps long-running operations with a spinner rendered to stderr.
pub fn run_with_spinner<T, F>(message: &str, work: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(message.to_string());

    let result = work();

    match &result {
        Ok(_) => spinner.finish_with_message(format!("{} ✓", message)),
        Err(_) => spinner.abandon_with_message(format!("{} ✗", message)),
    }

    result
}
