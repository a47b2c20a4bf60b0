use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;
use prettytable::{Table, format, row};

use seqview::io::read_pdb_bytes;
use seqview::ops::{sequence_chain, sequence_from_structure};
use seqview::{Chain, ResidueCategory, Structure};

use crate::commands::{ExtractArgs, IoParameters, load_input_bytes, run_with_spinner};

/// Report-only command that summarizes the chains and the extracted sequence.
#[derive(Debug, Default, Args)]
pub struct InfoArgs {
    #[command(flatten)]
    pub extract: ExtractArgs,
}

pub fn run(params: &IoParameters, args: &InfoArgs) -> Result<()> {
    let bytes = load_input_bytes(params)?;
    let config = args.extract.config();

    let (structure, report) = run_with_spinner("Analyzing structure", || {
        let structure = read_pdb_bytes(&bytes, &config.context)
            .map_err(|err| params.attach_path(err.into()))
            .context("Failed to parse PDB input")?;
        let report = SequenceReport {
            chain: sequence_chain(&structure).map(|chain| chain.id.clone()),
            length: sequence_from_structure(&structure, &config).len(),
        };
        Ok((structure, report))
    })?;

    print_tables(&structure, &report)
}

#[derive(Debug)]
struct SequenceReport {
    chain: Option<String>,
    length: usize,
}

#[derive(Debug)]
struct ChainReport {
    id: String,
    residues: usize,
    standard: usize,
    modified: usize,
    water: usize,
    other: usize,
    atoms: usize,
}

fn collect_chain_reports(structure: &Structure) -> Vec<ChainReport> {
    let Some(model) = structure.first_model() else {
        return Vec::new();
    };
    model.iter_chains().map(chain_report).collect()
}

fn chain_report(chain: &Chain) -> ChainReport {
    let residues = chain.residue_count();
    let standard = chain.standard_residue_count();
    let modified = chain
        .iter_residues()
        .filter(|residue| residue.category == ResidueCategory::Modified)
        .count();
    let water = chain.iter_residues().filter(|residue| residue.is_water()).count();

    ChainReport {
        id: chain.id.clone(),
        residues,
        standard,
        modified,
        water,
        other: residues.saturating_sub(standard + modified + water),
        atoms: chain.iter_atoms().count(),
    }
}

fn print_tables(structure: &Structure, sequence: &SequenceReport) -> Result<()> {
    let mut stderr = io::stderr().lock();

    print_boxed_label(&mut stderr, "seqview Structure Report")?;
    writeln!(&mut stderr)?;

    let mut chain_table = Table::new();
    print_boxed_label(&mut stderr, "Chains (first model)")?;
    chain_table.set_format(*format::consts::FORMAT_BOX_CHARS);
    chain_table.set_titles(row![
        "Chain", "Residues", "Standard", "Modified", "Water", "Other", "Atoms"
    ]);
    for report in collect_chain_reports(structure) {
        chain_table.add_row(row![
            report.id,
            report.residues,
            report.standard,
            report.modified,
            report.water,
            report.other,
            report.atoms
        ]);
    }
    chain_table
        .print(&mut stderr)
        .context("Failed to render chain summary")?;
    writeln!(&mut stderr)?;

    let mut summary_table = Table::new();
    print_boxed_label(&mut stderr, "Structure Summary")?;
    summary_table.set_format(*format::consts::FORMAT_BOX_CHARS);
    summary_table.set_titles(row!["Metric", "Value"]);
    summary_table.add_row(row!["Models", structure.model_count()]);
    summary_table.add_row(row!["Chains", structure.chain_count()]);
    summary_table.add_row(row!["Residues", structure.residue_count()]);
    summary_table.add_row(row!["Atoms", structure.atom_count()]);

    if structure.atom_count() > 0 {
        let center = structure.geometric_center();
        summary_table.add_row(row![
            "Geometric Center (Å)",
            format!("x = {:.3}, y = {:.3}, z = {:.3}", center.x, center.y, center.z)
        ]);
    }

    match &sequence.chain {
        Some(chain) => {
            summary_table.add_row(row!["Sequence Chain", chain]);
            summary_table.add_row(row!["Sequence Length", sequence.length]);
        }
        None => {
            summary_table.add_row(row!["Sequence", "No sequence found."]);
        }
    }

    summary_table
        .print(&mut stderr)
        .context("Failed to render structure summary")?;

    Ok(())
}

fn print_boxed_label<W: Write>(writer: &mut W, title: &str) -> io::Result<()> {
    let inner = format!(" {title} ");
    let width = inner.chars().count();
    writeln!(writer, "╭{}╮", "─".repeat(width))?;
    writeln!(writer, "│{}│", inner)?;
    writeln!(writer, "╰{}╯", "─".repeat(width))?;
    Ok(())
}
