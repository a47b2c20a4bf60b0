//! PDB structure reader that preserves file order for models, chains, and residues.
//!
//! The parser decodes raw bytes as UTF-8, splits `MODEL`/`ENDMDL` blocks into separate
//! models, groups coordinate records into chains by first appearance, classifies residues via
//! [`IoContext`], and filters alternate locations by occupancy. Residues are never re-sorted by
//! their sequence number: position within the chain is the order they were read.

use crate::io::context::IoContext;
use crate::io::error::Error;
use crate::model::{
    atom::Atom, chain::Chain, frame::Model, residue::Residue, structure::Structure, types::Point,
};
use std::collections::HashMap;
use std::io::Read;
use std::ops::Range;

const FORMAT: &str = "PDB";

/// Identity of a residue within one chain while atoms are being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ResKey {
    /// `HETATM` and `ATOM` residues never merge, even when numbered alike.
    is_hetatm: bool,
    /// Residue sequence number parsed from columns 23-26.
    res_seq: i32,
    /// Insertion code from column 27.
    i_code: Option<char>,
}

/// Chain under construction, with an index for appending atoms to known residues.
struct ChainBuilder {
    id: String,
    residues: Vec<Residue>,
    index: HashMap<ResKey, usize>,
}

impl ChainBuilder {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            residues: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn finish(self) -> Chain {
        let mut chain = Chain::new(&self.id);
        for residue in self.residues {
            chain.add_residue(residue);
        }
        chain
    }
}

struct ModelBuilder {
    serial: i32,
    chains: Vec<ChainBuilder>,
}

impl ModelBuilder {
    fn new(serial: i32) -> Self {
        Self {
            serial,
            chains: Vec::new(),
        }
    }

    fn chain_mut(&mut self, id: &str) -> &mut ChainBuilder {
        let position = match self.chains.iter().position(|c| c.id == id) {
            Some(position) => position,
            None => {
                self.chains.push(ChainBuilder::new(id));
                self.chains.len() - 1
            }
        };
        &mut self.chains[position]
    }

    fn finish(self) -> Model {
        let mut model = Model::new(self.serial);
        for chain in self.chains {
            model.add_chain(chain.finish());
        }
        model
    }
}

/// Fields of a single `ATOM`/`HETATM` record.
struct AtomRecord<'a> {
    atom_name: &'a str,
    res_name: &'a str,
    chain_id: &'a str,
    key: ResKey,
    atom: Atom,
}

/// Decodes raw bytes as UTF-8 text.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the bytes are not valid UTF-8.
pub fn decode(bytes: &[u8]) -> Result<&str, Error> {
    std::str::from_utf8(bytes).map_err(|e| Error::decode(e, None))
}

/// Reads an entire stream into memory and parses it as PDB text.
///
/// # Errors
///
/// Returns [`Error::Io`] when the reader fails, [`Error::Decode`] for non-UTF-8 content, and
/// [`Error::Parse`] for malformed coordinate records.
pub fn read<R: Read>(mut reader: R, context: &IoContext) -> Result<Structure, Error> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::from_io(e, None))?;
    read_bytes(&bytes, context)
}

/// Decodes and parses raw PDB bytes.
pub fn read_bytes(bytes: &[u8], context: &IoContext) -> Result<Structure, Error> {
    read_str(decode(bytes)?, context)
}

/// Parses PDB text into a [`Structure`] using the supplied IO context.
///
/// Records outside any `MODEL` block form an implicit model, `END` terminates parsing, and
/// every record type other than `MODEL`, `ENDMDL`, `ATOM`, and `HETATM` is ignored.
///
/// # Arguments
///
/// * `text` - PDB file content.
/// * `context` - Residue vocabulary used to classify residue names.
///
/// # Errors
///
/// Returns [`Error::Parse`] when a coordinate record is truncated, carries non-numeric
/// residue numbers or coordinates, or has non-ASCII content inside its fixed columns.
///
/// # Examples
///
/// ```
/// use seqview::io::{IoContext, read_pdb_str};
///
/// let pdb = "\
/// ATOM      1  N   GLY A   1       0.000   0.000   0.000  1.00 20.00           N\n\
/// END\n";
/// let structure = read_pdb_str(pdb, &IoContext::new_default()).unwrap();
/// assert_eq!(structure.model_count(), 1);
/// assert_eq!(structure.residue_count(), 1);
/// ```
pub fn read_str(text: &str, context: &IoContext) -> Result<Structure, Error> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut structure = Structure::new();
    let mut current: Option<ModelBuilder> = None;

    for (index, line) in text.lines().enumerate() {
        let line_num = index + 1;

        match record_name(line) {
            "MODEL" => {
                if let Some(open) = current.take() {
                    log::warn!(
                        "MODEL record on line {line_num} opened before model {} was closed with ENDMDL",
                        open.serial
                    );
                    structure.add_model(open.finish());
                }
                let serial = column(line, 10..14)
                    .and_then(|s| s.trim().parse::<i32>().ok())
                    .unwrap_or_else(|| next_serial(&structure));
                current = Some(ModelBuilder::new(serial));
            }
            "ENDMDL" => {
                if let Some(open) = current.take() {
                    structure.add_model(open.finish());
                }
            }
            "ATOM" | "HETATM" => {
                let is_hetatm = line.starts_with("HETATM");
                let record = parse_atom_record(line, line_num, is_hetatm)?;
                let builder =
                    current.get_or_insert_with(|| ModelBuilder::new(next_serial(&structure)));
                add_atom_record(builder, record, context);
            }
            "END" => {
                log::debug!("END record on line {line_num}; ignoring remaining content");
                break;
            }
            _ => {}
        }
    }

    if let Some(open) = current.take() {
        structure.add_model(open.finish());
    }

    log::debug!("parsed {structure}");

    Ok(structure)
}

fn record_name(line: &str) -> &str {
    line.get(..6).unwrap_or(line).trim_end()
}

fn next_serial(structure: &Structure) -> i32 {
    structure.models().last().map_or(1, |m| m.serial + 1)
}

/// Slices fixed-width columns, clamping to the line length.
///
/// Returns `None` when the range splits a multi-byte character.
fn column(line: &str, range: Range<usize>) -> Option<&str> {
    let end = range.end.min(line.len());
    if range.start >= end {
        return Some("");
    }
    line.get(range.start..end)
}

fn parse_atom_record(line: &str, line_num: usize, is_hetatm: bool) -> Result<AtomRecord<'_>, Error> {
    if line.len() < 54 {
        return Err(Error::parse(FORMAT, None, line_num, "Atom record too short"));
    }

    let field = |range: Range<usize>| {
        column(line, range).ok_or_else(|| {
            Error::parse(
                FORMAT,
                None,
                line_num,
                "Non-ASCII content inside fixed-width columns",
            )
        })
    };

    let atom_name = field(12..16)?.trim();
    let res_name = field(17..20)?.trim();
    let chain_id = field(21..22)?;
    let res_seq = field(22..26)?
        .trim()
        .parse::<i32>()
        .map_err(|_| Error::parse(FORMAT, None, line_num, "Invalid residue sequence number"))?;
    let i_code = field(26..27)?.chars().next().filter(|c| *c != ' ');

    let coordinate = |range: Range<usize>, axis: &str| -> Result<f64, Error> {
        field(range)?.trim().parse::<f64>().map_err(|_| {
            Error::parse(FORMAT, None, line_num, format!("Invalid {axis} coordinate"))
        })
    };
    let pos = Point::new(
        coordinate(30..38, "X")?,
        coordinate(38..46, "Y")?,
        coordinate(46..54, "Z")?,
    );

    let occupancy = field(54..60)?.trim().parse::<f64>().unwrap_or(1.0);
    let element = match field(76..78)?.trim() {
        "" => infer_element(atom_name),
        symbol => symbol,
    };

    Ok(AtomRecord {
        atom_name,
        res_name,
        chain_id,
        key: ResKey {
            is_hetatm,
            res_seq,
            i_code,
        },
        atom: Atom::new(atom_name, element, pos).with_occupancy(occupancy),
    })
}

/// Guesses an element from the leading letter of an atom name (`CA` -> `C`, `1HB` -> `H`).
fn infer_element(atom_name: &str) -> &str {
    atom_name
        .char_indices()
        .find(|(_, c)| c.is_ascii_alphabetic())
        .map_or("", |(i, c)| &atom_name[i..i + c.len_utf8()])
}

fn add_atom_record(builder: &mut ModelBuilder, record: AtomRecord<'_>, context: &IoContext) {
    let chain = builder.chain_mut(record.chain_id);

    let slot = match chain.index.get(&record.key) {
        Some(&slot) => slot,
        None => {
            let (standard, category, parent) =
                context.classify_residue(record.res_name, record.key.is_hetatm);
            let residue = Residue::new(
                record.key.res_seq,
                record.key.i_code,
                &record.res_name.to_ascii_uppercase(),
                standard,
                category,
            )
            .with_parent(parent);
            chain.residues.push(residue);
            chain.index.insert(record.key, chain.residues.len() - 1);
            chain.residues.len() - 1
        }
    };

    log::trace!(
        "atom {} -> residue slot {slot} of chain '{}'",
        record.atom_name,
        chain.id
    );
    chain.residues[slot].add_atom(record.atom);
}
