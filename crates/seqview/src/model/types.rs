use nalgebra::Point3;
use std::fmt;
use std::str::FromStr;

pub type Point = Point3<f64>;

/// The twenty canonical amino acids recognized by the standard-residue predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardResidue {
    ALA,
    ARG,
    ASN,
    ASP,
    CYS,
    GLN,
    GLU,
    GLY,
    HIS,
    ILE,
    LEU,
    LYS,
    MET,
    PHE,
    PRO,
    SER,
    THR,
    TRP,
    TYR,
    VAL,
}

/// Coarse classification assigned to every residue while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueCategory {
    /// One of the twenty canonical amino acids.
    Standard,
    /// Modified or unidentified amino acid such as `MSE` or `UNK`.
    Modified,
    /// Solvent water.
    Water,
    /// Any other residue described by `ATOM` records (nucleotides, caps).
    Polymer,
    /// Any other residue described by `HETATM` records (ligands, ions).
    Hetero,
}

impl StandardResidue {
    pub const ALL: [StandardResidue; 20] = [
        StandardResidue::ALA,
        StandardResidue::ARG,
        StandardResidue::ASN,
        StandardResidue::ASP,
        StandardResidue::CYS,
        StandardResidue::GLN,
        StandardResidue::GLU,
        StandardResidue::GLY,
        StandardResidue::HIS,
        StandardResidue::ILE,
        StandardResidue::LEU,
        StandardResidue::LYS,
        StandardResidue::MET,
        StandardResidue::PHE,
        StandardResidue::PRO,
        StandardResidue::SER,
        StandardResidue::THR,
        StandardResidue::TRP,
        StandardResidue::TYR,
        StandardResidue::VAL,
    ];

    pub fn three_letter(&self) -> &'static str {
        match self {
            StandardResidue::ALA => "ALA",
            StandardResidue::ARG => "ARG",
            StandardResidue::ASN => "ASN",
            StandardResidue::ASP => "ASP",
            StandardResidue::CYS => "CYS",
            StandardResidue::GLN => "GLN",
            StandardResidue::GLU => "GLU",
            StandardResidue::GLY => "GLY",
            StandardResidue::HIS => "HIS",
            StandardResidue::ILE => "ILE",
            StandardResidue::LEU => "LEU",
            StandardResidue::LYS => "LYS",
            StandardResidue::MET => "MET",
            StandardResidue::PHE => "PHE",
            StandardResidue::PRO => "PRO",
            StandardResidue::SER => "SER",
            StandardResidue::THR => "THR",
            StandardResidue::TRP => "TRP",
            StandardResidue::TYR => "TYR",
            StandardResidue::VAL => "VAL",
        }
    }

    pub fn one_letter(&self) -> char {
        match self {
            StandardResidue::ALA => 'A',
            StandardResidue::ARG => 'R',
            StandardResidue::ASN => 'N',
            StandardResidue::ASP => 'D',
            StandardResidue::CYS => 'C',
            StandardResidue::GLN => 'Q',
            StandardResidue::GLU => 'E',
            StandardResidue::GLY => 'G',
            StandardResidue::HIS => 'H',
            StandardResidue::ILE => 'I',
            StandardResidue::LEU => 'L',
            StandardResidue::LYS => 'K',
            StandardResidue::MET => 'M',
            StandardResidue::PHE => 'F',
            StandardResidue::PRO => 'P',
            StandardResidue::SER => 'S',
            StandardResidue::THR => 'T',
            StandardResidue::TRP => 'W',
            StandardResidue::TYR => 'Y',
            StandardResidue::VAL => 'V',
        }
    }
}

impl fmt::Display for StandardResidue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.three_letter())
    }
}

impl FromStr for StandardResidue {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        StandardResidue::ALL
            .into_iter()
            .find(|residue| residue.three_letter() == upper)
            .ok_or(())
    }
}

impl ResidueCategory {
    pub fn name(&self) -> &'static str {
        match self {
            ResidueCategory::Standard => "Standard",
            ResidueCategory::Modified => "Modified",
            ResidueCategory::Water => "Water",
            ResidueCategory::Polymer => "Polymer",
            ResidueCategory::Hetero => "Hetero",
        }
    }

    /// Returns `true` for categories that belong to a polypeptide chain.
    pub fn is_amino_acid(&self) -> bool {
        matches!(self, ResidueCategory::Standard | ResidueCategory::Modified)
    }
}

impl fmt::Display for ResidueCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ResidueCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(ResidueCategory::Standard),
            "modified" => Ok(ResidueCategory::Modified),
            "water" => Ok(ResidueCategory::Water),
            "polymer" => Ok(ResidueCategory::Polymer),
            "hetero" => Ok(ResidueCategory::Hetero),
            _ => Err(()),
        }
    }
}
