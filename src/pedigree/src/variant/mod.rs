use std::fmt::{self, Display, Formatter};

use crate::genotype::{GenotypeFields, FORMAT};

/// Reference allele of every synthetic record.
pub const REF: &str = "T";
/// Alternate allele of every synthetic record.
pub const ALT: &str = "G";
pub const QUAL: u8 = 50;
pub const FILTER: &str = "PASS";

/// INFO key listing the inheritance modes expected by the downstream checker.
pub const MODES_KEY: &str = "MENDACITY_MODES";
/// INFO key listing the inheritance modes excluded by the downstream checker.
pub const NOT_MODES_KEY: &str = "MENDACITY_NOT_MODES";

/// INFO column of a synthetic record.
///
/// An empty `Info` is rendered as an empty string, not as the VCF missing value `.`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Info {
    modes    : Vec<String>,
    not_modes: Vec<String>,
}

impl Info {
    pub fn new(modes: &[String], not_modes: &[String]) -> Self {
        Self { modes: modes.to_vec(), not_modes: not_modes.to_vec() }
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty() && self.not_modes.is_empty()
    }
}

impl Display for Info {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let fields = [(MODES_KEY, &self.modes), (NOT_MODES_KEY, &self.not_modes)]
            .into_iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(key, values)| format!("{key}={}", values.join(",")))
            .collect::<Vec<String>>();
        write!(f, "{}", fields.join(";"))
    }
}

/// A single VCF data line: eight fixed columns, FORMAT, and one genotype column per sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRecord {
    chrom    : String,
    position : u64,
    id       : String,
    info     : Info,
    genotypes: Vec<GenotypeFields>,
}

impl VariantRecord {
    pub fn new(chrom: &str, position: u64, id: &str, info: Info, genotypes: Vec<GenotypeFields>) -> Self {
        Self { chrom: chrom.to_string(), position, id: id.to_string(), info, genotypes }
    }

    pub fn chrom(&self) -> &str {
        &self.chrom
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn genotypes(&self) -> &[GenotypeFields] {
        &self.genotypes
    }
}

impl Display for VariantRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}\t{REF}\t{ALT}\t{QUAL}\t{FILTER}\t{}\t{FORMAT}",
            self.chrom,
            self.position,
            self.id,
            self.info
        )?;
        self.genotypes.iter().try_for_each(|genotype| write!(f, "\t{genotype}"))
    }
}
