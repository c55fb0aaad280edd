use anyhow::Result;
use log::debug;

use located_error::LocatedError;
use pedigree::{Pedigree, PedigreeError, TestCase, VariantRecord, DEFAULT_CHROM};

use super::GenericWriter;

/// Position of the first synthetic record.
pub const START_POSITION: u64 = 55_516_888;

/// Distance between two consecutive synthetic records.
pub const POSITION_STRIDE: u64 = 4;

/// Meta-information lines of every generated VCF.
pub const HEADER: &str = "\
##fileformat=VCFv4.2
##FORMAT=<ID=AD,Number=A,Type=Integer,Description=\"Allelic depths for the ref and alt alleles in the order listed\">
##FORMAT=<ID=DP,Number=1,Type=Integer,Description=\"Approximate read depth (reads with MQ=255 or with bad mates are filtered)\">
##FORMAT=<ID=GT,Number=1,Type=String,Description=\"Genotype\">
##FORMAT=<ID=GQ,Number=1,Type=Integer,Description=\"Genotype Quality\">
##FORMAT=<ID=PL,Number=G,Type=Integer,Description=\"Normalized, Phred-scaled likelihoods for genotypes as defined in the VCF specification\">
##INFO=<ID=MENDACITY_MODES,Number=.,Type=String,Description=\"inheritance modes expected by mendacity\">
##INFO=<ID=MENDACITY_NOT_MODES,Number=.,Type=String,Description=\"inheritance modes excluded by mendacity\">
##contig=<ID=chr1,length=249250621,assembly=hg19>";

/// Fixed columns of the VCF header line.
const COLUMNS: [&str; 9] = ["#CHROM", "POS", "ID", "REF", "ALT", "QUAL", "FILTER", "INFO", "FORMAT"];

/// VCF serializer. Every record is encoded at construction, so that a malformed test case is
/// reported before anything gets written.
#[derive(Debug)]
pub struct VcfEmitter {
    sample_ids: Vec<String>,
    records   : Vec<VariantRecord>,
}

impl VcfEmitter {
    /// Encode one record per genotype-call variant of `cases`. The `j`-th variant of the `i`-th case
    /// is named `id<i>_<j>`; positions start at [`START_POSITION`] and advance by [`POSITION_STRIDE`].
    ///
    /// # Errors
    /// - `LengthMismatch` if any variant does not hold exactly one alt allele count per sample.
    pub fn new(pedigree: &Pedigree, cases: &[TestCase]) -> Result<Self, PedigreeError> {
        let mut position = START_POSITION;
        let mut records  = Vec::new();
        for (i, case) in cases.iter().enumerate() {
            for (j, alts) in case.variants().enumerate() {
                let id = format!("id{i}_{j}");
                debug!("Encoding {id} at {DEFAULT_CHROM}:{position}");
                records.push(pedigree.variant(alts, &case.modes, &case.not_modes, DEFAULT_CHROM, position, &id)?);
                position += POSITION_STRIDE;
            }
        }
        let sample_ids = pedigree.sample_ids().map(ToString::to_string).collect();
        Ok(Self { sample_ids, records })
    }

    /// Full header block: meta-information lines, followed by the column header line.
    pub fn header(&self) -> String {
        let mut columns = COLUMNS.to_vec();
        columns.extend(self.sample_ids.iter().map(String::as_str));
        format!("{HEADER}\n{}", columns.join("\t"))
    }

    pub fn records(&self) -> &[VariantRecord] {
        &self.records
    }

    /// # Errors
    /// - if the header or any record fails to get written by `writer`.
    pub fn write(&self, writer: &mut GenericWriter) -> Result<()> {
        writer.write_iter(std::iter::once(self.header())).loc("While writing VCF header")?;
        writer.write_iter(&self.records).loc("While writing VCF records")
    }
}
