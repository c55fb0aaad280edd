use std::collections::HashSet;

use log::{trace, warn};

use crate::{
    genotype::encode,
    sample::{Sample, SampleDescription},
    variant::{Info, VariantRecord},
};

mod error;
pub use error::PedigreeError;

/// Contig of every synthetic record.
pub const DEFAULT_CHROM: &str = "chr1";

/// VCF missing value, used as a record identifier when none is provided.
pub const MISSING_ID: &str = ".";

/// A family of samples.
/// # Fields:
/// - `samples`: pedigree members, in declaration order. This order defines the VCF sample columns,
///              and thus the meaning of each alt allele count within a test case.
/// - `spouses`: index pairs `[father, mother]` of every parent couple, recorded once per child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pedigree {
    samples: Vec<Sample>,
    spouses: Vec<[usize; 2]>,
}

impl Pedigree {
    /// Build a pedigree out of raw sample descriptions, preserving their order.
    ///
    /// # Errors
    /// - `InvalidSample` if any description carries an invalid status or sex.
    /// - `NotFound` if any parent id does not match a sample of the pedigree.
    pub fn new<I>(descriptions: I) -> Result<Self, PedigreeError>
    where
        I: IntoIterator<Item = SampleDescription>,
    {
        let samples = descriptions.into_iter()
            .enumerate()
            .map(|(index, description)| {
                let id = description.id.clone();
                Sample::try_from(description).map_err(|source| PedigreeError::InvalidSample{index, id, source})
            })
            .collect::<Result<Vec<Sample>, _>>()?;
        Self::from_samples(samples)
    }

    /// Build a pedigree out of already validated samples.
    ///
    /// # Errors
    /// - `NotFound` if any parent id does not match a sample of the pedigree.
    pub fn from_samples(samples: Vec<Sample>) -> Result<Self, PedigreeError> {
        let mut pedigree = Self { samples, spouses: Vec::new() };
        pedigree.warn_duplicate_ids();

        // ---- Every known parent must be a member of this pedigree.
        for sample in &pedigree.samples {
            for parent in [sample.paternal_id(), sample.maternal_id()].into_iter().flatten() {
                pedigree.position(parent)?;
            }
        }

        // ---- Collect parent couples. Half-known parentships are not couples.
        let spouses = pedigree.samples.iter()
            .filter_map(Sample::parent_ids)
            .map(|[father, mother]| -> Result<[usize; 2], PedigreeError> {
                trace!("Found spouses: {father} <-> {mother}");
                Ok([pedigree.position(father)?, pedigree.position(mother)?])
            })
            .collect::<Result<Vec<[usize; 2]>, PedigreeError>>()?;
        pedigree.spouses = spouses;
        Ok(pedigree)
    }

    fn warn_duplicate_ids(&self) {
        let mut seen = HashSet::with_capacity(self.samples.len());
        for id in self.sample_ids() {
            if !seen.insert(id) {
                warn!("Sample '{id}' is declared multiple times. Lookups will resolve to its first declaration.");
            }
        }
    }

    /// Index of the first sample matching `id`.
    fn position(&self, id: &str) -> Result<usize, PedigreeError> {
        self.samples.iter()
            .position(|sample| sample.id() == id)
            .ok_or_else(|| PedigreeError::NotFound(id.to_string()))
    }

    /// Retrieve a sample from its identifier.
    ///
    /// # Errors
    /// - `NotFound` if no sample of this pedigree carries this `id`.
    pub fn get(&self, id: &str) -> Result<&Sample, PedigreeError> {
        self.position(id).map(|index| &self.samples[index])
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample identifiers, in declaration order.
    pub fn sample_ids(&self) -> impl Iterator<Item = &str> {
        self.samples.iter().map(Sample::id)
    }

    /// Parent couples `(father, mother)`. A couple appears once for each of its children.
    pub fn spouses(&self) -> impl Iterator<Item = (&Sample, &Sample)> {
        self.spouses.iter().map(|[father, mother]| (&self.samples[*father], &self.samples[*mother]))
    }

    /// Both parents of `sample`, if they are known.
    pub fn parents_of(&self, sample: &Sample) -> Option<(&Sample, &Sample)> {
        let [father, mother] = sample.parent_ids()?;
        Some((self.get(father).ok()?, self.get(mother).ok()?))
    }

    /// Generation depth of each sample, in declaration order: `0` for samples without any known parent,
    /// `1 + max(parent depths)` otherwise.
    pub fn generations(&self) -> Vec<usize> {
        let mut depths = vec![0usize; self.samples.len()];
        // ---- A parent may be declared after its offspring: relax until stable.
        for _ in 0..self.samples.len() {
            let mut updated = false;
            for (i, sample) in self.samples.iter().enumerate() {
                let depth = [sample.paternal_id(), sample.maternal_id()].into_iter()
                    .flatten()
                    .filter_map(|parent| self.position(parent).ok())
                    .map(|parent| depths[parent] + 1)
                    .max()
                    .unwrap_or(0);
                if depth != depths[i] {
                    depths[i] = depth;
                    updated = true;
                }
            }
            if !updated {
                return depths
            }
        }
        warn!("Pedigree contains cyclic ancestry. Generation depths are truncated.");
        depths
    }

    /// Encode a synthetic VCF record from one alt allele count per sample.
    /// # Arguments:
    /// - `alts`     : alt allele counts, in sample declaration order. (`0`, `1`, `2`, or no-call)
    /// - `modes`    : inheritance modes expected for this variant.
    /// - `not_modes`: inheritance modes excluded for this variant.
    /// - `chrom`    : contig of the record. (see [`DEFAULT_CHROM`])
    /// - `position` : 1-based position of the record.
    /// - `id`       : identifier of the record. (see [`MISSING_ID`])
    ///
    /// # Errors
    /// - `LengthMismatch` if `alts` does not hold exactly one value per sample.
    pub fn variant(
        &self,
        alts     : &[u8],
        modes    : &[String],
        not_modes: &[String],
        chrom    : &str,
        position : u64,
        id       : &str
    ) -> Result<VariantRecord, PedigreeError> {
        if alts.len() != self.samples.len() {
            return Err(PedigreeError::LengthMismatch{expected: self.samples.len(), got: alts.len()})
        }
        let genotypes = alts.iter().copied().map(encode).collect();
        Ok(VariantRecord::new(chrom, position, id, Info::new(modes, not_modes), genotypes))
    }
}
