//! In-memory pedigree model and the synthetic genotype encoding used to generate
//! PED/VCF test fixtures for Mendelian inheritance checks.

pub mod sample;
pub use sample::{Sample, SampleDescription, SampleError, Sex, Status};

mod pedigree;
pub use pedigree::{Pedigree, PedigreeError, DEFAULT_CHROM, MISSING_ID};

pub mod genotype;
pub use genotype::{encode, Genotype, GenotypeFields};

pub mod case;
pub use case::TestCase;

pub mod variant;
pub use variant::{Info, VariantRecord};

#[cfg(test)] mod tests;
