use thiserror::Error;

use crate::sample::SampleError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PedigreeError {
    #[error("Failed to build sample n°{index} ('{id}')")]
    InvalidSample{index: usize, id: String, #[source] source: SampleError},

    #[error("Sample '{0}' could not be found within the pedigree")]
    NotFound(String),

    #[error("Got {got} alt allele counts, while the pedigree contains {expected} samples")]
    LengthMismatch{expected: usize, got: usize},
}
