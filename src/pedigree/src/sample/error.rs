use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    #[error("Invalid affection status '{0}'. Expected one of: affected, unaffected, carrier, unknown")]
    InvalidStatus(String),

    #[error("Invalid sex '{0}'. Expected one of: female, male, unknown")]
    InvalidSex(String),
}
