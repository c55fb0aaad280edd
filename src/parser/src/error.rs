use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError{
    #[error("File {0} does not exist")]
    MissingFile(String),

    #[error("{0} is not a File")]
    NotAFile(String),

    #[error("Failed to generate an output file prefix. Note that file prefixes are generated from the input yaml filename")]
    ParseOutputPrefix,

    #[error("Failed to serialize command line arguments")]
    Serialize(#[source] serde_yaml::Error),
}
