use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuiteError {
    #[error("Failed to open the test-suite file")]
    OpenFile(#[source] std::io::Error),

    #[error("Failed to deserialize the test-suite description")]
    Deserialize(#[source] serde_yaml::Error),
}
