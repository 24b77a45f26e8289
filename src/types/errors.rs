use thiserror::Error;

#[derive(Debug, Error)]
pub enum StagingError {
    #[error("Archive error: {0}")]
    Archive(String),
    #[error("Label table error: {0}")]
    LabelTable(String),
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for StagingError {
    fn from(error: std::io::Error) -> Self {
        StagingError::Io(error.to_string())
    }
}

impl From<sevenz_rust::Error> for StagingError {
    fn from(error: sevenz_rust::Error) -> Self {
        StagingError::Archive(error.to_string())
    }
}

impl From<csv::Error> for StagingError {
    fn from(error: csv::Error) -> Self {
        StagingError::LabelTable(error.to_string())
    }
}

pub type StagingResult<T> = Result<T, StagingError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod errors_tests;
