use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DemoError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("output error: {0}")]
    Output(String),
    #[error("record serialization failed: {0}")]
    Format(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("sequence has no steps")]
    Empty,
    #[error("announcement must be a single non-empty line: {0:?}")]
    InvalidAnnouncement(String),
}

impl From<std::io::Error> for DemoError {
    fn from(e: std::io::Error) -> Self {
        DemoError::Output(e.to_string())
    }
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;
