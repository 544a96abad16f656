use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No data file found for source '{0}'")]
    SourceNotFound(String),
    #[error("Malformed segment data: {0}")]
    ParseError(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
