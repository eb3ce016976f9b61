use thiserror::Error;

// Error types for the query engine
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Hotel not found: {0}")]
    NotFound(u64),

    #[error("Invalid filter input: {0}")]
    InvalidFilterInput(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid page size for {0}: must be greater than zero")]
    ZeroPageSize(&'static str),

    #[error("Invalid rating tolerance: {0}")]
    InvalidTolerance(f64),
}
