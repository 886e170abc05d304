use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Operation failed: {0}")]
    Operation(String),

    /// Adjacency was checked between geoprints of unequal or too short precision.
    #[error("Precision mismatch: {0}")]
    PrecisionMismatch(String),

    #[error("Invalid geoprint: {0}")]
    InvalidGeoprint(String),

    /// A term exceeded the search engine's term length limit.
    #[error("Invalid term: {0}")]
    InvalidTerm(String),

    #[error("Cache miss")]
    CacheMiss,

    #[error("Cache is empty")]
    CacheEmpty,
}

pub type Result<T> = std::result::Result<T, Error>;
