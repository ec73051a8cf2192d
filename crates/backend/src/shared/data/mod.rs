pub mod fixture;
pub mod store;

/// Error taxonomy for loading vendor data from disk.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid fixture {path}: {source}")]
    InvalidFixture {
        path: String,
        source: serde_json::Error,
    },
    #[error("csv error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
}
