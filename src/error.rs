use thiserror::Error;

/// Errors that can occur at the persistence boundary.
///
/// These never cross the graph operation surface: a failed save is logged
/// and swallowed (the in-memory graph stays authoritative for the session),
/// and a failed load falls back to the empty graph.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Failed to serialize flow state: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage I/O failure: {0}")]
    Io(#[from] std::io::Error),
}
