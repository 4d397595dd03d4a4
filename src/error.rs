use thiserror::Error;

#[derive(Debug, Error)]
pub enum SqlLobError {
    #[cfg(feature = "sqlite")]
    #[error(transparent)]
    SqliteError(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Large object allocation error: {0}")]
    AllocationError(String),

    #[error("Large object read error: {0}")]
    ReadError(String),

    #[error("Large object write error: {0}")]
    WriteError(String),

    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    #[error("Parameter error: {0}")]
    ParameterError(String),

    #[error("Large object has already been freed")]
    Freed,

    #[error("Other database error: {0}")]
    Other(String),
}

impl From<serde_json::Error> for SqlLobError {
    fn from(err: serde_json::Error) -> Self {
        SqlLobError::ConfigError(format!("invalid binding settings: {err}"))
    }
}
