use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("missing or invalid bearer token")]
    Unauthorized,
    #[error("store rejected the request: {0}")]
    Rejected(String),
    #[error("couldn't parse store document: {0}")]
    CorruptedDocument(String),
    #[error("operation failed: {0}")]
    OperationFailed(String),
}

impl StoreError {
    pub fn transport(err: impl ToString) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn corrupted_document(err: impl ToString) -> Self {
        Self::CorruptedDocument(err.to_string())
    }

    pub fn operation_failed(err: impl ToString) -> Self {
        Self::OperationFailed(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
