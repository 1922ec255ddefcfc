use thiserror::Error;

/// Convenience result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error type shared by the collaborators around the cleaning core.
///
/// The cleaning pipeline itself is total over rectangular tables and never
/// fails; every variant here belongs to upload intake or result delivery.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV intake/delivery error (ragged rows, unparseable delimited text).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The multipart upload payload could not be read.
    #[error("invalid upload: {0}")]
    InvalidUpload(String),

    /// The uploaded file exceeds the configured size limit.
    #[error("upload exceeds limit of {limit} bytes")]
    UploadTooLarge { limit: usize },

    /// A retrieval was attempted with no cleaned payload pending.
    #[error("no cleaned file available")]
    NoResultPending,
}
