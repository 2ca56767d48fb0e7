use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("upstream error: {0}")]
    Upstream(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<CatalogServiceError> for AppError {
    fn from(err: CatalogServiceError) -> Self {
        match err {
            CatalogServiceError::Invalid(msg) => AppError::BadRequest(msg),
            CatalogServiceError::Upstream(msg) => AppError::Upstream(msg),
            CatalogServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
