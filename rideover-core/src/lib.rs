pub mod latency;
pub mod repository;
pub mod session;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("External resource failed to load: {0}")]
    ExternalLoad(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
