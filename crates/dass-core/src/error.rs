use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown subscale: {0}")]
    UnknownSubscale(String),

    #[error("unknown severity: {0}")]
    UnknownSeverity(String),
}
