use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeasingError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),
}
