use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{kind} not found")]
    NotFound { kind: &'static str, id: String },
}
