use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    #[error("Unexpected result: {0}")]
    Unexpected(String),
}
