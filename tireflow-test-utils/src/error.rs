use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    ClientError(#[from] tireflow::error::Error),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}
