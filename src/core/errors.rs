use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetflowError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("SetflowError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for SetflowError {
    fn from(error: std::io::Error) -> Self {
        SetflowError::Io(Box::new(error))
    }
}
