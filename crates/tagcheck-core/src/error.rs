use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid rule configuration: {0}")]
    Configuration(String),

    #[error("Failed to evaluate `{attribute}` of {resource}: {message}")]
    Evaluation {
        resource: String,
        attribute: String,
        message: String,
    },

    #[error("Failed to parse {file}: {message}")]
    Parse { file: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
