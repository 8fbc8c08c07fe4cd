use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Ollama error: {0}")]
    Ollama(String),

    #[error("Model {model} failed: {message}")]
    Generation { model: String, message: String },

    #[error("Embedding error: {0}")]
    Embedding(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
