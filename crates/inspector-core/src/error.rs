use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InspectorError {
    /// Non-2xx answer from the comparison service.
    #[error("Error: {reason}")]
    Status { code: u16, reason: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Missing required fields: {0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl InspectorError {
    /// Build a status error from the response's reason phrase, which may be
    /// empty over HTTP/2.
    pub fn from_status(code: u16, reason: &str) -> Self {
        let reason = match reason.trim() {
            "" => format!("HTTP {}", code),
            r => r.to_string(),
        };
        InspectorError::Status { code, reason }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            InspectorError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, InspectorError>;
