use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    Config,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{code:?}: {message}")]
pub struct TrainerError {
    pub code: ErrorCode,
    pub message: String,
}

impl TrainerError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Validation, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_and_message() {
        let err = TrainerError::validation("estimate must be finite");
        assert_eq!(err.to_string(), "Validation: estimate must be finite");
    }
}
