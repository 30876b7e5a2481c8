use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Response error: {0}")]
    ResponseError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("A generation request is already in flight")]
    Busy,
}

impl From<reqwest::Error> for GenError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            GenError::ResponseError(e.to_string())
        } else {
            GenError::RequestError(e.to_string())
        }
    }
}

impl From<serde_json::Error> for GenError {
    fn from(e: serde_json::Error) -> Self {
        GenError::SerializationError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GenError::ValidationError("prompt is required".into());
        assert_eq!(err.to_string(), "Validation error: prompt is required");
        assert_eq!(
            GenError::Busy.to_string(),
            "A generation request is already in flight"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let err: GenError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, GenError::SerializationError(_)));
    }
}
