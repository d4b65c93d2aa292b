//! Error types and handling for the `ItinerAI` application

use axum::http::StatusCode;
use thiserror::Error;

/// Main error type for the `ItinerAI` application
#[derive(Error, Debug)]
pub enum ItinerAiError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Generation API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },
}

impl ItinerAiError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ItinerAiError::Config { .. } => {
                "Configuration error. Please check your config file and Gemini API key.".to_string()
            }
            ItinerAiError::Api { .. } => {
                "Failed to generate trip plan. The AI service might be busy or unavailable."
                    .to_string()
            }
            ItinerAiError::Validation { message } => {
                format!("Invalid input: {message}")
            }
        }
    }

    /// HTTP status used when this error surfaces through the web API
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            ItinerAiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ItinerAiError::Api { .. } => StatusCode::BAD_GATEWAY,
            ItinerAiError::Config { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = ItinerAiError::config("missing API key");
        assert!(matches!(config_err, ItinerAiError::Config { .. }));

        let api_err = ItinerAiError::api("empty candidate list");
        assert!(matches!(api_err, ItinerAiError::Api { .. }));

        let validation_err = ItinerAiError::validation("days out of range");
        assert!(matches!(validation_err, ItinerAiError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = ItinerAiError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let api_err = ItinerAiError::api("test");
        assert!(api_err.user_message().contains("AI service"));

        let validation_err = ItinerAiError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ItinerAiError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ItinerAiError::api("x").status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            ItinerAiError::config("x").status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
