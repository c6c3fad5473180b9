// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → UI-friendly responses
// - Provides consistent error format for UI
// - Logs errors for debugging

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Dataset not loaded yet
    NotLoaded,

    /// Dataset or config could not be parsed
    InvalidData,

    /// File system error
    FileSystem,

    /// Other/unknown error
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotLoaded => Self {
                success: false,
                error_type: ErrorType::NotLoaded,
                message: "Movie dataset has not been loaded".to_string(),
                details: None,
            },

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);

                Self {
                    success: false,
                    error_type: ErrorType::InvalidData,
                    message: "Movie data could not be parsed".to_string(),
                    details: Some(serde_error.to_string()),
                }
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);

                Self {
                    success: false,
                    error_type: ErrorType::FileSystem,
                    message: "File system operation failed".to_string(),
                    details: Some(io_error.to_string()),
                }
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message,
                    details: None,
                }
            }
        }
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response).unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_loaded_error() {
        let error = ErrorResponse::from_app_error(AppError::NotLoaded);
        assert_eq!(error.error_type, ErrorType::NotLoaded);
        assert!(!error.success);
    }

    #[test]
    fn test_io_error_keeps_details() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "movies.json missing");
        let error = ErrorResponse::from_app_error(AppError::Io(io));
        assert_eq!(error.error_type, ErrorType::FileSystem);
        assert_eq!(error.details.as_deref(), Some("movies.json missing"));
    }

    #[test]
    fn test_result_conversion_serializes_response() {
        let result: Result<(), AppError> = Err(AppError::NotLoaded);
        let json = result.to_error_response().unwrap_err();
        assert!(json.contains("\"error_type\":\"not_loaded\""));
    }
}
