//! Error types and handling for the `UVDash` application

use thiserror::Error;

/// Main error type for the `UVDash` application
#[derive(Error, Debug)]
pub enum UvDashError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl UvDashError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            UvDashError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            UvDashError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            UvDashError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            UvDashError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = UvDashError::config("missing port");
        assert!(matches!(config_err, UvDashError::Config { .. }));

        let validation_err = UvDashError::validation("cloud cover out of range");
        assert!(matches!(validation_err, UvDashError::Validation { .. }));

        let general_err = UvDashError::general("something went wrong");
        assert!(matches!(general_err, UvDashError::General { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = UvDashError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let validation_err = UvDashError::validation("hour must be 0-23");
        assert!(validation_err.user_message().contains("hour must be 0-23"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let dash_err: UvDashError = io_err.into();
        assert!(matches!(dash_err, UvDashError::Io { .. }));
    }
}
