use thiserror::Error;

/// Core error type for the gantry framework
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid value for {field}: got '{value}', expected {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    #[error("Module error: {message}")]
    Module { message: String },

    #[error("Duplicate module: {name}")]
    DuplicateModule { name: String },
}

impl CoreError {
    /// Create a validation error
    pub fn validation<T: Into<String>>(message: T) -> Self {
        CoreError::Validation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        CoreError::Configuration {
            message: message.into(),
        }
    }

    /// Create a module error
    pub fn module<T: Into<String>>(message: T) -> Self {
        CoreError::Module {
            message: message.into(),
        }
    }
}

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;
