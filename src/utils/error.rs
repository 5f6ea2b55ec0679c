use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CatalogError::IoError(_) => ErrorSeverity::Critical,
            CatalogError::SerializationError(_) => ErrorSeverity::High,
            CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => ErrorSeverity::Medium,
        }
    }

    /// Exit code used by the binary for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CatalogError::IoError(_) => {
                "Check that the config file exists and is readable".to_string()
            }
            CatalogError::SerializationError(_) => {
                "Retry without --json to get plain text output".to_string()
            }
            CatalogError::ConfigValidationError { field, .. } => {
                format!("Fix the '{}' section of the config file", field)
            }
            CatalogError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            CatalogError::MissingConfigError { field } => {
                format!("Add '{}' to the config file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::IoError(e) => format!("Could not read input: {}", e),
            CatalogError::SerializationError(e) => format!("Could not render output: {}", e),
            CatalogError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            CatalogError::InvalidConfigValueError { field, value, reason } => {
                format!("{} = '{}' is not accepted ({})", field, value, reason)
            }
            CatalogError::MissingConfigError { field } => {
                format!("Missing configuration value: {}", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
