use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mapstyle operations
#[derive(Error, Diagnostic, Debug)]
pub enum StyleError {
    #[error("IO error: {0}")]
    #[diagnostic(code(mapstyle::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(mapstyle::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(mapstyle::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(mapstyle::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Neither a fill nor a complete stroke was configured.
    #[error("Configuration error: {message}")]
    #[diagnostic(code(mapstyle::config))]
    Configuration {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// An expression produced a value of the wrong kind for its property.
    #[error("Type validation error: {property} must be {expected}, got {found}")]
    #[diagnostic(code(mapstyle::type_validation))]
    TypeValidation {
        property: String,
        expected: String,
        found: String,
    },
}

impl StyleError {
    /// Build a configuration error with help text.
    pub(crate) fn configuration(message: impl Into<String>, help: impl Into<String>) -> Self {
        StyleError::Configuration {
            message: message.into(),
            help: Some(help.into()),
        }
    }

    /// Name of the offending property, for type validation errors.
    pub fn property(&self) -> Option<&str> {
        match self {
            StyleError::TypeValidation { property, .. } => Some(property),
            _ => None,
        }
    }

    /// Check if this is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self, StyleError::Configuration { .. })
    }
}

pub type Result<T> = std::result::Result<T, StyleError>;
