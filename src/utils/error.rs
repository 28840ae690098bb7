use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("{message}")]
    InvalidInput { message: String },

    #[error("{message}")]
    Notification { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl NotifierError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn notification(message: impl Into<String>) -> Self {
        Self::Notification {
            message: message.into(),
        }
    }

    /// Error name reported to the workflow, matched by its catch rules.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "InvalidInputError",
            Self::Notification { .. } => "BookingNotificationException",
            Self::IoError(_) | Self::SerializationError(_) => "InternalError",
            Self::MissingConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "ConfigurationError"
            }
        }
    }
}

#[cfg(feature = "lambda")]
impl From<NotifierError> for lambda_runtime::Diagnostic {
    fn from(err: NotifierError) -> Self {
        lambda_runtime::Diagnostic {
            error_type: err.error_type().to_string(),
            error_message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NotifierError>;
