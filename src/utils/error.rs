use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrimbonError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Locale parsing error: {0}")]
    LocaleParseError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Locale error: {message}")]
    LocaleError { message: String },
}

pub type Result<T> = std::result::Result<T, PrimbonError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PrimbonError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PrimbonError::IoError(_) => ErrorSeverity::Critical,
            PrimbonError::LocaleParseError(_) | PrimbonError::LocaleError { .. } => {
                ErrorSeverity::High
            }
            PrimbonError::SerializationError(_) => ErrorSeverity::High,
            PrimbonError::InvalidConfigValueError { .. }
            | PrimbonError::MissingConfigError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PrimbonError::IoError(e) => format!("Could not read a required file: {}", e),
            PrimbonError::LocaleParseError(e) => {
                format!("A locale file is not valid TOML: {}", e)
            }
            PrimbonError::SerializationError(e) => {
                format!("Could not serialize the report: {}", e)
            }
            PrimbonError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Invalid {}: '{}' ({})", field, value, reason),
            PrimbonError::MissingConfigError { field } => {
                format!("Missing required input: {}", field)
            }
            PrimbonError::LocaleError { message } => format!("Locale problem: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PrimbonError::IoError(_) => "Check that the path exists and is readable",
            PrimbonError::LocaleParseError(_) | PrimbonError::LocaleError { .. } => {
                "Fix the locale TOML file, or omit --locale-dir to use the built-in locales"
            }
            PrimbonError::SerializationError(_) => "Re-run without --json to get the text report",
            PrimbonError::InvalidConfigValueError { .. } => {
                "Birth dates use DD-MM-YYYY, e.g. 18-04-1980"
            }
            PrimbonError::MissingConfigError { .. } => "Run with --help to see required arguments",
        }
    }
}
