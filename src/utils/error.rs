use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Receipt not found")]
    ReceiptNotFound,

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Config file parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ServiceError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ReceiptNotFound => ErrorCategory::NotFound,
            Self::InvalidConfigValue { .. }
            | Self::MissingConfig { .. }
            | Self::Config { .. }
            | Self::ConfigParse(_) => ErrorCategory::Config,
            Self::Io(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ReceiptNotFound => ErrorSeverity::Low,
            Self::InvalidConfigValue { .. }
            | Self::MissingConfig { .. }
            | Self::Config { .. }
            | Self::ConfigParse(_) => ErrorSeverity::High,
            Self::Io(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ReceiptNotFound => "Receipt not found".to_string(),
            Self::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration value for '{}' is invalid: {}", field, reason)
            }
            Self::MissingConfig { field } => {
                format!("Configuration is missing required field '{}'", field)
            }
            Self::Config { message } => format!("Configuration problem: {}", message),
            Self::ConfigParse(e) => format!("Could not parse config file: {}", e),
            Self::Io(e) => format!("System error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ReceiptNotFound => "Check that the receipt id came from a submission",
            Self::InvalidConfigValue { .. } | Self::MissingConfig { .. } | Self::Config { .. } => {
                "Check the command-line flags and config file values"
            }
            Self::ConfigParse(_) => "Check the config file for TOML syntax errors",
            Self::Io(_) => "Check that the port is free and the bind address is local",
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
