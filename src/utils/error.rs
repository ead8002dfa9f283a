use thiserror::Error;

#[derive(Error, Debug)]
pub enum SantaError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Mail address error: {0}")]
    AddressError(#[from] lettre::address::AddressError),

    #[error("Mail composition error: {0}")]
    MessageError(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    SmtpError(#[from] lettre::transport::smtp::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Roster of {size} participant(s) cannot produce a draw (need at least 2)")]
    DegenerateRosterError { size: usize },

    #[error("Delivery to {recipient} failed: {reason}")]
    DeliveryError { recipient: String, reason: String },

    #[error("Transient artifact error: {message}")]
    ResourceError { message: String },
}

pub type Result<T> = std::result::Result<T, SantaError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Draw,
    Delivery,
    Resource,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SantaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SantaError::TomlError(_)
            | SantaError::ConfigError { .. }
            | SantaError::InvalidConfigValueError { .. }
            | SantaError::MissingConfigError { .. }
            | SantaError::ConfigValidationError { .. } => ErrorCategory::Config,
            SantaError::DegenerateRosterError { .. } => ErrorCategory::Draw,
            SantaError::AddressError(_)
            | SantaError::MessageError(_)
            | SantaError::SmtpError(_)
            | SantaError::DeliveryError { .. } => ErrorCategory::Delivery,
            SantaError::ResourceError { .. } => ErrorCategory::Resource,
            SantaError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Config | ErrorCategory::Draw => ErrorSeverity::High,
            ErrorCategory::Delivery => ErrorSeverity::Medium,
            ErrorCategory::Resource => ErrorSeverity::Low,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SantaError::IoError(e) => format!("File operation failed: {}", e),
            SantaError::TomlError(e) => format!("Config file is not valid TOML: {}", e),
            SantaError::ConfigError { message } => format!("Config problem: {}", message),
            SantaError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => {
                format!(
                    "Config field '{}' has invalid value '{}': {}",
                    field, value, reason
                )
            }
            SantaError::MissingConfigError { field } => {
                format!("Config field '{}' is required but missing", field)
            }
            SantaError::ConfigValidationError { field, message } => {
                format!("Config field '{}' failed validation: {}", field, message)
            }
            SantaError::DegenerateRosterError { size } => {
                format!("Cannot draw names among {} participant(s)", size)
            }
            SantaError::DeliveryError { recipient, reason } => {
                format!("Could not deliver to {}: {}", recipient, reason)
            }
            SantaError::AddressError(e) => format!("Bad email address: {}", e),
            SantaError::MessageError(e) => format!("Could not compose message: {}", e),
            SantaError::SmtpError(e) => format!("Mail server refused the message: {}", e),
            SantaError::ResourceError { message } => {
                format!("Temporary file problem: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Config => {
                "Check the TOML config file: sender address + credential, and one [[participants]] entry per player"
                    .to_string()
            }
            ErrorCategory::Draw => {
                "Add participants to the roster; a secret santa draw needs at least 2 people"
                    .to_string()
            }
            ErrorCategory::Delivery => {
                "Verify the SMTP host/port, the sender credential, and every recipient address, then re-run"
                    .to_string()
            }
            ErrorCategory::Resource => {
                "Check free space and permissions on the temp directory".to_string()
            }
            ErrorCategory::System => {
                "Check that the config path exists and is readable".to_string()
            }
        }
    }
}
