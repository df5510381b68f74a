use crate::core::domain::model::check_result::ServiceState;
use thiserror::Error;

/// The main error type for a storage domain check.
///
/// Every variant maps to exactly one [`ServiceState`], so a failure anywhere in
/// the request/response/report cycle becomes a deterministic plugin result.
#[derive(Error, Debug)]
pub enum OlvmError {
    /// No storage domain name was passed on the command line
    #[error("Please provide the storage domain name.")]
    MissingArgument,

    /// The HTTP request did not complete within the configured timeout
    ///
    /// # Fields
    /// * `seconds` - The configured timeout
    #[error("Request has timed out after {seconds} seconds.")]
    Timeout { seconds: u64 },

    /// Transport failure other than a timeout (refused, DNS, TLS handshake)
    ///
    /// # Fields
    /// * `url` - The URL that was requested
    /// * `message` - The underlying transport error
    #[error("Connection to {url} failed: {message}")]
    Connection { url: String, message: String },

    /// The manager answered with a status other than `200 OK`
    ///
    /// # Fields
    /// * `status` - The numeric status code
    /// * `reason` - The reason phrase sent by the server (may be empty)
    #[error("{}", status_line(*status, reason))]
    HttpStatus { status: u16, reason: String },

    /// The response body is not a JSON object carrying a `storage_domain` list
    #[error("{status} Cannot parse storage_domain.")]
    Parse { status: u16 },

    /// No storage domain matched the requested name
    #[error("Storage Domain {name} not found")]
    DomainNotFound { name: String },

    /// The matching storage domain has no `used`/`available` figures
    #[error("Storage Domain {name} does not report used/available space")]
    MissingCapacity { name: String },

    /// The matching storage domain reports a byte count that is not an integer
    #[error("Storage Domain {name} reports an invalid {field} value: {value}")]
    InvalidCapacity {
        name: String,
        field: String,
        value: String,
    },

    /// The plugin cannot run with the configuration it was given
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A configuration value failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl OlvmError {
    /// The monitoring state reported for this failure.
    ///
    /// Failures describing the storage domain or the manager's availability are
    /// CRITICAL; failures of the plugin's own setup are UNKNOWN.
    pub fn state(&self) -> ServiceState {
        match self {
            OlvmError::MissingArgument
            | OlvmError::Timeout { .. }
            | OlvmError::Connection { .. }
            | OlvmError::HttpStatus { .. }
            | OlvmError::Parse { .. }
            | OlvmError::DomainNotFound { .. } => ServiceState::Critical,
            OlvmError::MissingCapacity { .. }
            | OlvmError::InvalidCapacity { .. }
            | OlvmError::Configuration(_)
            | OlvmError::Validation(_) => ServiceState::Unknown,
        }
    }
}

fn status_line(status: u16, reason: &str) -> String {
    let reason = reason.trim();
    if reason.is_empty() {
        status.to_string()
    } else {
        format!("{status} {reason}")
    }
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a configuration value
/// was rejected, including field-specific errors and format violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with an OlvmError
pub type OlvmResult<T> = Result<T, OlvmError>;
