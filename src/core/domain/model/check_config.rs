//! Runtime configuration of a storage domain check.

use crate::core::domain::{
    error::{OlvmError, OlvmResult, ValidationError},
    model::thresholds::{Thresholds, validate_thresholds},
    value_object::{basic_credential::BasicCredential, olvm_url::OlvmUrl},
};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Where the engine's CA certificate is installed on the manager host.
pub const DEFAULT_CA_FILE: &str = "/etc/pki/ovirt-engine/ca.pem";

/// Validated configuration, built once at startup and passed by reference.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    url: OlvmUrl,
    ca_file: Option<PathBuf>,
    credential: BasicCredential,
    timeout: Duration,
    thresholds: Thresholds,
}

impl CheckConfig {
    /// Creates a new builder for CheckConfig
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::default()
    }

    pub fn url(&self) -> &OlvmUrl {
        &self.url
    }

    /// CA bundle used to verify the manager's certificate. `None` uses the
    /// built-in trust store.
    pub fn ca_file(&self) -> Option<&Path> {
        self.ca_file.as_deref()
    }

    pub fn credential(&self) -> &BasicCredential {
        &self.credential
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }
}

/// Builder for CheckConfig
///
/// # Examples
///
/// ```
/// use olvm_storage_check::CheckConfig;
///
/// let config = CheckConfig::builder()
///     .url("https://olvmmanager.domain.com")
///     .ca_file("/etc/pki/ovirt-engine/ca.pem")
///     .credentials("admin@internal", "secret")
///     .warning(200.0)
///     .critical(100.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.timeout().as_secs(), 30);
/// ```
#[derive(Debug, Default)]
pub struct CheckConfigBuilder {
    url: Option<String>,
    ca_file: Option<PathBuf>,
    auth_token: Option<String>,
    username: Option<String>,
    password: Option<String>,
    timeout_seconds: Option<u64>,
    warning: Option<f64>,
    critical: Option<f64>,
}

impl CheckConfigBuilder {
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn ca_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.ca_file = Some(path.into());
        self
    }

    /// Uses an already base64-encoded Basic token. Takes precedence over
    /// [`credentials`](Self::credentials).
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Warning low-water mark on available space, in GiB.
    pub fn warning(mut self, gib: f64) -> Self {
        self.warning = Some(gib);
        self
    }

    /// Critical low-water mark on available space, in GiB.
    pub fn critical(mut self, gib: f64) -> Self {
        self.critical = Some(gib);
        self
    }

    pub fn build(self) -> OlvmResult<CheckConfig> {
        let url = OlvmUrl::parse(&self.url.ok_or_else(|| ValidationError::Field {
            field: "url".to_string(),
            message: "Manager URL is required".to_string(),
        })?)?;

        let credential = match (self.auth_token, self.username, self.password) {
            (Some(token), _, _) => BasicCredential::from_token(&token)?,
            (None, Some(username), Some(password)) => {
                BasicCredential::from_user_password(&username, &password)?
            }
            _ => {
                return Err(OlvmError::Configuration(
                    "Either an authorization token or a username and password is required"
                        .to_string(),
                ));
            }
        };

        let timeout_seconds = self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS);
        if timeout_seconds == 0 {
            return Err(ValidationError::Field {
                field: "timeout".to_string(),
                message: "Timeout cannot be 0".to_string(),
            }
            .into());
        }

        validate_thresholds(self.warning, self.critical)?;

        Ok(CheckConfig {
            url,
            ca_file: self.ca_file,
            credential,
            timeout: Duration::from_secs(timeout_seconds),
            thresholds: Thresholds::new_unchecked(self.warning, self.critical),
        })
    }
}
