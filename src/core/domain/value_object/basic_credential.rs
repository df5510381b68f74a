use crate::core::domain::error::ValidationError;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::fmt;

/// A base64-encoded HTTP Basic credential (`user:password`).
///
/// The token is never printed: `Debug` is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredential(String);

impl BasicCredential {
    /// Wraps an already encoded token, as found in an `Authorization: Basic` header.
    ///
    /// A leading `Basic ` scheme is stripped if present.
    pub fn from_token(token: &str) -> Result<Self, ValidationError> {
        let token = token.trim();
        let token = token
            .strip_prefix("Basic ")
            .or_else(|| token.strip_prefix("basic "))
            .unwrap_or(token)
            .trim();
        validate_token(token)?;
        Ok(Self(token.to_string()))
    }

    /// Encodes a username (e.g. `admin@internal`) and password.
    pub fn from_user_password(username: &str, password: &str) -> Result<Self, ValidationError> {
        validate_username(username)?;
        if password.is_empty() {
            return Err(ValidationError::Field {
                field: "password".to_string(),
                message: "Password cannot be empty".to_string(),
            });
        }
        Ok(Self(STANDARD.encode(format!("{username}:{password}"))))
    }

    /// The full `Authorization` header value.
    pub fn header_value(&self) -> String {
        format!("Basic {}", self.0)
    }
}

impl fmt::Debug for BasicCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BasicCredential(<redacted>)")
    }
}

fn validate_token(token: &str) -> Result<(), ValidationError> {
    if token.is_empty() {
        return Err(ValidationError::Field {
            field: "auth".to_string(),
            message: "Authorization token cannot be empty".to_string(),
        });
    }
    let valid = token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='));
    if !valid {
        return Err(ValidationError::Format(
            "Authorization token must be base64 encoded".to_string(),
        ));
    }
    Ok(())
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::Field {
            field: "username".to_string(),
            message: "Username cannot be empty".to_string(),
        });
    }
    // ':' separates user and password in the Basic scheme
    if username.contains(':') {
        return Err(ValidationError::Format(
            "Username cannot contain ':'".to_string(),
        ));
    }
    Ok(())
}
