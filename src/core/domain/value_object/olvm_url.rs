use crate::core::domain::error::ValidationError;
use url::Url;

/// Maximum accepted URL length (RFC 7230 practical limit).
const MAX_URL_LENGTH: usize = 2083;

/// A validated base URL of the virtualization manager (e.g. `https://olvm.example.com`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OlvmUrl(Url);

impl OlvmUrl {
    /// Parses and validates a base URL.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        validate_url(value)?;
        let url = Url::parse(value.trim())
            .map_err(|e| ValidationError::Format(format!("Invalid URL format: {e}")))?;
        Ok(Self(url))
    }

    /// Joins an API path onto the base URL.
    ///
    /// A path prefix on the base URL (reverse proxies) is kept.
    pub fn with_path(&self, path: &str) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Validates a manager base URL.
pub(crate) fn validate_url(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Field {
            field: "url".to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }
    if value.len() > MAX_URL_LENGTH {
        return Err(ValidationError::Format(format!(
            "URL exceeds maximum length of {MAX_URL_LENGTH} characters"
        )));
    }

    let url = Url::parse(value)
        .map_err(|e| ValidationError::Format(format!("Invalid URL format: {e}")))?;

    if !matches!(url.scheme(), "https" | "http") {
        return Err(ValidationError::ConstraintViolation(format!(
            "Invalid scheme '{}'. Must be one of: https, http",
            url.scheme()
        )));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::Field {
            field: "url".to_string(),
            message: "URL must contain a host".to_string(),
        });
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ValidationError::ConstraintViolation(
            "Base URL cannot carry a query string or fragment".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(validate_url("https://olvmmanager.domain.com").is_ok());
        assert!(validate_url("https://10.0.0.5:8443/").is_ok());
        assert!(validate_url("http://localhost:8080").is_ok());
    }

    #[test]
    fn test_invalid_urls() {
        let test_cases = vec![
            ("", "empty"),
            ("olvm.example.com", "missing scheme"),
            ("ftp://olvm.example.com", "unsupported scheme"),
            ("https://olvm.example.com/?x=1", "query string"),
        ];
        for (url, case) in test_cases {
            assert!(validate_url(url).is_err(), "Case '{case}' should fail: {url}");
        }

        let long = format!("https://{}.com", "a".repeat(MAX_URL_LENGTH));
        assert!(matches!(validate_url(&long), Err(ValidationError::Format(_))));
    }

    #[test]
    fn test_url_composition() {
        let url = OlvmUrl::parse("https://olvmmanager.domain.com").unwrap();
        assert_eq!(
            url.with_path("/ovirt-engine/api/storagedomains"),
            "https://olvmmanager.domain.com/ovirt-engine/api/storagedomains"
        );

        let proxied = OlvmUrl::parse("https://gateway.example.com/olvm/").unwrap();
        assert_eq!(
            proxied.with_path("ovirt-engine/api/storagedomains"),
            "https://gateway.example.com/olvm/ovirt-engine/api/storagedomains"
        );
    }
}
