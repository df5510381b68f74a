//! Internal HTTP client for the engine's REST API.

use crate::core::domain::{
    error::{OlvmError, OlvmResult},
    model::check_config::CheckConfig,
    value_object::OlvmUrl,
};
use hyper::ext::ReasonPhrase;
use reqwest::{
    Certificate, Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::time::Duration;
use tracing::{debug, instrument};

/// Internal HTTP client that sends authenticated JSON requests to the manager.
///
/// Every request carries `Content-Type`/`Accept: application/json` and the
/// Basic `Authorization` header. When a CA file is configured, only that
/// bundle is trusted. A single timeout bounds the whole request.
#[derive(Debug)]
pub struct ApiClient {
    http_client: Client,
    base_url: OlvmUrl,
    timeout: Duration,
}

impl ApiClient {
    /// Creates a new `ApiClient` from the check configuration.
    ///
    /// # Errors
    /// Returns `OlvmError::Configuration` if the CA bundle cannot be read or
    /// parsed, or if the HTTP client cannot be built.
    pub async fn new(config: &CheckConfig) -> OlvmResult<Self> {
        let mut builder = Client::builder()
            .default_headers(Self::default_headers(config)?)
            .timeout(config.timeout());

        if let Some(path) = config.ca_file() {
            let pem = tokio::fs::read(path).await.map_err(|e| {
                OlvmError::Configuration(format!("Cannot read CA file {}: {e}", path.display()))
            })?;
            let certificate = Certificate::from_pem(&pem).map_err(|e| {
                OlvmError::Configuration(format!("Invalid CA file {}: {e}", path.display()))
            })?;
            debug!(ca_file = %path.display(), "Trusting configured CA bundle only");
            builder = builder.tls_certs_only([certificate]);
        }

        let http_client = builder
            .build()
            .map_err(|e| OlvmError::Configuration(format!("Cannot build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: config.url().clone(),
            timeout: config.timeout(),
        })
    }

    fn default_headers(config: &CheckConfig) -> OlvmResult<HeaderMap> {
        let mut authorization = HeaderValue::from_str(&config.credential().header_value())
            .map_err(|e| OlvmError::Configuration(format!("Invalid authorization header: {e}")))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, authorization);
        Ok(headers)
    }

    /// Performs a GET request and decodes the JSON body.
    ///
    /// # Type Parameters
    /// - `T`: The expected response type (must implement `DeserializeOwned`).
    ///
    /// # Errors
    /// - `OlvmError::Timeout` if the request exceeds the configured timeout
    /// - `OlvmError::Connection` for any other transport failure
    /// - `OlvmError::HttpStatus` if the status is not `200 OK`
    /// - `OlvmError::Parse` if the body does not decode into `T`
    #[instrument(skip(self))]
    pub async fn get<T>(&self, path: &str) -> OlvmResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.base_url.with_path(path);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        let status = response.status();
        debug!(status = status.as_u16(), "Received response");

        if status != StatusCode::OK {
            return Err(OlvmError::HttpStatus {
                status: status.as_u16(),
                reason: reason_phrase(&response),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        serde_json::from_slice::<T>(&body).map_err(|e| {
            debug!(error = %e, "Failed to decode response body");
            OlvmError::Parse {
                status: status.as_u16(),
            }
        })
    }

    fn transport_error(&self, url: &str, error: reqwest::Error) -> OlvmError {
        if error.is_timeout() {
            return OlvmError::Timeout {
                seconds: self.timeout.as_secs(),
            };
        }
        OlvmError::Connection {
            url: url.to_string(),
            message: root_cause(&error),
        }
    }
}

/// The reason phrase the server sent, or the canonical one for the status.
///
/// hyper only keeps the received phrase when it differs from the canonical one.
fn reason_phrase(response: &reqwest::Response) -> String {
    response
        .extensions()
        .get::<ReasonPhrase>()
        .map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned())
        .or_else(|| response.status().canonical_reason().map(str::to_string))
        .unwrap_or_default()
}

/// The innermost error message; reqwest's own message repeats the URL.
fn root_cause(error: &reqwest::Error) -> String {
    let mut cause: &dyn std::error::Error = error;
    while let Some(source) = cause.source() {
        cause = source;
    }
    cause.to_string()
}
