use crate::{
    core::{
        domain::{
            error::{OlvmError, OlvmResult},
            model::{
                check_result::{CheckResult, ServiceState},
                perf_data::{PerfData, format_float},
                storage_domain::{DomainCapacity, StorageDomainRecord, find_domain},
                thresholds::Thresholds,
            },
        },
        infrastructure::api_client::ApiClient,
    },
    storage::application::response::storage_domains_response::StorageDomainsResponse,
};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Engine endpoint listing every storage domain.
pub const STORAGE_DOMAINS_PATH: &str = "/ovirt-engine/api/storagedomains";

/// Anything that can list the manager's storage domains.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageDomainSource: Send + Sync {
    async fn storage_domains(&self) -> OlvmResult<Vec<StorageDomainRecord>>;
}

#[async_trait]
impl StorageDomainSource for ApiClient {
    async fn storage_domains(&self) -> OlvmResult<Vec<StorageDomainRecord>> {
        let response: StorageDomainsResponse = self.get(STORAGE_DOMAINS_PATH).await?;
        Ok(response.storage_domain)
    }
}

/// Reports the used and available space of one storage domain.
pub struct DomainSizeCheck<S> {
    source: S,
    thresholds: Thresholds,
}

impl<S: StorageDomainSource> DomainSizeCheck<S> {
    pub fn new(source: S, thresholds: Thresholds) -> Self {
        Self { source, thresholds }
    }

    /// Looks up `name` (case-insensitive) and builds the status line.
    ///
    /// The first matching domain in list order is reported.
    ///
    /// # Errors
    ///
    /// - `OlvmError::DomainNotFound` if no domain has that name
    /// - `OlvmError::MissingCapacity` if the match has no used/available figures
    /// - `OlvmError::InvalidCapacity` if one of those figures is not an integer
    /// - any error from the source (timeout, connection, status, parse)
    #[instrument(skip(self))]
    pub async fn execute(&self, name: &str) -> OlvmResult<CheckResult> {
        let domains = self.source.storage_domains().await?;
        debug!(count = domains.len(), "Listed storage domains");

        let (domain, skipped) =
            find_domain(&domains, name).ok_or_else(|| OlvmError::DomainNotFound {
                name: name.to_string(),
            })?;
        if skipped > 0 {
            warn!(
                skipped,
                "Several storage domains share this name, reporting the first one"
            );
        }

        let capacity = domain.capacity(name)?;

        Ok(self.report(name, capacity))
    }

    fn report(&self, name: &str, capacity: DomainCapacity) -> CheckResult {
        let state = self.thresholds.evaluate(capacity.available_gib);

        let available = PerfData::new("available_space", capacity.available_gib, "GB")
            .with_ranges(
                self.thresholds.warning_range(),
                self.thresholds.critical_range(),
            );
        let used = PerfData::new("used_space", capacity.used_gib, "GB");

        let summary = format!(
            "Storage Domain {name} available space {} GB and used space {} GB | {available} {used}",
            format_float(available.value()),
            format_float(used.value()),
        );
        let message = match state {
            ServiceState::Ok => summary,
            _ => format!("{state}: {summary}"),
        };
        CheckResult::new(message, state)
    }
}
