//! Monitoring check for oVirt / Oracle Linux Virtualization Manager storage domains.
//!
//! The check queries the engine's REST API once, looks a storage domain up by
//! name and reports its used and available space as a Nagios/Centreon style
//! status line with performance data. The result maps to the usual plugin
//! exit codes (OK=0, WARNING=1, CRITICAL=2, UNKNOWN=3).

mod core;
mod storage;

#[cfg(test)]
mod tests;

pub use crate::core::domain::{
    error::{OlvmError, OlvmResult, ValidationError},
    model::{
        check_config::{CheckConfig, CheckConfigBuilder, DEFAULT_CA_FILE, DEFAULT_TIMEOUT_SECONDS},
        check_result::{CheckResult, ServiceState},
        perf_data::PerfData,
        storage_domain::{BYTES_PER_GIB, DomainCapacity, StorageDomainRecord},
        thresholds::Thresholds,
    },
    value_object::{BasicCredential, ByteCount, OlvmUrl},
};
pub use crate::storage::application::service::domain_size_service::{
    DomainSizeCheck, STORAGE_DOMAINS_PATH, StorageDomainSource,
};
use crate::core::infrastructure::api_client::ApiClient;

/// Runs the storage domain check and returns the line to print.
///
/// Every failure is folded into the returned [`CheckResult`]; the caller only
/// has to print it and exit with [`CheckResult::exit_code`].
///
/// # Examples
///
/// ```no_run
/// use olvm_storage_check::{CheckConfig, run};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let config = CheckConfig::builder()
///         .url("https://olvmmanager.domain.com")
///         .ca_file("/etc/pki/ovirt-engine/ca.pem")
///         .credentials("admin@internal", "secret")
///         .build()
///         .unwrap();
///
///     let result = run(&config, Some("DATA1")).await;
///     println!("{result}");
///     std::process::exit(result.exit_code());
/// }
/// ```
pub async fn run(config: &CheckConfig, domain_name: Option<&str>) -> CheckResult {
    match check(config, domain_name).await {
        Ok(result) => result,
        Err(error) => CheckResult::from(error),
    }
}

async fn check(config: &CheckConfig, domain_name: Option<&str>) -> OlvmResult<CheckResult> {
    // Blank counts as missing; otherwise the name is used exactly as given
    let name = domain_name
        .filter(|name| !name.trim().is_empty())
        .ok_or(OlvmError::MissingArgument)?;

    let client = ApiClient::new(config).await?;
    DomainSizeCheck::new(client, *config.thresholds())
        .execute(name)
        .await
}
