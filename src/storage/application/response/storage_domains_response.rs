use crate::core::domain::model::storage_domain::StorageDomainRecord;
use serde::Deserialize;

/// Body of `GET /ovirt-engine/api/storagedomains`.
#[derive(Debug, Deserialize)]
pub struct StorageDomainsResponse {
    pub storage_domain: Vec<StorageDomainRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_engine_listing() {
        let response: StorageDomainsResponse = serde_json::from_value(serde_json::json!({
            "storage_domain": [
                {"name": "DATA1", "used": "107374182400", "available": "53687091200"},
                {"name": "ISO", "type": "iso", "status": "unattached"}
            ]
        }))
        .unwrap();
        assert_eq!(response.storage_domain.len(), 2);
        assert_eq!(response.storage_domain[1].used, None);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let result: Result<StorageDomainsResponse, _> =
            serde_json::from_value(serde_json::json!({"fault": {"reason": "Operation Failed"}}));
        assert!(result.is_err());

        let result: Result<StorageDomainsResponse, _> =
            serde_json::from_value(serde_json::json!({"storage_domain": "DATA1"}));
        assert!(result.is_err());
    }
}
