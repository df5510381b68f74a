pub mod storage_domains_response;
