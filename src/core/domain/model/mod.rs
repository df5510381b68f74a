pub mod check_config;
pub mod check_result;
pub mod perf_data;
pub mod storage_domain;
pub mod thresholds;
