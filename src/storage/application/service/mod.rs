pub mod domain_size_service;
