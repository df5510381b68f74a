pub mod basic_credential;
pub mod byte_count;
pub mod olvm_url;

pub use basic_credential::BasicCredential;
pub use byte_count::ByteCount;
pub use olvm_url::OlvmUrl;
