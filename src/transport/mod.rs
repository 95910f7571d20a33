/// Authenticated HTTP client over the warehouse REST API
pub mod http_client;

pub use http_client::{WarehouseHttpClient, WarehouseHttpClientImpl};
