/// Request configuration for authenticated calls
pub mod http;
/// Request payloads sent to the warehouse API
pub mod requests;
/// Response payloads received from the warehouse API
pub mod responses;
