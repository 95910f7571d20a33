/// Default base URL for the warehouse REST API
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";
/// Key under which the session token is persisted in the token store
pub const TOKEN_STORAGE_KEY: &str = "warehouse_token";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
/// User agent string used in HTTP requests to identify this client to the warehouse API
pub const USER_AGENT: &str = "warehouse-client/0.1.0";
