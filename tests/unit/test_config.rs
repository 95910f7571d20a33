use std::env;
use warehouse_client::config::Config;
use warehouse_client::constants::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, TOKEN_STORAGE_KEY};

// Defaults and overrides in one test: the WAREHOUSE_* variables are
// process-wide, so the two phases must not run in parallel.
#[test]
fn config_reads_environment_with_defaults() {
    unsafe {
        env::remove_var("WAREHOUSE_API_URL");
        env::remove_var("WAREHOUSE_TIMEOUT");
        env::remove_var("WAREHOUSE_TOKEN_KEY");
        env::remove_var("WAREHOUSE_TOKEN_DIR");

        let config = Config::new();
        assert_eq!(config.rest_api.base_url, DEFAULT_API_URL);
        assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.storage.token_key, TOKEN_STORAGE_KEY);
        assert_eq!(config.storage.token_dir, ".");

        env::set_var("WAREHOUSE_API_URL", "https://warehouse.example.com/api");
        env::set_var("WAREHOUSE_TIMEOUT", "30");

        let config = Config::new();
        assert_eq!(config.rest_api.base_url, "https://warehouse.example.com/api");
        assert_eq!(config.rest_api.timeout, 30);

        env::remove_var("WAREHOUSE_API_URL");
        env::remove_var("WAREHOUSE_TIMEOUT");
    }
}
