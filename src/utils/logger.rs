use crate::utils::config::get_env_or_default;
use once_cell::sync::OnceCell;
use tracing::Level;

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initializes the global tracing subscriber once
///
/// The level is taken from the `LOGLEVEL` environment variable
/// (`trace|debug|info|warn|error`), defaulting to `info`. Safe to call from
/// every test or binary entry point; only the first call installs the
/// subscriber.
pub fn setup_logger() {
    LOGGER_INIT.get_or_init(|| {
        let level = match get_env_or_default("LOGLEVEL", String::from("info"))
            .to_lowercase()
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // try_init so an already-installed subscriber is not an error
        let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
    });
}
