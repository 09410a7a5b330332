// Configuration module entry point
// Loads layered configuration and builds the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

pub use state::AppState;
pub use types::{Config, LoggingConfig};

/// Environment variable naming the config file; there is no implicit lookup
/// because the working directory is also the default served root
pub const CONFIG_ENV: &str = "FILE_SERVER_CONFIG";

/// Prefix for nested environment overrides, e.g. `FILE_SERVER__SERVER__ROOT`
const ENV_PREFIX: &str = "FILE_SERVER";

/// Port used when neither the environment nor a config file provides one
pub const DEFAULT_PORT: u16 = 3000;

impl Config {
    /// Load configuration from `$FILE_SERVER_CONFIG` (if set), the
    /// environment and `PORT`
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_file = std::env::var(CONFIG_ENV).ok().filter(|p| !p.is_empty());
        Self::load_from(config_file.as_deref(), std::env::var("PORT").ok())
    }

    /// Load configuration from an optional file path (extension optional).
    ///
    /// A named file must exist. `port` takes precedence over every other
    /// source; it is the value of the `PORT` environment variable when called
    /// through [`Config::load`].
    pub fn load_from(
        config_file: Option<&str>,
        port: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = config_file {
            builder = builder.add_source(config::File::with_name(path));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("server.root", ".")?
            .set_default("server.confine_to_root", false)?
            .set_default("logging.access_log", false)?
            .set_default("logging.access_log_format", "combined")?
            .set_override_option("server.port", port.filter(|p| !p.is_empty()))?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
