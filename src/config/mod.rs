// Configuration module entry point
// Manages application configuration and runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, FunctionConfig, LoggingConfig, PerformanceConfig, ServerConfig};

/// Config file used when no path is given (extension resolved by `config`)
pub const DEFAULT_CONFIG_PATH: &str = "config";

/// Identifier used for the invocation context when none is configured
pub const DEFAULT_FUNCTION_ARN: &str = "arn:aws:lambda:eu-west-3:000000000000:function:visio-health";

/// Prefix for environment overrides, e.g. `VISIO__SERVER__PORT=9000`
const ENV_PREFIX: &str = "VISIO";

impl Config {
    /// Load configuration from specified file path (extension optional).
    /// A missing file is not an error; defaults and environment still apply.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::load_with_env(config_path, environment())
    }

    fn load_with_env(
        config_path: &str,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(env)
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("performance.shutdown_timeout", 10)?
            .set_default("function.arn", DEFAULT_FUNCTION_ARN)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Environment overrides: `VISIO__SECTION__KEY`
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
