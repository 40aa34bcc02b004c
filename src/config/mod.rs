mod config;
mod logging;

pub use config::{load_config, print_schema, Config, ConfigV1};
pub use logging::LoggingConfig;
