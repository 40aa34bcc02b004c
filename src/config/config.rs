use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use crate::context::ContextStoreConfig;
use crate::identity::OidcConfig;

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0: backend endpoint, token scopes, identity
/// provider, context persistence, and logging.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
pub struct ConfigV1 {
    /// Base URL of the admin API, e.g. `https://api.example.com/api`.
    pub api_base_url: String,
    /// Default OAuth scopes requested for every gateway call.
    pub scopes: Vec<String>,
    pub oidc: OidcConfig,
    pub context_store: ContextStoreConfig,
    pub logging: LoggingConfig,
}

/// Load config from "config.yaml" in the current directory, with
/// `INSPECT_ADMIN_`-prefixed environment variables taking precedence.
pub fn load_config() -> ConfigV1 {
    let figment = Figment::new()
        .merge(Yaml::file("./config.yaml"))
        .merge(Env::prefixed("INSPECT_ADMIN_"));
    let config = match figment.extract::<Config>() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };
    match config {
        Config::ConfigV1(c) => c,
    }
}

/// Print the JSON schema for the configuration to stdout.
pub fn print_schema() {
    let schema = schema_for!(Config);
    match serde_json::to_string_pretty(&schema) {
        Ok(serialized) => println!("{}", serialized),
        Err(e) => eprintln!("Error serializing schema: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CONFIG: &str = r#"
version: "1.0.0"
api_base_url: "https://api.example.com/api/"
scopes:
  - "api://inspect-admin/.default"
oidc:
  authority: "https://login.example.com/tenant-1"
  client_id: "client-1"
  redirect_uri: "http://localhost:3000/callback"
  cache_path: "/tmp/inspect-admin-identity.json"
context_store:
  enabled: true
  path: "/tmp/inspect-admin-context.json"
logging:
  level: "debug"
  format: "console"
"#;

    /// Test that a versioned YAML config parses into the v1 shape.
    #[test]
    fn test_parse_versioned_config() {
        let config: Config = Figment::new()
            .merge(Yaml::string(TEST_CONFIG))
            .extract()
            .expect("Failed to parse test config YAML");
        let Config::ConfigV1(config) = config;
        assert_eq!(config.api_base_url, "https://api.example.com/api/");
        assert_eq!(config.scopes.len(), 1);
        assert_eq!(config.oidc.client_id, "client-1");
        assert!(config.context_store.enabled);
        assert_eq!(config.logging.level, "debug");
    }
}
