use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::pokeapi::PokeApiConfig;
use super::session::SessionConfig;

/// Environment variable that points at an alternative config file.
pub const CONFIG_PATH_ENV: &str = "DEXBOARD_CONFIG";

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct ConfigV1 {
    pub bind_address: String,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub pokeapi: PokeApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl ConfigV1 {
    /// Builds a config from a figment, checking the version tag.
    pub fn from_figment(figment: Figment) -> Result<ConfigV1, figment::Error> {
        match figment.extract::<Config>()? {
            Config::ConfigV1(c) => Ok(c),
        }
    }
}

/// Load config from `./config.yaml` (or `$DEXBOARD_CONFIG`), then apply
/// `DEXBOARD_*` environment overrides, e.g. `DEXBOARD_POKEAPI__LIMIT=50`.
pub fn load_config() -> ConfigV1 {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "./config.yaml".to_string());
    let figment = Figment::new()
        .merge(Yaml::file(path))
        .merge(Env::prefixed("DEXBOARD_").ignore(&["CONFIG"]).split("__"));
    match ConfigV1::from_figment(figment) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print the JSON schema for the configuration to stdout.
pub fn print_schema() -> Result<(), serde_json::Error> {
    let schema = schema_for!(Config);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_fills_defaults() {
        let yaml = r#"
version: "1.0.0"
bind_address: 127.0.0.1:9000
"#;
        let cfg = ConfigV1::from_figment(Figment::new().merge(Yaml::string(yaml))).unwrap();
        assert_eq!(cfg.bind_address, "127.0.0.1:9000");
        assert_eq!(cfg.pokeapi.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(cfg.pokeapi.offset, 0);
        assert_eq!(cfg.pokeapi.limit, 20);
        assert!(cfg.pokeapi.timeout_in_ms.is_none());
        assert_eq!(cfg.session.cookie_name, "dexboard_session");
        assert!(!cfg.session.forget_user_on_logout);
        assert_eq!(cfg.session.max_sessions, 10_000);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        let yaml = r#"
version: "0.9.0"
bind_address: 127.0.0.1:9000
"#;
        assert!(ConfigV1::from_figment(Figment::new().merge(Yaml::string(yaml))).is_err());
    }

    #[test]
    fn test_env_overrides_nested_values() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r#"
version: "1.0.0"
bind_address: 127.0.0.1:9000
pokeapi:
  limit: 20
"#,
            )?;
            jail.set_env("DEXBOARD_POKEAPI__LIMIT", "151");
            let figment = Figment::new()
                .merge(Yaml::file("config.yaml"))
                .merge(Env::prefixed("DEXBOARD_").ignore(&["CONFIG"]).split("__"));
            let cfg = ConfigV1::from_figment(figment)?;
            assert_eq!(cfg.pokeapi.limit, 151);
            Ok(())
        });
    }
}
