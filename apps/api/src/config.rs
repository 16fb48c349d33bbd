//! Shipment API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//! A `.env` file in the working directory is read first (see `main`).
//!
//! | Variable                   | Default           |
//! |----------------------------|-------------------|
//! | `SERVER_HOST`              | `0.0.0.0`         |
//! | `SERVER_PORT`              | `8080`            |
//! | `DATABASE_PATH`            | `./shipments.db`  |
//! | `DATABASE_MAX_CONNECTIONS` | `5`               |
//! | `PRICING_RULES_PATH`       | unset (defaults)  |

use std::env;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use shipment_core::{PricingRules, RulesError};

/// Shipment API configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: IpAddr,

    /// HTTP server port
    pub port: u16,

    /// SQLite database file
    pub database_path: PathBuf,

    /// Pool size
    pub database_max_connections: u32,

    /// Optional TOML file overriding the built-in pricing rules
    pub pricing_rules_path: Option<PathBuf>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = ApiConfig {
            host: lookup("SERVER_HOST")
                .unwrap_or_else(|| "0.0.0.0".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_HOST".to_string()))?,

            port: lookup("SERVER_PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,

            database_path: lookup("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./shipments.db")),

            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|| "5".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,

            pricing_rules_path: lookup("PRICING_RULES_PATH")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        };

        if config.database_max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "DATABASE_MAX_CONNECTIONS".to_string(),
            ));
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Reads the pricing rules file, or returns the built-in rules when
    /// none is configured.
    pub fn pricing_rules(&self) -> Result<PricingRules, ConfigError> {
        match &self.pricing_rules_path {
            Some(path) => load_pricing_rules(path),
            None => Ok(PricingRules::default()),
        }
    }
}

/// Parses and validates a TOML pricing rules file.
///
/// ```toml
/// [region]
/// nordic = ["SE", "NO", "DK", "FI", "IS"]
/// european_factor = 1.75
///
/// [[weight]]
/// name = "small"
/// upper = 11.0
/// factor = 100
/// ```
pub fn load_pricing_rules(path: &Path) -> Result<PricingRules, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::RulesFile {
        path: path.to_path_buf(),
        source,
    })?;

    let rules: PricingRules = toml::from_str(&text).map_err(|e| ConfigError::InvalidRules {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    rules.validate()?;
    Ok(rules)
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Cannot read pricing rules file {}: {source}", path.display())]
    RulesFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid pricing rules in {}: {message}", path.display())]
    InvalidRules { path: PathBuf, message: String },

    #[error("Invalid pricing rules: {0}")]
    Rules(#[from] RulesError),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.socket_addr(), "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.database_path, PathBuf::from("./shipments.db"));
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.pricing_rules_path, None);
        assert_eq!(config.pricing_rules().unwrap(), PricingRules::default());
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "3000"),
            ("DATABASE_PATH", "/tmp/ship.db"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr(), "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.database_path, PathBuf::from("/tmp/ship.db"));
        assert_eq!(config.database_max_connections, 12);
    }

    #[test]
    fn test_invalid_values_name_the_variable() {
        let err = ApiConfig::from_lookup(lookup(&[("SERVER_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref var) if var == "SERVER_PORT"));

        let err = ApiConfig::from_lookup(lookup(&[("DATABASE_MAX_CONNECTIONS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref var) if var == "DATABASE_MAX_CONNECTIONS"));

        let err = ApiConfig::from_lookup(lookup(&[("SERVER_HOST", "localhost:1")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref var) if var == "SERVER_HOST"));
    }

    #[test]
    fn test_rules_file_overrides_defaults() {
        let path = env::temp_dir().join(format!("shipment-rules-{}.toml", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
            [region]
            european_factor = 2.0
            "#
        )
        .unwrap();

        let config = ApiConfig::from_lookup(lookup(&[(
            "PRICING_RULES_PATH",
            path.to_str().unwrap(),
        )]))
        .unwrap();
        let rules = config.pricing_rules().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(rules.region.european_factor, 2.0);
        assert_eq!(rules.weight, PricingRules::default().weight);
    }

    #[test]
    fn test_missing_rules_file() {
        let err = load_pricing_rules(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::RulesFile { .. }));
    }
}
