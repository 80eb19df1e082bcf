use std::{env, path::PathBuf};
use tabsplit_presentation::DEFAULT_CURRENCY;
use tracing_subscriber::EnvFilter;

const CURRENCY_VAR: &str = "TABSPLIT_CURRENCY";
const STATE_PATH_VAR: &str = "TABSPLIT_STATE_PATH";
const DEFAULT_STATE_PATH: &str = "tabsplit-state.json";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub currency: String,
    pub state_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let currency = lookup(CURRENCY_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_owned());
        let state_path = lookup(STATE_PATH_VAR)
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STATE_PATH), PathBuf::from);

        Self {
            currency,
            state_path,
        }
    }
}

/// Initialize logging and tracing
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.currency, "€");
        assert_eq!(config.state_path, PathBuf::from("tabsplit-state.json"));
    }

    #[test]
    fn env_overrides_defaults() {
        let config = config_from(&[
            ("TABSPLIT_CURRENCY", "$"),
            ("TABSPLIT_STATE_PATH", "/tmp/groups.json"),
        ]);
        assert_eq!(config.currency, "$");
        assert_eq!(config.state_path, PathBuf::from("/tmp/groups.json"));
    }

    #[test]
    fn blank_values_fall_back() {
        let config = config_from(&[("TABSPLIT_CURRENCY", " ")]);
        assert_eq!(config.currency, "€");
    }
}
