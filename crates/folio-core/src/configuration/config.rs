#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::IntoEnumIterator;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Eq, PartialEq, EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    BackendURL,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return Config::default(key);
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let res = match key {
            ConfigKey::BackendURL => "http://localhost:8000",
        };

        return res.to_string();
    }

    /// Applies defaults, then any FOLIO_* environment overrides.
    pub fn load() {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key));

            let env_key = format!("FOLIO_{}", key.to_string().replace('-', "_").to_uppercase());
            if let Ok(val) = env::var(env_key) {
                if !val.is_empty() {
                    Config::set(key, &val);
                }
            }
        }

        tracing::debug!(
            backend_url = Config::get(ConfigKey::BackendURL),
            "config loaded"
        );
    }
}
