//! Host configuration read from the process environment.
//!
//! | Variable                    | Default                  |
//! |-----------------------------|--------------------------|
//! | `SENSOR_HOST`               | `127.0.0.1`              |
//! | `SENSOR_PORT`               | `8080`                   |
//! | `SENSOR_API_URL`            | `http://127.0.0.1:8000`  |
//! | `SENSOR_CSV_UPLOAD_PATH`    | `/aqi/air-quality-sites` |
//! | `SENSOR_ALL_REGIONS_PATH`   | `/aqi/all-regions`       |
//! | `SENSOR_ATTEMPT_TIMEOUT_MS` | `30000`                  |
//! | `SENSOR_MAX_RETRIES`        | `3`                      |
//! | `SENSOR_OPEN_BROWSER`       | `true`                   |
//!
//! The API variables only describe where the remote sensor API lives; they are
//! handed to the frontend through `GET /api/config`.

use common::model::config::DashboardConfig;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got '{value}'")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    pub dashboard: DashboardConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source; unset keys take their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = get("SENSOR_HOST", "127.0.0.1");
        let port = parse(&lookup, "SENSOR_PORT", 8080u16, "a port number")?;
        let open_browser = parse_bool(&lookup, "SENSOR_OPEN_BROWSER", true)?;

        let mut dashboard = DashboardConfig::from_api(
            &get("SENSOR_API_URL", "http://127.0.0.1:8000"),
            &get("SENSOR_CSV_UPLOAD_PATH", "/aqi/air-quality-sites"),
            &get("SENSOR_ALL_REGIONS_PATH", "/aqi/all-regions"),
        );
        dashboard.attempt_timeout_ms = parse(
            &lookup,
            "SENSOR_ATTEMPT_TIMEOUT_MS",
            DashboardConfig::DEFAULT_ATTEMPT_TIMEOUT_MS,
            "a number of milliseconds",
        )?;
        dashboard.max_retries = parse(
            &lookup,
            "SENSOR_MAX_RETRIES",
            common::upload::DEFAULT_MAX_RETRIES,
            "a positive integer",
        )?;
        if dashboard.max_retries == 0 {
            return Err(ConfigError::Invalid {
                key: "SENSOR_MAX_RETRIES",
                value: "0".to_string(),
                expected: "a positive integer",
            });
        }

        Ok(Self {
            host,
            port,
            open_browser,
            dashboard,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse<F, T>(
    lookup: &F,
    key: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            value,
            expected,
        }),
    }
}

fn parse_bool<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).as_deref().map(str::trim) {
        None => Ok(default),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some("0" | "false" | "no" | "off") => Ok(false),
        Some(other) => Err(ConfigError::Invalid {
            key,
            value: other.to_string(),
            expected: "a boolean",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_with(&[]).unwrap();
        assert_eq!(config.url(), "http://127.0.0.1:8080");
        assert!(config.open_browser);
        assert_eq!(
            config.dashboard.upload_url,
            "http://127.0.0.1:8000/aqi/air-quality-sites"
        );
        assert_eq!(
            config.dashboard.regions_url,
            "http://127.0.0.1:8000/aqi/all-regions"
        );
        assert_eq!(config.dashboard.max_retries, 3);
        assert_eq!(config.dashboard.attempt_timeout_ms, 30_000);
    }

    #[test]
    fn overrides_are_read() {
        let config = config_with(&[
            ("SENSOR_PORT", "9090"),
            ("SENSOR_API_URL", "https://sensors.example.org/"),
            ("SENSOR_CSV_UPLOAD_PATH", "upload"),
            ("SENSOR_ATTEMPT_TIMEOUT_MS", "5000"),
            ("SENSOR_MAX_RETRIES", "5"),
            ("SENSOR_OPEN_BROWSER", "false"),
        ])
        .unwrap();
        assert_eq!(config.port, 9090);
        assert!(!config.open_browser);
        assert_eq!(config.dashboard.upload_url, "https://sensors.example.org/upload");
        assert_eq!(config.dashboard.attempt_timeout_ms, 5000);
        assert_eq!(config.dashboard.max_retries, 5);
    }

    #[test]
    fn zero_retries_is_rejected() {
        let err = config_with(&[("SENSOR_MAX_RETRIES", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "SENSOR_MAX_RETRIES", .. }));
    }

    #[test]
    fn malformed_values_name_the_variable() {
        let err = config_with(&[("SENSOR_PORT", "eighty")]).unwrap_err();
        assert_eq!(err.to_string(), "SENSOR_PORT must be a port number, got 'eighty'");

        let err = config_with(&[("SENSOR_OPEN_BROWSER", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "SENSOR_OPEN_BROWSER", .. }));
    }
}
