use serde::{Deserialize, Serialize};

/// Endpoints and upload tuning handed from the host to the frontend through
/// `GET /api/config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub upload_url: String,
    pub regions_url: String,
    /// Upper bound for one upload attempt, in milliseconds.
    pub attempt_timeout_ms: u32,
    pub max_retries: u32,
}

impl DashboardConfig {
    pub const DEFAULT_ATTEMPT_TIMEOUT_MS: u32 = 30_000;

    /// Builds the config from the API base URL and the two endpoint paths.
    pub fn from_api(api_url: &str, upload_path: &str, regions_path: &str) -> Self {
        Self {
            upload_url: join_url(api_url, upload_path),
            regions_url: join_url(api_url, regions_path),
            attempt_timeout_ms: Self::DEFAULT_ATTEMPT_TIMEOUT_MS,
            max_retries: crate::upload::DEFAULT_MAX_RETRIES,
        }
    }
}

/// Joins a base URL and a path with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    format!("{base}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(join_url("http://api/", "/aqi/all-regions"), "http://api/aqi/all-regions");
        assert_eq!(join_url("http://api", "aqi"), "http://api/aqi");
        assert_eq!(join_url("http://api/", ""), "http://api");
    }

    #[test]
    fn from_api_uses_upload_defaults() {
        let config = DashboardConfig::from_api("http://api", "/up", "/regions");
        assert_eq!(config.upload_url, "http://api/up");
        assert_eq!(config.regions_url, "http://api/regions");
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.attempt_timeout_ms, 30_000);
    }
}
