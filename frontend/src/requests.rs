//! HTTP calls made by the dashboard.
//!
//! - `HttpUploadSink` is the upload collaborator of the batch uploader:
//!   `POST <upload_url>` with `{ range, data }`, one call per attempt, bounded
//!   by the configured attempt timeout.
//! - `fetch_regions` is the read path: `GET <regions_url>[?region=...]`,
//!   non-2xx answers pass through as errors and are never retried.
//! - `fetch_config` asks the host for `/api/config` and falls back to the
//!   endpoints baked in at compile time.

use common::model::config::DashboardConfig;
use common::model::payload::UploadPayload;
use common::model::region::RegionsResponse;
use common::upload::UploadSink;
use common::TransportError;
use futures_util::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::warn;
use web_sys::AbortController;

const CONFIG_PATH: &str = "/api/config";

/// Some hosted API tunnels answer with an HTML interstitial unless told not to.
const TUNNEL_HEADER: (&str, &str) = ("ngrok-skip-browser-warning", "true");

pub struct HttpUploadSink {
    upload_url: String,
    timeout_ms: u32,
}

impl HttpUploadSink {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            upload_url: config.upload_url.clone(),
            timeout_ms: config.attempt_timeout_ms,
        }
    }
}

impl UploadSink for HttpUploadSink {
    async fn upload(&self, payload: &UploadPayload<'_>) -> Result<u16, TransportError> {
        let controller = AbortController::new()
            .map_err(|_| TransportError::Network("AbortController unavailable".to_string()))?;
        let signal = controller.signal();

        let request = Request::post(&self.upload_url)
            .header(TUNNEL_HEADER.0, TUNNEL_HEADER.1)
            .abort_signal(Some(&signal))
            .json(payload)
            .map_err(|e| TransportError::Encode(e.to_string()))?;

        let send = Box::pin(request.send());
        let timeout = Box::pin(TimeoutFuture::new(self.timeout_ms));
        match select(send, timeout).await {
            Either::Left((Ok(response), _)) => Ok(response.status()),
            Either::Left((Err(err), _)) => Err(TransportError::Network(err.to_string())),
            Either::Right(((), _)) => {
                controller.abort();
                Err(TransportError::Timeout(self.timeout_ms))
            }
        }
    }
}

/// Lists sites, optionally filtered by region.
pub async fn fetch_regions(
    regions_url: &str,
    region: Option<&str>,
) -> Result<RegionsResponse, String> {
    let mut builder = Request::get(regions_url).header(TUNNEL_HEADER.0, TUNNEL_HEADER.1);
    if let Some(region) = region.map(str::trim).filter(|r| !r.is_empty()) {
        builder = builder.query([("region", region)]);
    }

    let response = builder.send().await.map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("regions endpoint answered {}", response.status()));
    }
    response
        .json::<RegionsResponse>()
        .await
        .map_err(|e| e.to_string())
}

pub async fn fetch_config() -> DashboardConfig {
    match Request::get(CONFIG_PATH).send().await {
        Ok(response) if response.ok() => match response.json::<DashboardConfig>().await {
            Ok(config) => config,
            Err(err) => {
                warn!("invalid {CONFIG_PATH} body, using built-in endpoints: {err}");
                default_config()
            }
        },
        Ok(response) => {
            warn!(
                "{CONFIG_PATH} answered {}, using built-in endpoints",
                response.status()
            );
            default_config()
        }
        Err(err) => {
            warn!("{CONFIG_PATH} unreachable, using built-in endpoints: {err}");
            default_config()
        }
    }
}

/// Endpoints baked in at compile time, used when no host serves `/api/config`.
pub fn default_config() -> DashboardConfig {
    DashboardConfig::from_api(
        option_env!("SENSOR_API_URL").unwrap_or("http://127.0.0.1:8000"),
        option_env!("SENSOR_CSV_UPLOAD_PATH").unwrap_or("/aqi/air-quality-sites"),
        option_env!("SENSOR_ALL_REGIONS_PATH").unwrap_or("/aqi/all-regions"),
    )
}
