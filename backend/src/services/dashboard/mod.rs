//! Dashboard bootstrap endpoints.
//!
//! The frontend calls `GET /api/config` once on start to learn where the
//! remote sensor API lives and how uploads are tuned. The host holds no
//! sensor data of its own.

mod get_config;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api";

/// Configures and returns the Actix scope for the dashboard routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        // Endpoints and upload tuning for the frontend.
        .route("/config", get().to(get_config::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App};
    use common::model::config::DashboardConfig;

    #[actix_web::test]
    async fn config_endpoint_serves_dashboard_config() {
        let config = DashboardConfig::from_api("http://sensors:8000", "/up", "/regions");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/config").to_request();
        let body: DashboardConfig = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, config);
    }

    #[actix_web::test]
    async fn config_endpoint_is_read_only() {
        let config = DashboardConfig::from_api("http://sensors:8000", "/up", "/regions");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/config").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }
}
