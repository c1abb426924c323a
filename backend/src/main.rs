mod config;
mod services;

use crate::config::Config;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env().map_err(std::io::Error::other)?;
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url);
        });
    }

    info!(
        "Server running at {} (uploads to {}, regions from {})",
        url, config.dashboard.upload_url, config.dashboard.regions_url
    );

    let dashboard = web::Data::new(config.dashboard.clone());
    HttpServer::new(move || {
        App::new()
            .app_data(dashboard.clone())
            .service(services::dashboard::configure_routes())
            .default_service(web::route().to(services::assets::serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
