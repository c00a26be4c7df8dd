mod config;
mod services;
mod static_files;

use crate::config::AppConfig;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::io;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config =
        AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let url = config.url();

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    info!("Server running at {}", url);
    info!(
        "Catalog service at {} (timeout {} ms)",
        config.client.api_base_url, config.client.request_timeout_ms
    );

    let client_config = web::Data::new(config.client.clone());

    HttpServer::new(move || {
        App::new()
            .app_data(client_config.clone())
            .service(services::client_config::configure_routes())
            .default_service(web::route().to(static_files::serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
