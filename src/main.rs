mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod routes;
#[cfg(test)]
mod test_support;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use actix_web_prom::PrometheusMetricsBuilder;
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use std::collections::HashMap;
use std::io;

use crate::config::Settings;
use crate::routes::Repositories;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env().map_err(|err| {
        error!("Configuration error: {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;

    // Initialize the database pool
    let pool = db::connect(&settings.database_url, settings.max_connections)
        .await
        .map_err(|err| {
            error!("Failed to connect to {}: {}", settings.database_url, err);
            io::Error::new(io::ErrorKind::Other, err)
        })?;

    if settings.init_db {
        info!("INIT_DB is set, creating missing tables and columns");
        db::schema::init_schema(&pool).await.map_err(|err| {
            error!("Schema initialization failed: {}", err);
            io::Error::new(io::ErrorKind::Other, err)
        })?;
    }

    let repositories = Repositories::new(pool);

    // Set up Prometheus metrics
    let mut labels = HashMap::new();
    labels.insert("app".to_string(), "health_tracker".to_string());
    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics")
        .const_labels(labels)
        .build()
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;

    let bind_address = settings.bind_address();
    info!("Starting server at {} with {} workers", bind_address, settings.workers);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(prometheus.clone())
            .configure(|cfg| repositories.register(cfg))
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .workers(settings.workers)
    .bind(&bind_address)?
    .run()
    .await
}
