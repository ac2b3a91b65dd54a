//! Server construction and wiring.

mod config;

pub use config::AppConfig;

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetricsBuilder;
use tracing::info;

use crate::domain::UserDirectoryService;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{add_user, delete_user, edit_user, list_users, update_user};
use crate::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig, prepare_database};

/// Assemble the actix application from its injected state.
pub fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(http_state)
        .app_data(health_state)
        .service(list_users)
        .service(add_user)
        .service(delete_user)
        .service(edit_user)
        .service(update_user)
        .service(ready)
        .service(live)
}

#[cfg(feature = "metrics")]
fn make_metrics() -> actix_web_prom::PrometheusMetrics {
    PrometheusMetricsBuilder::new("userboard")
        .endpoint("/metrics")
        .build()
        .expect("configure Prometheus metrics")
}

/// Provision the database, bind the listener, and serve until shutdown.
pub async fn run(config: AppConfig) -> std::io::Result<()> {
    let pool = DbPool::new(PoolConfig::new(&config.database_url)).map_err(std::io::Error::other)?;
    prepare_database(&pool).await.map_err(std::io::Error::other)?;

    let repository = DieselUserRepository::new(pool);
    let http_state = web::Data::new(HttpState::new(UserDirectoryService::new(Arc::new(
        repository,
    ))));

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays accessible.
    let server_health_state = health_state.clone();

    #[cfg(feature = "metrics")]
    let prometheus = make_metrics();

    let server = HttpServer::new(move || {
        let app = build_app(http_state.clone(), server_health_state.clone());
        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());
        app
    })
    .bind((config.host.as_str(), config.port))?;

    health_state.mark_ready();
    info!(host = %config.host, port = config.port, database = %config.database_url, "listening");
    server.run().await
}
