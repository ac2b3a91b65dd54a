//! Service entry-point: configure logging, read the environment, serve.

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use userboard::server::{AppConfig, run};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    run(AppConfig::from_env()).await
}
