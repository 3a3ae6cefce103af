//! Backend entry-point: loads settings and serves the HTML site.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use reviewhub::inbound::http::health::HealthState;
use reviewhub::inbound::http::session_config::{BuildMode, session_settings_from_env};
use server::{AppSettings, ServerConfig, create_server};

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

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::current())
        .map_err(std::io::Error::other)?;
    let config = ServerConfig::new(
        session.key,
        session.cookie_secure,
        session.same_site,
        &settings,
    )
    .map_err(std::io::Error::other)?;

    info!(addr = %config.bind_addr(), "starting server");
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}

#[cfg(test)]
mod tests;
