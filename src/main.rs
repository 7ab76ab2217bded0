use std::env;
use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use duty_bonus_engine::api::{AppState, create_router};
use duty_bonus_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/nrw";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "duty_bonus_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir = env::var("DUTY_BONUS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let addr: SocketAddr = env::var("DUTY_BONUS_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.into())
        .parse()?;

    let config = ConfigLoader::load(&config_dir).inspect_err(|e| {
        tracing::error!(config_dir = %config_dir, error = %e, "Failed to load configuration");
    })?;
    tracing::info!(
        scheme = %config.scheme().name,
        config_dir = %config_dir,
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));

    tracing::info!("Duty bonus engine listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
