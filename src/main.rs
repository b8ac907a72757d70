use qualifying_engine::api::{create_router, AppState};
use qualifying_engine::config::{ConfigLoader, ServiceSettings};
use qualifying_engine::telemetry;
use tracing::info;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = ServiceSettings::from_env()?;
    telemetry::init(&settings.log_level)?;

    let config = ConfigLoader::load(&settings.config_dir)?;
    let addr = settings.socket_addr()?;
    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Qualifying engine listening");
    axum::serve(listener, router).await?;
    Ok(())
}
