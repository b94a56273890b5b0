use tracing::info;
use tracing_subscriber::EnvFilter;

use staging_chat::config::Config;
use staging_chat::routes::create_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let app = create_router();

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    info!("staging chat server running at http://{}", config.addr());

    axum::serve(listener, app).await?;
    Ok(())
}
