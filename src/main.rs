use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use teralist_backend::api;
use teralist_backend::config;
use teralist_backend::state::AppState;
use teralist_backend::terabox::TeraboxClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "teralist_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration / 加载配置
    let app_config = config::load_config().expect("Failed to load configuration");
    tracing::info!(
        "Server will listen on {}:{}",
        app_config.server.host,
        app_config.server.port
    );

    // Credentials are read once at startup; missing values are not validated,
    // the first login attempt will simply fail / 凭据启动时读取一次，缺失不校验
    let credentials = config::Credentials::from_env();
    if credentials.email.is_empty() || credentials.password.is_empty() {
        tracing::warn!("TERABOX_USERNAME / TERABOX_PASSWORD not fully set, login will fail");
    }

    let state = Arc::new(AppState {
        terabox: TeraboxClient::new(app_config.terabox.clone(), credentials),
    });

    let app = api::app(state);

    let bind_addr = app_config.get_bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server running at http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
