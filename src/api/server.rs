use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{send_alert, status, AppState};
use crate::sms::{SmsConfig, SmsSender, TwilioClient};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub sms: SmsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            sms: SmsConfig::default(),
        }
    }
}

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(status))
        .route("/alert", post(send_alert))
        // Middleware
        .layer(TraceLayer::new_for_http())
        // Browser clients are served from other origins. Mirrors the
        // request origin so credentials stay legal; tighten in production.
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let sender = TwilioClient::maybe_from_config(&config.sms)
        .map(|client| Arc::new(client) as Arc<dyn SmsSender>);

    if sender.is_none() {
        tracing::warn!("Twilio credentials not set; /alert will refuse until configured");
    }

    let state = Arc::new(AppState {
        sender,
        sms_config: config.sms.clone(),
    });

    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("Starting klaxon server on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Klaxon server stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");

    tracing::info!("Shutdown signal received");
}
