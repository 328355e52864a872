//! Klaxon Server
//!
//! Run with: cargo run
//!
//! Environment variables:
//! - KLAXON_HOST: Bind address (default: 0.0.0.0)
//! - KLAXON_PORT: Port number (default: 8000)
//! - TWILIO_ACCOUNT_SID: Twilio account SID (required for delivery)
//! - TWILIO_AUTH_TOKEN: Twilio auth token (required for delivery)
//! - TWILIO_PHONE_NUMBER: Sender phone number
//! - TARGET_MOBILE_NUMBER: Recipient phone number
//! - RUST_LOG: Log level (default: info)
//!
//! The server starts even when the Twilio variables are missing so the
//! status endpoint stays reachable; /alert refuses until both credentials
//! are configured.

use klaxon::api::{run_server, ServerConfig};
use klaxon::sms::SmsConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is for local development; deployed environments set real vars
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "klaxon=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse configuration from environment
    let host = std::env::var("KLAXON_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("KLAXON_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let sms = SmsConfig::from_env();

    let config = ServerConfig { host, port, sms };

    tracing::info!("Klaxon configuration:");
    tracing::info!("  Host: {}:{}", config.host, config.port);
    tracing::info!(
        "  Twilio credentials: {}",
        if config.sms.has_credentials() {
            "present"
        } else {
            "MISSING (alerts will be refused)"
        }
    );
    tracing::info!("  Sender number: {}", config.sms.from_number);
    tracing::info!("  Recipient number: {}", config.sms.to_number);

    println!(
        r#"
  _  ___
 | |/ / | __ ___  _____  _ __
 | ' /| |/ _` \ \/ / _ \| '_ \
 | . \| | (_| |>  < (_) | | | |
 |_|\_\_|\__,_/_/\_\___/|_| |_|

 HTTP Alert -> SMS Relay
 Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );

    run_server(config).await
}
