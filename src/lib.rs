//! Klaxon: HTTP Alert → SMS Relay
//!
//! A small stateless service that receives a JSON alert over HTTP and
//! forwards it as an SMS through Twilio. Each request is independent;
//! the only process-wide state is the configuration read at startup.
//!
//! # Endpoints
//!
//! - `GET /` — fixed status payload
//! - `POST /alert` — `{"message": "..."}` triggers one SMS send

pub mod api;
pub mod sms;

// Re-export commonly used types
pub use api::{build_router, run_server, AppState, ServerConfig};
pub use sms::{SmsConfig, SmsError, SmsSender, TwilioClient};
