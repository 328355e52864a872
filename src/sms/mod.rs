//! SMS delivery through the Twilio provider
//!
//! Configuration is read once at startup; the client is only constructed
//! when both credentials are present.

pub mod client;
pub mod config;

pub use client::{SmsError, SmsSender, TwilioClient, ALERT_PREFIX};
pub use config::SmsConfig;
