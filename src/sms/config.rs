//! SMS provider configuration

use std::env;

/// Twilio configuration, read from the environment once at startup.
///
/// Credentials may be absent (local development without secrets). The
/// service still starts; the alert endpoint refuses delivery until both
/// credentials are present.
#[derive(Debug, Clone, Default)]
pub struct SmsConfig {
    /// Twilio account SID (`TWILIO_ACCOUNT_SID`)
    pub account_sid: Option<String>,
    /// Twilio auth token (`TWILIO_AUTH_TOKEN`)
    pub auth_token: Option<String>,
    /// Sender phone number (`TWILIO_PHONE_NUMBER`)
    pub from_number: String,
    /// Recipient phone number (`TARGET_MOBILE_NUMBER`)
    pub to_number: String,
}

impl SmsConfig {
    /// Read configuration from environment variables.
    ///
    /// Empty-string credentials count as absent.
    pub fn from_env() -> Self {
        Self {
            account_sid: env::var("TWILIO_ACCOUNT_SID")
                .ok()
                .filter(|s| !s.is_empty()),
            auth_token: env::var("TWILIO_AUTH_TOKEN")
                .ok()
                .filter(|s| !s.is_empty()),
            from_number: env::var("TWILIO_PHONE_NUMBER").unwrap_or_default(),
            to_number: env::var("TARGET_MOBILE_NUMBER").unwrap_or_default(),
        }
    }

    /// Both provider credentials are present.
    pub fn has_credentials(&self) -> bool {
        self.account_sid.is_some() && self.auth_token.is_some()
    }
}
