//! Outbound SMS delivery via the Twilio REST API

use std::time::Duration;

use async_trait::async_trait;

use super::config::SmsConfig;

/// Prefix prepended to every outbound alert body.
pub const ALERT_PREFIX: &str = "🚨 ALERT: Red LED detected! Message: ";

/// Timeout on the outbound send call.
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// The send-message capability handlers depend on.
///
/// Abstracting the provider behind a trait keeps the HTTP handlers
/// testable without network access.
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Deliver `body` as a single SMS to the configured recipient.
    async fn send(&self, body: &str) -> Result<(), SmsError>;
}

/// SMS client backed by Twilio's Messages endpoint.
pub struct TwilioClient {
    account_sid: String,
    auth_token: String,
    from_number: String,
    to_number: String,
    client: reqwest::Client,
}

impl TwilioClient {
    /// Create a client from explicit credentials and numbers.
    pub fn new(
        account_sid: String,
        auth_token: String,
        from_number: String,
        to_number: String,
    ) -> Self {
        Self {
            account_sid,
            auth_token,
            from_number,
            to_number,
            client: reqwest::Client::new(),
        }
    }

    /// Build a client from configuration, or `None` when either credential
    /// is missing. Delivery must never be attempted without credentials.
    pub fn maybe_from_config(config: &SmsConfig) -> Option<Self> {
        match (&config.account_sid, &config.auth_token) {
            (Some(sid), Some(token)) => Some(Self::new(
                sid.clone(),
                token.clone(),
                config.from_number.clone(),
                config.to_number.clone(),
            )),
            _ => None,
        }
    }
}

#[async_trait]
impl SmsSender for TwilioClient {
    async fn send(&self, body: &str) -> Result<(), SmsError> {
        let url = format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.account_sid
        );

        let params = [
            ("To", self.to_number.as_str()),
            ("From", self.from_number.as_str()),
            ("Body", body),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&params)
            .timeout(SEND_TIMEOUT)
            .send()
            .await
            .map_err(|e| SmsError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SmsError::Provider { status, detail });
        }

        tracing::debug!(to = %self.to_number, "Twilio accepted message");

        Ok(())
    }
}

/// SMS delivery errors
#[derive(Debug, thiserror::Error)]
pub enum SmsError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("Twilio returned status {status}: {detail}")]
    Provider { status: u16, detail: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_requires_both_credentials() {
        let config = SmsConfig {
            account_sid: Some("AC123".to_string()),
            auth_token: None,
            from_number: "+15550100".to_string(),
            to_number: "+15550199".to_string(),
        };
        assert!(TwilioClient::maybe_from_config(&config).is_none());

        let config = SmsConfig {
            auth_token: Some("token".to_string()),
            ..SmsConfig::default()
        };
        assert!(TwilioClient::maybe_from_config(&config).is_none());
    }

    #[test]
    fn test_client_from_full_config() {
        let config = SmsConfig {
            account_sid: Some("AC123".to_string()),
            auth_token: Some("token".to_string()),
            from_number: "+15550100".to_string(),
            to_number: "+15550199".to_string(),
        };
        let client = TwilioClient::maybe_from_config(&config).unwrap();
        assert_eq!(client.account_sid, "AC123");
        assert_eq!(client.to_number, "+15550199");
    }
}
