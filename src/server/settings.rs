use std::time::Duration;

use config::{Config, ConfigError, Environment};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::email_client::{EmailClient, EmailError};

pub const DEFAULT_BASE_URL: &str = "https://api.resend.com";
pub const DEFAULT_SENDER: &str = "Portfolio Contact <onboarding@resend.dev>";
pub const DEFAULT_RECIPIENT: &str = "marosataf@gmail.com";
pub const DEFAULT_TIMEOUT_MILLISECONDS: i64 = 10_000;

/// Email provider settings, read from `RESEND_*` environment variables.
#[derive(Debug, Deserialize)]
pub struct EmailSettings {
    /// `RESEND_API_KEY`; contact email is disabled without it.
    pub api_key: Option<Secret<String>>,
    pub base_url: String,
    pub sender: String,
    pub recipient: String,
    pub timeout_milliseconds: u64,
}

impl EmailSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(Environment::with_prefix("RESEND").prefix_separator("_"))
    }

    fn load(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("sender", DEFAULT_SENDER)?
            .set_default("recipient", DEFAULT_RECIPIENT)?
            .set_default("timeout_milliseconds", DEFAULT_TIMEOUT_MILLISECONDS)?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }

    /// Builds the provider client, or `None` when no usable credential is set.
    pub fn into_client(self) -> Result<Option<EmailClient>, EmailError> {
        if !self.is_configured() {
            return Ok(None);
        }
        let timeout = self.timeout();
        let Some(api_key) = self.api_key else {
            return Ok(None);
        };
        EmailClient::new(self.base_url, self.sender, self.recipient, api_key, timeout).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(vars: &[(&str, &str)]) -> EmailSettings {
        let source = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<config::Map<String, String>>();
        let env = Environment::with_prefix("RESEND")
            .prefix_separator("_")
            .source(Some(source));
        EmailSettings::load(env).expect("settings should load")
    }

    #[test]
    fn test_defaults_without_credential() {
        let settings = load(&[]);
        assert!(settings.api_key.is_none());
        assert!(!settings.is_configured());
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.sender, DEFAULT_SENDER);
        assert_eq!(settings.recipient, DEFAULT_RECIPIENT);
        assert_eq!(settings.timeout(), Duration::from_secs(10));
        assert!(settings.into_client().unwrap().is_none());
    }

    #[test]
    fn test_reads_prefixed_variables() {
        let settings = load(&[
            ("RESEND_API_KEY", "re_test_key"),
            ("RESEND_BASE_URL", "http://127.0.0.1:9999"),
            ("RESEND_TIMEOUT_MILLISECONDS", "250"),
        ]);
        assert!(settings.is_configured());
        assert_eq!(settings.api_key.as_ref().unwrap().expose_secret(), "re_test_key");
        assert_eq!(settings.base_url, "http://127.0.0.1:9999");
        assert_eq!(settings.timeout(), Duration::from_millis(250));
        assert!(settings.into_client().unwrap().is_some());
    }

    #[test]
    fn test_blank_credential_is_unconfigured() {
        let settings = load(&[("RESEND_API_KEY", "   ")]);
        assert!(!settings.is_configured());
        assert!(settings.into_client().unwrap().is_none());
    }
}
