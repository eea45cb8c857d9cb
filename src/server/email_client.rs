use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use thiserror::Error;

use crate::contact::ContactMessage;

#[derive(Error)]
pub enum EmailError {
    #[error("failed to build the email provider client")]
    Build(#[source] reqwest::Error),
    #[error("email provider request failed")]
    Request(#[from] reqwest::Error),
}

impl std::fmt::Debug for EmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Writes `e` followed by every error in its `source()` chain.
fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{e}")?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }
    Ok(())
}

/// Client for the Resend transactional email API.
#[derive(Debug)]
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: String,
    recipient: String,
    authorization_token: Secret<String>,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: String,
        recipient: String,
        authorization_token: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, EmailError> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(EmailError::Build)?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            sender,
            recipient,
            authorization_token,
        })
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Forwards a contact message to the site owner, replying to the visitor.
    #[tracing::instrument(name = "Sending contact email", skip_all)]
    pub async fn send_contact(&self, message: &ContactMessage) -> Result<(), EmailError> {
        let subject = message.subject();
        let text = message.body();
        let body = SendEmailRequest {
            from: &self.sender,
            to: [&self.recipient],
            reply_to: [message.email()],
            subject: &subject,
            text: &text,
        };
        self.http_client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(self.authorization_token.expose_secret())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use wiremock::{
        matchers::{any, header, method, path},
        Mock, MockServer, Request, ResponseTemplate,
    };

    use super::*;
    use crate::contact::ContactPayload;

    struct SendEmailBodyMatcher;

    impl wiremock::Match for SendEmailBodyMatcher {
        fn matches(&self, request: &Request) -> bool {
            let Ok(body) = serde_json::from_slice::<serde_json::Value>(&request.body) else {
                return false;
            };
            body.get("from").is_some()
                && body.get("to").is_some()
                && body.get("reply_to").is_some()
                && body.get("subject").is_some()
                && body.get("text").is_some()
        }
    }

    fn message() -> ContactMessage {
        ContactMessage::parse(&ContactPayload::new("Ada", "ada@example.com", "Hi"))
            .expect("valid message")
    }

    fn email_client(base_url: String) -> EmailClient {
        EmailClient::new(
            base_url,
            "Portfolio Contact <onboarding@resend.dev>".to_string(),
            "owner@example.com".to_string(),
            Secret::new("re_test".to_string()),
            Duration::from_millis(200),
        )
        .expect("client should build")
    }

    #[tokio::test]
    async fn test_send_contact_fires_request_to_emails() {
        let mock_server = MockServer::start().await;
        Mock::given(header("Authorization", "Bearer re_test"))
            .and(header("Content-Type", "application/json"))
            .and(path("/emails"))
            .and(method("POST"))
            .and(SendEmailBodyMatcher)
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let outcome = email_client(mock_server.uri()).send_contact(&message()).await;
        assert!(outcome.is_ok());
    }

    #[tokio::test]
    async fn test_send_contact_fails_on_server_error() {
        let mock_server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let outcome = email_client(mock_server.uri()).send_contact(&message()).await;
        assert!(outcome.is_err());
    }

    #[tokio::test]
    async fn test_send_contact_times_out() {
        let mock_server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let outcome = email_client(mock_server.uri()).send_contact(&message()).await;
        assert!(outcome.is_err());
    }

    #[tokio::test]
    async fn test_debug_lists_the_cause_chain() {
        let mock_server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(502))
            .mount(&mock_server)
            .await;

        let err = email_client(mock_server.uri())
            .send_contact(&message())
            .await
            .unwrap_err();
        let debug = format!("{err:?}");
        assert!(debug.starts_with("email provider request failed\n"));
        assert!(debug.contains("Caused by:"));
        assert!(debug.contains("502"));
    }
}
