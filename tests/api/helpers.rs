use std::{sync::LazyLock, time::Duration};

use portfolio_site::{
    contact::CONTACT_ENDPOINT,
    server::{api_router, email_client::EmailClient, telemetry::init_tracing},
};
use secrecy::Secret;
use tokio::net::TcpListener;
use wiremock::MockServer;

pub const RECIPIENT: &str = "owner@example.com";

// Only install a subscriber when asked to, and only once per test binary.
static TRACING: LazyLock<()> = LazyLock::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        init_tracing("debug");
    }
});

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}{}", self.address, CONTACT_ENDPOINT))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_text(&self, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(format!("{}{}", self.address, CONTACT_ENDPOINT))
            .header("Content-Type", "text/plain")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_raw(&self, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(format!("{}{}", self.address, CONTACT_ENDPOINT))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// Serves the API on a random port; `configured` decides whether an email
/// client pointing at the mock provider is installed.
pub async fn spawn_app(configured: bool) -> TestApp {
    LazyLock::force(&TRACING);

    let email_server = MockServer::start().await;
    let email_client = configured.then(|| {
        EmailClient::new(
            email_server.uri(),
            "Portfolio Contact <onboarding@resend.dev>".to_string(),
            RECIPIENT.to_string(),
            Secret::new("re_test".to_string()),
            Duration::from_millis(500),
        )
        .expect("Failed to build email client")
    });

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let app = api_router(email_client);
    tokio::spawn(async move { axum::serve(listener, app).await });

    TestApp {
        address: format!("http://127.0.0.1:{port}"),
        email_server,
        api_client: reqwest::Client::new(),
    }
}
