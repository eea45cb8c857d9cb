//! Server-only pieces: settings, the email provider client and the contact route.

pub mod contact;
pub mod email_client;
pub mod settings;
pub mod telemetry;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use email_client::EmailClient;

/// Routes served next to the Leptos application.
///
/// `email_client` is `None` when no provider credential is configured; the
/// contact route then answers with a configuration error instead of sending.
pub fn api_router(email_client: Option<EmailClient>) -> Router<()> {
    Router::new()
        .merge(contact::router(Arc::new(email_client)))
        .layer(TraceLayer::new_for_http())
}
