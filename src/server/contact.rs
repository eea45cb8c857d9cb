use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use http::StatusCode;
use thiserror::Error;

use super::email_client::{EmailClient, EmailError};
use crate::contact::{
    ContactMessage, ContactPayload, ContactReply, MissingFields, CONTACT_ENDPOINT, INVALID_BODY,
    MISSING_FIELDS, NOT_CONFIGURED, SEND_FAILED,
};

type Mailer = Arc<Option<EmailClient>>;

pub fn router(mailer: Mailer) -> Router<()> {
    Router::new()
        .route(CONTACT_ENDPOINT, routing::post(send_message))
        .with_state(mailer)
}

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("unreadable request body: {0}")]
    UnreadableBody(#[from] BytesRejection),
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),
    #[error(transparent)]
    MissingFields(#[from] MissingFields),
    #[error("email service is not configured")]
    NotConfigured,
    #[error("failed to send contact email")]
    SendFailed(#[source] EmailError),
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ContactError::UnreadableBody(_) | ContactError::InvalidBody(_) => {
                (StatusCode::BAD_REQUEST, INVALID_BODY)
            }
            ContactError::MissingFields(_) => (StatusCode::BAD_REQUEST, MISSING_FIELDS),
            ContactError::NotConfigured => (StatusCode::INTERNAL_SERVER_ERROR, NOT_CONFIGURED),
            ContactError::SendFailed(err) => {
                tracing::error!(error.cause_chain = ?err, "Error sending contact email");
                (StatusCode::INTERNAL_SERVER_ERROR, SEND_FAILED)
            }
        };
        (status, Json(ContactReply::error(detail))).into_response()
    }
}

#[tracing::instrument(name = "Handling contact submission", skip_all)]
async fn send_message(
    State(mailer): State<Mailer>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ContactReply>, ContactError> {
    // Configuration is checked before the body is looked at, so an unconfigured
    // site refuses every submission with the same 500, even one with missing
    // fields that would otherwise get a 400.
    let client = (*mailer).as_ref().ok_or(ContactError::NotConfigured)?;
    // The body is JSON whatever the Content-Type header says.
    let payload = serde_json::from_slice::<ContactPayload>(&body?)?;
    let message = ContactMessage::parse(&payload)?;
    client
        .send_contact(&message)
        .await
        .map_err(ContactError::SendFailed)?;
    tracing::info!(recipient = client.recipient(), "Contact email sent");
    Ok(Json(ContactReply::ok()))
}
