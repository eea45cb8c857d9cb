//! Contact form model shared by the endpoint and the browser form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::Lang;

pub const CONTACT_ENDPOINT: &str = "/api/contact";

pub const MISSING_FIELDS: &str = "Missing required fields.";
pub const INVALID_BODY: &str = "Invalid request body.";
pub const NOT_CONFIGURED: &str =
    "Email service is not configured yet. Please set RESEND_API_KEY in your environment.";
pub const SEND_FAILED: &str = "Failed to send email.";

/// Raw request body; every field is untrusted.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactPayload {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
        }
    }
}

/// A submission whose three fields are non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Missing required fields.")]
pub struct MissingFields;

fn required(field: Option<&str>) -> Option<String> {
    field
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl ContactMessage {
    pub fn parse(payload: &ContactPayload) -> Result<Self, MissingFields> {
        let name = required(payload.name.as_deref());
        let email = required(payload.email.as_deref());
        let message = required(payload.message.as_deref());
        match (name, email, message) {
            (Some(name), Some(email), Some(message)) => Ok(Self {
                name,
                email,
                message,
            }),
            _ => Err(MissingFields),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> String {
        format!("Nouveau message de {} via le portfolio", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Nom: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }
}

/// Body of every endpoint response: `{"ok": true}` or `{"error": "..."}`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactReply {
    pub fn ok() -> Self {
        Self {
            ok: Some(true),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            ok: None,
            error: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok == Some(true)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl FormStatus {
    pub fn is_loading(self) -> bool {
        self == FormStatus::Loading
    }

    /// Status once the request has settled.
    pub fn settle(result: &Result<(), SubmitError>) -> Self {
        match result {
            Ok(()) => FormStatus::Success,
            Err(_) => FormStatus::Error,
        }
    }

    pub fn button_label(self, lang: Lang) -> &'static str {
        match self {
            FormStatus::Loading => lang.pick("Sending...", "Envoi..."),
            FormStatus::Success => lang.pick("Message sent", "Message envoyé"),
            FormStatus::Idle | FormStatus::Error => {
                lang.pick("Send message", "Envoyer le message")
            }
        }
    }
}

/// Everything the form changes when a submission starts or settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormUpdate {
    pub status: FormStatus,
    pub error: Option<&'static str>,
    pub clear_fields: bool,
}

impl FormUpdate {
    /// A new submission drops whatever error the previous one left.
    pub fn submitting() -> Self {
        Self {
            status: FormStatus::Loading,
            error: None,
            clear_fields: false,
        }
    }

    pub fn settled(result: &Result<(), SubmitError>, lang: Lang) -> Self {
        let status = FormStatus::settle(result);
        Self {
            status,
            error: result.as_ref().err().map(|_| failure_message(lang)),
            clear_fields: status == FormStatus::Success,
        }
    }
}

pub fn success_message(lang: Lang) -> &'static str {
    lang.pick(
        "Your message has been sent successfully.",
        "Votre message a bien été envoyé.",
    )
}

/// Shown for every failure; server detail is never surfaced to the visitor.
pub fn failure_message(lang: Lang) -> &'static str {
    lang.pick(
        "The message could not be sent. Please try again later or use the direct links.",
        "Le message n’a pas pu être envoyé. Réessayez plus tard ou utilisez les liens directs.",
    )
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("couldn't determine page origin")]
    NoOrigin,
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{}", .0.as_deref().unwrap_or("Request failed"))]
    Rejected(Option<String>),
}

/// Interprets the endpoint's answer.
pub fn check_reply(success_status: bool, reply: ContactReply) -> Result<(), SubmitError> {
    if success_status && reply.is_ok() {
        Ok(())
    } else {
        Err(SubmitError::Rejected(reply.error))
    }
}

/// Posts `payload` to the contact endpoint hosted at `origin`.
pub async fn submit_contact(origin: &str, payload: &ContactPayload) -> Result<(), SubmitError> {
    let res = reqwest::Client::new()
        .post(format!("{origin}{CONTACT_ENDPOINT}"))
        .json(payload)
        .send()
        .await?;
    let success = res.status().is_success();
    let reply = res.json::<ContactReply>().await?;
    check_reply(success, reply)
}
