use portfolio_site::contact::{
    ContactReply, INVALID_BODY, MISSING_FIELDS, NOT_CONFIGURED, SEND_FAILED,
};
use serde_json::json;
use wiremock::{
    matchers::{any, header, method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::{spawn_app, RECIPIENT};

fn valid_body() -> serde_json::Value {
    json!({
        "name": "Ada",
        "email": "ada@example.com",
        "message": "Hello there",
    })
}

#[tokio::test]
async fn contact_returns_200_for_valid_submission() {
    let app = spawn_app(true).await;
    Mock::given(path("/emails"))
        .and(method("POST"))
        .and(header("Authorization", "Bearer re_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "abc" })))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_contact(&valid_body()).await;

    assert_eq!(200, response.status().as_u16());
    let reply = response.json::<ContactReply>().await.unwrap();
    assert_eq!(reply, ContactReply::ok());
}

#[tokio::test]
async fn contact_forwards_trimmed_message_with_reply_to() {
    let app = spawn_app(true).await;
    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let body = json!({
        "name": "  Ada ",
        "email": " ada@example.com ",
        "message": "Hi\nthere  ",
    });
    let response = app.post_contact(&body).await;
    assert_eq!(200, response.status().as_u16());

    let requests = app.email_server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent["to"], json!([RECIPIENT]));
    assert_eq!(sent["reply_to"], json!(["ada@example.com"]));
    assert_eq!(sent["subject"], "Nouveau message de Ada via le portfolio");
    assert_eq!(
        sent["text"],
        "Nom: Ada\nEmail: ada@example.com\n\nMessage:\nHi\nthere"
    );
}

#[tokio::test]
async fn contact_accepts_json_sent_as_plain_text() {
    let app = spawn_app(true).await;
    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_text(r#"{"name": "Ada", "email": "ada@example.com", "message": "Hi"}"#)
        .await;

    assert_eq!(200, response.status().as_u16());
    let reply = response.json::<ContactReply>().await.unwrap();
    assert_eq!(reply, ContactReply::ok());
}

#[tokio::test]
async fn contact_returns_400_when_fields_are_missing() {
    let app = spawn_app(true).await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        (json!({ "email": "ada@example.com", "message": "Hi" }), "missing name"),
        (json!({ "name": "Ada", "message": "Hi" }), "missing email"),
        (json!({ "name": "Ada", "email": "ada@example.com" }), "missing message"),
        (json!({ "name": "   ", "email": "ada@example.com", "message": "Hi" }), "blank name"),
        (json!({ "name": "Ada", "email": "ada@example.com", "message": "\n\t" }), "blank message"),
        (json!({}), "empty object"),
    ];

    for (body, description) in test_cases {
        let response = app.post_contact(&body).await;
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {description}."
        );
        let reply = response.json::<ContactReply>().await.unwrap();
        assert_eq!(reply.error.as_deref(), Some(MISSING_FIELDS));
    }
}

#[tokio::test]
async fn contact_returns_400_for_malformed_body() {
    let app = spawn_app(true).await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for body in ["not json", "{\"name\": ", "[1, 2]"] {
        let response = app.post_raw(body).await;
        assert_eq!(400, response.status().as_u16(), "body: {body}");
        let reply = response.json::<ContactReply>().await.unwrap();
        assert_eq!(reply.error.as_deref(), Some(INVALID_BODY));
    }
}

#[tokio::test]
async fn contact_returns_500_when_not_configured() {
    let app = spawn_app(false).await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    // the configuration error wins over field validation
    for body in [valid_body(), json!({ "name": "" })] {
        let response = app.post_contact(&body).await;
        assert_eq!(500, response.status().as_u16());
        let reply = response.json::<ContactReply>().await.unwrap();
        assert_eq!(reply.error.as_deref(), Some(NOT_CONFIGURED));
    }
}

#[tokio::test]
async fn contact_hides_provider_error_details() {
    let app = spawn_app(true).await;
    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string("provider exploded: invalid api key"),
        )
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_contact(&valid_body()).await;

    assert_eq!(500, response.status().as_u16());
    let text = response.text().await.unwrap();
    assert!(!text.contains("provider exploded"));
    let reply: ContactReply = serde_json::from_str(&text).unwrap();
    assert_eq!(reply.error.as_deref(), Some(SEND_FAILED));
}

#[tokio::test]
async fn contact_returns_500_when_provider_times_out() {
    let app = spawn_app(true).await;
    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(3)))
        .mount(&app.email_server)
        .await;

    let response = app.post_contact(&valid_body()).await;

    assert_eq!(500, response.status().as_u16());
    let reply = response.json::<ContactReply>().await.unwrap();
    assert_eq!(reply.error.as_deref(), Some(SEND_FAILED));
}

#[tokio::test]
async fn contact_route_only_accepts_post() {
    let app = spawn_app(true).await;

    let response = app
        .api_client
        .get(format!("{}/api/contact", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(405, response.status().as_u16());
}
