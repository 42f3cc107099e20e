//! Mail client tests against a local HTTP server.

use std::io::Read;
use std::thread;

use portfolio::mail::{ContactMessage, MailClient};
use tiny_http::{Response, Server};

fn message() -> ContactMessage {
    ContactMessage {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        message: "I have a project in mind.\nLet's talk.".to_string(),
    }
}

fn client_for(endpoint: String) -> MailClient {
    MailClient::new(
        endpoint,
        "test-key".to_string(),
        "me@example.com".to_string(),
        "Portfolio Contact Form".to_string(),
    )
}

#[test]
fn sends_the_expected_request() {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let endpoint = format!("http://{addr}/emails");

    let handle = thread::spawn(move || {
        let mut request = server.recv().unwrap();
        let auth = request
            .headers()
            .iter()
            .find(|h| h.field.equiv("Authorization"))
            .map(|h| h.value.as_str().to_string());
        let mut body = String::new();
        request.as_reader().read_to_string(&mut body).unwrap();
        request
            .respond(Response::from_string(r#"{"id":"1"}"#))
            .unwrap();
        (auth, body)
    });

    client_for(endpoint).send(&message()).unwrap();

    let (auth, body) = handle.join().unwrap();
    assert_eq!(auth.as_deref(), Some("Bearer test-key"));

    let payload: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(payload["to"], "me@example.com");
    assert_eq!(payload["reply_to"], "ada@example.com");
    assert_eq!(payload["subject"], "New Portfolio Contact from Ada Lovelace");
    let html = payload["html"].as_str().unwrap();
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("I have a project in mind.<br>Let's talk."));
}

#[test]
fn service_error_is_reported() {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let endpoint = format!("http://{addr}/emails");

    let handle = thread::spawn(move || {
        let request = server.recv().unwrap();
        request
            .respond(Response::from_string("{}").with_status_code(500))
            .unwrap();
    });

    let err = client_for(endpoint).send(&message()).unwrap_err();
    handle.join().unwrap();
    assert!(err.to_string().contains("500"), "unexpected error: {err}");
}

#[test]
fn invalid_message_is_rejected_without_a_request() {
    // Unroutable endpoint: validation must fail before any connection
    let client = client_for("http://127.0.0.1:1/emails".to_string());
    let err = client.send(&ContactMessage::default()).unwrap_err();
    assert_eq!(err.to_string(), "All fields are required");
}
