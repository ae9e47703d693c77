use axum::http::StatusCode;
use campos_contact::FAILURE_MESSAGE;

mod helpers;

const JANE: [(&str, &str); 5] = [
    ("name", "Jane Doe"),
    ("email", "jane@example.com"),
    ("phone", "(737) 555-0100"),
    ("message", "Kitchen remodel\nin the spring"),
    ("company", ""),
];

#[tokio::test]
async fn test_contact_page_starts_idle() {
    // Arrange
    let transport = helpers::StubTransport::new(200);
    let app = helpers::app(transport.clone());

    // Act
    let response = helpers::get(&app, "/contact").await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("We typically reply within 1 business day."));
    assert!(response.body.contains(">Send</button>"));
    assert!(response.body.contains(r#"name="company""#));
    assert!(!response.body.contains("banner-success"));
    assert!(!response.body.contains("banner-error"));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_successful_submission_posts_json_and_clears_form() {
    // Arrange
    let transport = helpers::StubTransport::new(200);
    let app = helpers::app(transport.clone());

    // Act
    let response = helpers::post_form(&app, "/contact", &JANE).await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("your message was sent"));
    assert!(!response.body.contains(r#"value="Jane Doe""#));
    assert_eq!(
        transport.calls(),
        vec![
            r#"{"name":"Jane Doe","email":"jane@example.com","phone":"(737) 555-0100","message":"Kitchen remodel\nin the spring"}"#
        ]
    );
}

#[tokio::test]
async fn test_rejected_submission_shows_fixed_message_and_keeps_values() {
    // Arrange
    let transport = helpers::StubTransport::new(500);
    let app = helpers::app(transport.clone());

    // Act
    let response = helpers::post_form(&app, "/contact", &JANE).await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(FAILURE_MESSAGE));
    assert!(response.body.contains(r#"role="alert""#));
    assert!(response.body.contains(r#"value="Jane Doe""#));
    assert!(response.body.contains(r#"value="jane@example.com""#));
    assert_eq!(transport.calls().len(), 1);
}

#[tokio::test]
async fn test_missing_name_is_rejected_without_network_call() {
    // Arrange
    let transport = helpers::StubTransport::new(200);
    let app = helpers::app(transport.clone());

    // Act
    let response = helpers::post_form(
        &app,
        "/contact",
        &[("name", ""), ("email", "jane@example.com")],
    )
    .await;

    // Assert
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Please enter your name."));
    assert!(response.body.contains(r#"id="name-error""#));
    assert!(!response.body.contains(r#"id="email-error""#));
    assert!(response.body.contains(r#"value="jane@example.com""#));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_malformed_email_is_rejected_without_network_call() {
    // Arrange
    let transport = helpers::StubTransport::new(200);
    let app = helpers::app(transport.clone());

    // Act
    let response = helpers::post_form(
        &app,
        "/contact",
        &[("name", "Jane Doe"), ("email", "not-an-email")],
    )
    .await;

    // Assert
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Please enter a valid email address."));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_missing_fields_in_body_count_as_empty() {
    // Arrange
    let transport = helpers::StubTransport::new(200);
    let app = helpers::app(transport.clone());

    // Act
    let response = helpers::post_form(&app, "/contact", &[]).await;

    // Assert
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Please enter your name."));
    assert!(response.body.contains("Please enter your email address."));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_honeypot_is_never_forwarded() {
    // Arrange
    let transport = helpers::StubTransport::new(200);
    let app = helpers::app(transport.clone());

    // Act
    let response = helpers::post_form(
        &app,
        "/contact",
        &[
            ("name", "Jane Doe"),
            ("email", "jane@example.com"),
            ("company", "Acme Bots"),
        ],
    )
    .await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert!(!calls[0].contains("Acme Bots"));
    assert!(!calls[0].contains("company"));
    assert!(!calls[0].contains("honeypot"));
}

#[tokio::test]
async fn test_each_post_sends_exactly_once() {
    // Arrange
    let transport = helpers::StubTransport::new(200);
    let app = helpers::app(transport.clone());

    // Act
    helpers::post_form(&app, "/contact", &JANE).await;
    helpers::post_form(&app, "/contact", &JANE).await;

    // Assert
    assert_eq!(transport.calls().len(), 2);
}

#[tokio::test]
async fn test_unreadable_body_renders_form_without_network_call() {
    // Arrange
    let transport = helpers::StubTransport::new(200);
    let app = helpers::app(transport.clone());
    let duplicate = helpers::form_request(
        "/contact",
        &[("name", "Jane"), ("name", "Joan"), ("email", "jane@example.com")],
    );
    let wrong_type = axum::http::Request::builder()
        .method("POST")
        .uri("/contact")
        .header("content-type", "text/plain")
        .body(axum::body::Body::from("name=Jane"))
        .unwrap();

    // Act
    let duplicate = helpers::send(&app, duplicate).await;
    let wrong_type = helpers::send(&app, wrong_type).await;

    // Assert
    for response in [duplicate, wrong_type] {
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(
            response.headers["content-type"]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
        assert!(response.body.contains("Please check the form and try again."));
        assert!(response.body.contains(r#"action="/contact""#));
    }
    assert!(transport.calls().is_empty());
}
