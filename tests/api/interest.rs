//! tests/api/interest.rs

use crate::helpers::{assert_is_redirect_to, setup};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn the_prompt_is_served_with_both_choices() {
    // Arrange
    let app = setup().await;

    // Act
    let response = app.get("/interest").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("Thank you for your Interest"));
    assert!(html.contains("Not Interested"));
}

#[tokio::test]
async fn a_valid_email_is_stored_once_and_redirects_home() {
    // Arrange
    let app = setup().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/emails"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&app.store_server)
        .await;

    // Act
    let response = app.post_interest("ursula_le_guin@gmail.com").await;

    // Assert
    assert_is_redirect_to(&response, "/");
    assert_eq!(
        app.stored_emails().await,
        vec![serde_json::json!({ "email": "ursula_le_guin@gmail.com" })]
    );
}

#[tokio::test]
async fn an_empty_email_is_rejected_without_touching_the_store() {
    // Arrange
    let app = setup().await;

    // Act
    let response = app.post_interest("").await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("Please enter your email address"));
    assert!(app.stored_emails().await.is_empty());
}

#[tokio::test]
async fn a_malformed_email_is_rejected_without_touching_the_store() {
    // Arrange
    let app = setup().await;
    let test_cases = vec![
        ("ursula_le_guin", "missing @"),
        ("ursula@gmail", "no dot after @"),
        ("ursula le@gmail.com", "contains whitespace"),
        ("@gmail.com", "missing local part"),
    ];

    for (email, error_message) in test_cases {
        // Act
        let response = app.post_interest(email).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The prompt did not fail with 400 Bad Request when the email was {}.",
            error_message
        );
        let html = response.text().await.unwrap();
        assert!(html.contains("Please enter a valid email address"));
    }
    assert!(app.stored_emails().await.is_empty());
}

#[tokio::test]
async fn a_store_failure_keeps_the_prompt_open_with_a_generic_message() {
    // Arrange
    let app = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("relation does not exist"))
        .expect(1)
        .mount(&app.store_server)
        .await;

    // Act
    let response = app.post_interest("ursula_le_guin@gmail.com").await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("Failed to save email. Please try again."));
    assert!(!html.contains("relation does not exist"));
    assert!(!html.contains(" disabled"));
}

#[tokio::test]
async fn declining_redirects_home_without_touching_the_store() {
    // Arrange
    let app = setup().await;

    // Act
    let response = app.post_decline().await;

    // Assert
    assert_is_redirect_to(&response, "/");
    assert!(app.stored_emails().await.is_empty());
}
