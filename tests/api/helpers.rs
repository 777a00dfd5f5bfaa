//! tests/api/helpers.rs

use interest::configuration::get_configuration;
use interest::startup::Application;
use interest::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // Set TEST_LOG=true to see logs during tests
    // Use bunyan to format the logs nicely:
    // $ TEST_LOG=true cargo test| bunyan
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub struct Test {
    pub address: String,
    pub store_server: MockServer,
    api_client: reqwest::Client,
}

impl Test {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(&format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_interest(&self, email: &str) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/interest", self.address))
            .form(&[("email", email)])
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_decline(&self) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/interest/decline", self.address))
            .form(&[("email", "")])
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn stored_emails(&self) -> Vec<serde_json::Value> {
        self.store_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|request| serde_json::from_slice(&request.body).expect("Failed to parse row"))
            .collect()
    }
}

pub async fn setup() -> Test {
    Lazy::force(&TRACING);

    // Stand-in for the remote table
    let store_server = MockServer::start().await;

    let mut config = get_configuration().expect("Failed to read configuration.");
    config.application.port = 0;
    config.set_store_url(store_server.uri());

    // Launch the server
    let app = Application::build(config.clone()).expect("Failed to build server.");
    let address = format!("http://127.0.0.1:{}", app.port());

    tracing::info!("Test running with the following Settings:\n{:#?}", config);

    // Launch the server as a background task
    let _ = tokio::spawn(app.run());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    Test {
        address,
        store_server,
        api_client,
    }
}

pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str) {
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}
