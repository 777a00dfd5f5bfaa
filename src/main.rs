use anyhow::Context;
use interest::configuration::get_configuration;
use interest::startup::Application;
use interest::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("interest".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration().context("Failed to read configuration.")?;
    let app = Application::build(config)?;
    app.run().await?;

    Ok(())
}
