use startup_blurb::configuration::get_configuration;
use startup_blurb::startup::Application;
use startup_blurb::telemetry::get_subscriber;
use startup_blurb::telemetry::init_subscriber;

/// Initialise telemetry, load config, and run the server until it stops
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // "info" is only the default; RUST_LOG overrides it when set
    let subscriber = get_subscriber("blurb", "info", std::io::stdout);
    init_subscriber(subscriber);

    let cfg = get_configuration()?;

    Application::build(cfg).await?.run_until_stopped().await?;

    Ok(())
}
