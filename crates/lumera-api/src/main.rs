mod api_doc;
mod auth;
mod constants;
mod error;
mod handlers;
mod services;
mod setup;
mod state;
mod telemetry;

use lumera_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    telemetry::init_telemetry();

    // Initialize the application (database, services, routes)
    let (_state, router) = setup::initialize_app(config.clone()).await?;

    // Start the server
    setup::server::start_server(&config, router).await?;

    Ok(())
}
