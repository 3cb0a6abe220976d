use carbon_portal::errors::Result;
use carbon_portal::{config, shell};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; non-fatal, env vars can be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the seed catalog and rates
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;
    info!("Successfully processed application configuration.");

    // 4. Run the interactive shell over a fresh session
    shell::run_shell(&app_config).await?;

    Ok(())
}
