use clap::Parser;

use myshop::cli::{execute_command, Cli};
use myshop::config::{init_logging, BootstrapSettings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let cli = Cli::parse();
    let settings = BootstrapSettings::from_env()?;
    tracing::debug!(?settings, "Loaded bootstrap settings");

    if let Err(e) = execute_command(cli, &settings).await {
        tracing::error!(error = %e, "Command failed");
        return Err(e);
    }

    Ok(())
}
