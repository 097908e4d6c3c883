// CLI module for serving the catalog and one-off maintenance tasks

pub mod migrate;
pub mod seed;
pub mod serve;
pub mod token;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::config::{BootstrapSettings, SecretManager};

/// MyShop catalog CLI
#[derive(Parser, Debug)]
#[command(name = "myshop")]
#[command(about = "MyShop item catalog server and maintenance commands", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (the default when no command is given)
    Serve {
        /// Serve the sample catalog from memory instead of the database
        #[arg(long)]
        in_memory: bool,
    },

    /// Run pending database migrations and exit
    Migrate,

    /// Insert the sample catalog when the items table is empty
    Seed,

    /// Print a signed bearer token for the mutating item pages
    IssueToken {
        /// Subject recorded in the token and used as the actor in logs
        #[arg(long)]
        subject: String,

        /// Lifetime of the token in minutes
        #[arg(long, default_value_t = 60)]
        minutes: i64,
    },
}

/// Execute CLI command
///
/// Routes the parsed CLI command to the appropriate handler function.
/// A missing subcommand runs the server against the configured database.
pub async fn execute_command(
    cli: Cli,
    settings: &BootstrapSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Commands::Serve { in_memory: false }) {
        Commands::Serve { in_memory } => {
            let secret_manager = Arc::new(SecretManager::init()?);
            serve::run_server(settings, secret_manager, in_memory).await?;
        }
        Commands::Migrate => {
            migrate::run_migrations(settings).await?;
        }
        Commands::Seed => {
            let inserted = seed::run_seed(settings).await?;
            println!("Inserted {} sample items", inserted);
        }
        Commands::IssueToken { subject, minutes } => {
            let secret_manager = Arc::new(SecretManager::init()?);
            let token = token::issue_token(secret_manager, &subject, minutes)?;
            println!("{}", token);
        }
    }

    Ok(())
}
