// CLI module for administrative operations requiring database access

pub mod settings;

use clap::{Parser, Subcommand};

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::seed;

/// Stagedoor CLI for administrative operations
#[derive(Parser)]
#[command(name = "stagedoor")]
#[command(about = "Stagedoor content site backend CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run database migrations and ensure default settings exist
    Migrate,

    /// Seed default settings, optionally with demo artists and events
    Seed {
        /// Also insert demo artists and events when the directory is empty
        #[arg(long)]
        demo_content: bool,
    },

    /// Site settings management commands
    #[command(subcommand)]
    Settings(SettingsCommands),
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// List settings, optionally restricted to one section
    List {
        #[arg(long)]
        section: Option<String>,
    },

    /// Update the value of an existing setting
    Set { key: String, value: String },
}

/// Execute CLI command
///
/// Migrations and default-settings seeding already ran at startup; commands
/// here only add work on top of that baseline.
pub async fn execute(cli: Cli, app_data: &AppData) -> Result<(), InternalError> {
    match cli.command {
        Commands::Migrate => {
            tracing::info!("Database migrations completed");
            Ok(())
        }
        Commands::Seed { demo_content } => {
            if demo_content {
                seed::seed_demo_content(&app_data.db).await?;
            }
            tracing::info!("Seeding complete");
            Ok(())
        }
        Commands::Settings(command) => match command {
            SettingsCommands::List { section } => {
                settings::list(app_data, section.as_deref()).await
            }
            SettingsCommands::Set { key, value } => settings::set(app_data, &key, &value).await,
        },
    }
}
