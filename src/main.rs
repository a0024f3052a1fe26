use clap::Parser;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use stagedoor_backend::app_data::AppData;
use stagedoor_backend::cli::{self, Cli};
use stagedoor_backend::config::{init_logging, BootstrapSettings};
use stagedoor_backend::seed;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {e}");
        return std::process::ExitCode::FAILURE;
    }

    let cli = Cli::parse();
    let settings = BootstrapSettings::from_env();

    let db: DatabaseConnection = match Database::connect(settings.database_url()).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database: {e}");
            return std::process::ExitCode::FAILURE;
        }
    };
    tracing::info!(database_url = settings.database_url(), "Connected to database");

    // Migrations and default settings run on every start; both are
    // insert-if-absent and safe to repeat.
    if let Err(e) = Migrator::up(&db, None).await {
        tracing::error!("Failed to run migrations: {e}");
        return std::process::ExitCode::FAILURE;
    }
    if let Err(e) = seed::ensure_default_settings(&db).await {
        tracing::error!("Failed to seed default settings: {e}");
        return std::process::ExitCode::FAILURE;
    }

    let app_data = AppData::init(db);

    match cli::execute(cli, &app_data).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Command failed: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}
