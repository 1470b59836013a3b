use std::env;
use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kb_catalog::config::AssetConfig;

/// Bootstrap entry point: loads configuration, connects to the database
/// and applies pending schema migrations. The catalog itself is consumed
/// as a library by the presentation layer.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sea_orm=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting catalog bootstrap...");

    // Environment variable loading
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL")?;

    let mut options = ConnectOptions::new(db_url);
    options
        .max_connections(10)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(60))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;

    info!("Applying pending migrations...");
    Migrator::up(&db, None).await?;

    let assets = AssetConfig::from_env();
    info!(
        static_url = %assets.static_url,
        media_url = %assets.media_url,
        "Catalog schema is up to date"
    );

    Ok(())
}
