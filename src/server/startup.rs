use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::Error};

/// Install the global tracing subscriber, honoring `RUST_LOG` and defaulting to `info`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Build the FCM client from the service account file named in the config
pub fn build_push_client(config: &Config) -> Result<push::Client, Error> {
    let service_account = push::ServiceAccountKey::from_file(&config.fcm_credentials_path)?;

    let push_client = push::Client::builder()
        .service_account(service_account)
        .api_url(&config.fcm_api_url)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    tracing::info!(project_id = %push_client.project_id(), "Push client ready");

    Ok(push_client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
