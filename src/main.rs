use roastmap::server::{config::Config, error::Error, model::app::AppState, router, startup};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await?;
    let push_client = startup::build_push_client(&config)?;

    let app = router::routes().with_state(AppState { db, push_client });

    let listener = tokio::net::TcpListener::bind(config.server_address).await?;

    tracing::info!("Starting server on {}", config.server_address);

    axum::serve(listener, app).await?;

    Ok(())
}
