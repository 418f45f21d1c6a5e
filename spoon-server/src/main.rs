use spoon_server::{Config, Server, ServerState, init_logger};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    init_logger();

    let config = Config::from_env().inspect_err(|e| tracing::error!("{}", e))?;

    tracing::info!("Starting spoon-server (env: {})", config.environment);

    let state = ServerState::initialize(&config)
        .await
        .inspect_err(|e| tracing::error!("{}", e))?;

    Server::with_state(config, state).run().await?;

    Ok(())
}
