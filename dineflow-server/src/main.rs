use dineflow_server::{Config, Server, utils::logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    logger::init_logger(config.log_format);

    tracing::info!(
        environment = %config.environment,
        port = config.http_port,
        "Starting dineflow-server"
    );

    Server::new(config).run().await?;

    Ok(())
}
