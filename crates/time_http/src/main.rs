use http_server_time::{cli::Cli, server, utils::logging};

/// Time HTTP Server
///
/// Usage: cargo run --bin http-server-time -- --port 8080
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse CLI arguments
    let config = Cli::parse_config()?;

    logging::init_logging(&config.log_level, config.log_format)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting time server"
    );

    if let Err(e) = server::run(config).await {
        tracing::error!("Error running time server: {}", e);
        return Err(e.into());
    }

    Ok(())
}
