use clap::Parser;
use rust_samples::utils::{logger, validation::Validate};
use rust_samples::{AppState, CliConfig, PingHandler, ServerSettings, TicketStore};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_server_logger(cli.verbose);

    tracing::info!("Starting samples-server");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match ServerSettings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if !settings.auth_enabled {
        tracing::warn!("Token check disabled, ping service is open");
    }

    let state = AppState {
        ping: Arc::new(PingHandler::new(
            settings.server_name.clone(),
            settings.server_version.clone(),
        )),
        ticketing: Arc::new(TicketStore::new()),
    };
    let app = rust_samples::build_router(state, Arc::new(settings.auth_config()));

    let listener = tokio::net::TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);
    println!("✅ samples-server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
