use jawnz_bridge::{
    BroadcastBuffer, BroadcastConfig, InMemoryBinder, InboundListener, MessageChannel, Metrics,
    ShutdownCoordinator,
};
use jawnz_server::{AppState, build_router, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Pick up a local .env before reading JAWNZ_* overrides
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = jawnz_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = jawnz_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting jawnz-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool (runs migrations)
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = jawnz_db::open_pool(&database_path).await?;

    let metrics = Metrics::new();
    let shutdown = ShutdownCoordinator::new();
    let buffer = BroadcastBuffer::new(BroadcastConfig::from(&config.bridge), metrics.clone());

    // Broker bindings
    let binder = InMemoryBinder::new();
    let outbound: Arc<dyn MessageChannel> =
        Arc::new(binder.output(&config.broker.output_destination));
    let listener_handle = InboundListener::new(
        binder.input(&config.broker.input_destination),
        buffer.clone(),
        metrics.clone(),
        &shutdown,
    )
    .spawn();

    let app_state = AppState {
        pool: pool.clone(),
        buffer: buffer.clone(),
        outbound,
        metrics,
        shutdown: shutdown.clone(),
        bridge_config: config.bridge.clone(),
        api_config: config.api.clone(),
    };

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    info!("Server ready to accept connections");
    let mut shutdown_guard = shutdown.subscribe_guard();
    let binder_for_shutdown = binder.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_guard.wait().await;
            // Open consume streams must end for the server to drain
            buffer.close();
            binder_for_shutdown.close();
            info!("Broker bridge closed");
        })
        .await?;

    match listener_handle.await {
        Ok(forwarded) => info!("Inbound listener stopped after {} messages", forwarded),
        Err(e) => warn!("Inbound listener task failed: {}", e),
    }

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}
